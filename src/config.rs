//! Service Configuration Module
//!
//! Defines the service configuration structure with documented defaults and
//! an INI-style `(section, key)` lookup utility. The lookup reads the file
//! on every call; there is no caching and no schema validation.

use std::path::{Path, PathBuf};

use ini::Ini;
use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::{HEAD_UNITS, IMAGE_SIZE, NUM_CLASSES};

/// Default location of the INI configuration file, relative to the
/// process working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/config.ini";

/// Service configuration with documented defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind the HTTP server to
    pub host: String,
    /// Port to bind the HTTP server to
    pub port: u16,
    /// Input image size (width and height, assumed square)
    pub image_size: usize,
    /// Width of the fully connected layer in the classification head
    pub head_units: usize,
    /// Number of output classes
    pub num_classes: usize,
    /// Optional path to a pretrained backbone checkpoint. When absent the
    /// whole model keeps its random initialization.
    pub weights_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            image_size: IMAGE_SIZE,
            head_units: HEAD_UNITS,
            num_classes: NUM_CLASSES,
            weights_path: None,
        }
    }
}

impl ServiceConfig {
    /// Build a configuration from an INI file, falling back to defaults for
    /// anything the file does not set.
    ///
    /// Recognized keys: `[api] host`, `[api] port`, `[model] weights`.
    pub fn from_ini(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = get_config_from(path, "api", "host") {
            config.host = host;
        }
        if let Ok(port) = get_config_from(path, "api", "port") {
            config.port = port
                .parse()
                .map_err(|_| ClassifierError::Config(format!("invalid port value: {port}")))?;
        }
        if let Ok(weights) = get_config_from(path, "model", "weights") {
            config.weights_path = Some(PathBuf::from(weights));
        }

        Ok(config)
    }
}

/// Look up a key in the default configuration file.
///
/// Returns the exact string value stored in the file. A missing file,
/// section, or key is a `Config` error that propagates to the caller.
pub fn get_config(section: &str, key: &str) -> Result<String> {
    get_config_from(Path::new(DEFAULT_CONFIG_PATH), section, key)
}

/// Look up a key in an INI file at an explicit path.
pub fn get_config_from(path: &Path, section: &str, key: &str) -> Result<String> {
    let ini = Ini::load_from_file(path)
        .map_err(|e| ClassifierError::Config(format!("failed to read {}: {e}", path.display())))?;

    ini.section(Some(section))
        .and_then(|props| props.get(key))
        .map(|value| value.to_string())
        .ok_or_else(|| ClassifierError::Config(format!("missing key '{key}' in section '[{section}]'")))
}
