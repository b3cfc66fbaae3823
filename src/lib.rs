//! # Fashion Classifier Service
//!
//! A minimal image-classification demo service built with the Burn framework.
//! A convolutional feature-extraction backbone is composed with a freshly
//! attached 10-way classification head at startup, and the assembled model is
//! served over HTTP for single-image predictions.
//!
//! ## Modules
//!
//! - `model`: backbone and classifier assembly built with Burn
//! - `inference`: image preprocessing and prediction
//! - `server`: axum HTTP service (`POST /predict`, `GET /health`)
//! - `config`: service configuration and INI key/value lookup
//! - `backend`: Burn backend selection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fashion_classifier::config::ServiceConfig;
//! use fashion_classifier::server::{serve, AppState};
//!
//! let state = AppState::new(ServiceConfig::default())?;
//! serve(state).await?;
//! ```
//!
//! Note: unless a pretrained backbone checkpoint is configured, every weight
//! in the model is randomly initialized. The classification head is never
//! trained in this repository, so predictions are placeholders.

pub mod backend;
pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod server;

// Re-export commonly used items for convenience
pub use config::{get_config, ServiceConfig};
pub use error::{ClassifierError, Result};
pub use inference::predictor::{Prediction, Predictor};
pub use model::classifier::{ClassifierConfig, ImageClassifier};

/// Number of output classes (Fashion-MNIST labels)
pub const NUM_CLASSES: usize = 10;

/// Input image size expected by the backbone (square)
pub const IMAGE_SIZE: usize = 224;

/// Width of the fully connected layer in the classification head
pub const HEAD_UNITS: usize = 1024;

/// Class names, positionally aligned with the head's output indices
pub const LABELS: [&str; NUM_CLASSES] = [
    "T-shirt/top",
    "Trouser",
    "Pullover",
    "Dress",
    "Coat",
    "Sandal",
    "Shirt",
    "Sneaker",
    "Bag",
    "Ankle boot",
];

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Look up a class name by output index
pub fn class_name(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}
