//! Application state for the classifier service
//!
//! The classifier is assembled once here and handed to request handlers as
//! an explicit shared handle; there are no module-level globals. The model
//! is read-only after construction, so concurrent requests share it without
//! locking.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::backend::{backend_name, default_device, DefaultBackend};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::inference::predictor::Predictor;
use crate::model::classifier::{ClassifierConfig, ImageClassifier};

/// Shared application state
pub struct AppState {
    /// The assembled classifier, shared read-only by all requests
    pub predictor: Predictor<DefaultBackend>,
    /// Service configuration the state was built from
    pub config: ServiceConfig,
    /// Server start time
    started_at: Instant,
}

/// Shared handle passed into request handlers
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Assemble the classifier and build the application state.
    ///
    /// This is the one-time startup step: any failure here (an invalid
    /// configuration or an unreadable weights file) propagates and aborts
    /// the process. There is no retry.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let device = default_device();

        let model_config = ClassifierConfig::new()
            .with_num_classes(config.num_classes)
            .with_image_size(config.image_size)
            .with_head_units(config.head_units);
        model_config.validate()?;

        info!(
            backend = backend_name(),
            image_size = config.image_size,
            num_classes = config.num_classes,
            "assembling classifier"
        );

        let mut model = ImageClassifier::new(&model_config, &device);

        match &config.weights_path {
            Some(path) => {
                info!("loading pretrained backbone weights from {:?}", path);
                model = model.load_backbone(path, &device)?;
                warn!("classification head weights are randomly initialized and untrained");
            }
            None => {
                warn!(
                    "no pretrained weights configured; the model is fully random \
                    and predictions are placeholders"
                );
            }
        }

        let predictor = Predictor::new(model, device, config.image_size as u32);

        Ok(Self {
            predictor,
            config,
            started_at: Instant::now(),
        })
    }

    /// Seconds since the state was constructed
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
