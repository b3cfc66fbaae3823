//! Classifier assembly
//!
//! Composes the feature-extraction backbone with a new classification head:
//! global average pooling, a dense layer with ReLU, and a final dense layer
//! producing one logit per class. `forward_softmax` turns the logits into a
//! probability distribution for inference.
//!
//! The head is never trained in this repository. Unless a pretrained
//! backbone checkpoint is loaded, the entire model runs with random weights
//! and its predictions are placeholders.

use std::path::Path;

use burn::{
    config::Config,
    module::Module,
    nn::{
        pool::{AdaptiveAvgPool2d, AdaptiveAvgPool2dConfig},
        Linear, LinearConfig, Relu,
    },
    record::{CompactRecorder, Recorder},
    tensor::{backend::Backend, Tensor},
};

use crate::error::ClassifierError;
use crate::error::Result as ClassifierResult;
use crate::model::backbone::{feature_dim, Backbone};
use crate::LABELS;

/// Configuration for the classifier assembly
#[derive(Config, Debug)]
pub struct ClassifierConfig {
    /// Number of output classes
    #[config(default = "10")]
    pub num_classes: usize,

    /// Input image size (assumes square images)
    #[config(default = "224")]
    pub image_size: usize,

    /// Number of input channels (3 for RGB)
    #[config(default = "3")]
    pub in_channels: usize,

    /// Width of the fully connected layer in the head
    #[config(default = "1024")]
    pub head_units: usize,

    /// Base number of convolutional filters in the backbone
    #[config(default = "32")]
    pub base_filters: usize,
}

impl ClassifierConfig {
    /// Validate the configuration
    ///
    /// The head's output width must equal the label set's length, otherwise
    /// argmax indices would not map onto class names.
    pub fn validate(&self) -> ClassifierResult<()> {
        if self.num_classes != LABELS.len() {
            return Err(ClassifierError::Model(format!(
                "num_classes ({}) does not match label set length ({})",
                self.num_classes,
                LABELS.len()
            )));
        }
        if self.image_size == 0 || self.image_size % 16 != 0 {
            return Err(ClassifierError::Model(
                "image_size must be a positive multiple of 16".to_string(),
            ));
        }
        if self.head_units == 0 {
            return Err(ClassifierError::Model(
                "head_units must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Image classifier: backbone + global average pooling + dense head
#[derive(Module, Debug)]
pub struct ImageClassifier<B: Backend> {
    pub backbone: Backbone<B>,
    pub global_pool: AdaptiveAvgPool2d,
    pub fc1: Linear<B>,
    pub fc2: Linear<B>,
    num_classes: usize,
}

impl<B: Backend> ImageClassifier<B> {
    /// Assemble a classifier from configuration with random weights
    pub fn new(config: &ClassifierConfig, device: &B::Device) -> Self {
        let backbone = Backbone::new(config.in_channels, config.base_filters, device);
        let global_pool = AdaptiveAvgPool2dConfig::new([1, 1]).init();
        let fc1 = LinearConfig::new(feature_dim(config.base_filters), config.head_units).init(device);
        let fc2 = LinearConfig::new(config.head_units, config.num_classes).init(device);

        Self {
            backbone,
            global_pool,
            fc1,
            fc2,
            num_classes: config.num_classes,
        }
    }

    /// Restore pretrained backbone weights from a checkpoint file.
    ///
    /// Only the backbone is restored; the head keeps its random
    /// initialization. A load failure propagates and aborts startup.
    pub fn load_backbone(mut self, path: &Path, device: &B::Device) -> ClassifierResult<Self> {
        let record = CompactRecorder::new()
            .load(path.to_path_buf(), device)
            .map_err(|e| {
                ClassifierError::Model(format!(
                    "failed to load backbone weights from {}: {e}",
                    path.display()
                ))
            })?;
        self.backbone = self.backbone.load_record(record);
        Ok(self)
    }

    /// Forward pass through the network
    ///
    /// # Arguments
    /// * `x` - Input tensor of shape [batch_size, 3, height, width]
    ///
    /// # Returns
    /// * Logits tensor of shape [batch_size, num_classes]
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.backbone.forward(x);

        // Global pooling: [B, C, H, W] -> [B, C, 1, 1]
        let x = self.global_pool.forward(x);

        // Flatten: [B, C, 1, 1] -> [B, C]
        let [batch_size, channels, _, _] = x.dims();
        let x = x.reshape([batch_size, channels]);

        let x = self.fc1.forward(x);
        let x = Relu::new().forward(x);
        self.fc2.forward(x)
    }

    /// Forward pass with softmax for inference
    pub fn forward_softmax(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let logits = self.forward(x);
        burn::tensor::activation::softmax(logits, 1)
    }

    /// Get the number of output classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{default_device, DefaultBackend};

    fn small_config() -> ClassifierConfig {
        ClassifierConfig::new()
            .with_image_size(32)
            .with_base_filters(4)
            .with_head_units(16)
    }

    #[test]
    fn test_config_defaults() {
        let config = ClassifierConfig::new();
        assert_eq!(config.num_classes, 10);
        assert_eq!(config.image_size, 224);
        assert_eq!(config.head_units, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_class_mismatch() {
        let config = ClassifierConfig::new().with_num_classes(12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_image_size() {
        let config = ClassifierConfig::new().with_image_size(100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_forward_output_shape() {
        let device = default_device();
        let config = small_config();
        let model = ImageClassifier::<DefaultBackend>::new(&config, &device);

        let input = Tensor::zeros([2, 3, 32, 32], &device);
        let logits = model.forward(input);

        assert_eq!(logits.dims(), [2, 10]);
    }

    #[test]
    fn test_forward_softmax_is_distribution() {
        let device = default_device();
        let config = small_config();
        let model = ImageClassifier::<DefaultBackend>::new(&config, &device);

        let input = Tensor::zeros([1, 3, 32, 32], &device);
        let probs: Vec<f32> = model
            .forward_softmax(input)
            .into_data()
            .to_vec()
            .unwrap();

        assert_eq!(probs.len(), 10);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_load_backbone_missing_file_fails() {
        let device = default_device();
        let model = ImageClassifier::<DefaultBackend>::new(&small_config(), &device);
        let result = model.load_backbone(Path::new("/nonexistent/backbone.mpk"), &device);
        assert!(matches!(result, Err(ClassifierError::Model(_))));
    }
}
