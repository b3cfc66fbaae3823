//! Inference Predictor Module
//!
//! Runs the fixed preprocessing pipeline and the assembled classifier on a
//! single uploaded image: decode, resize to the model's input size,
//! normalize channels, forward with softmax, argmax to a label.

use image::{imageops::FilterType, DynamicImage};
use serde::{Deserialize, Serialize};

use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::error::Result;
use crate::model::classifier::ImageClassifier;
use crate::{class_name, ClassifierError};

/// Resize an image to the target dimensions
fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Normalize an image to a flat vector, scaling each channel to [-1, 1]
/// to match the backbone's pretraining distribution.
/// Returns CHW layout: [C, H, W] flattened
fn normalize_image(image: &DynamicImage) -> Vec<f32> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let num_pixels = (width * height) as usize;

    // Pre-allocate for CHW layout
    let mut normalized = vec![0.0f32; 3 * num_pixels];

    for (i, pixel) in rgb.pixels().enumerate() {
        // CHW layout: all R values, then all G values, then all B values
        normalized[i] = pixel[0] as f32 / 127.5 - 1.0;
        normalized[num_pixels + i] = pixel[1] as f32 / 127.5 - 1.0;
        normalized[2 * num_pixels + i] = pixel[2] as f32 / 127.5 - 1.0;
    }

    normalized
}

/// Index of the largest value; ties resolve to the lowest index
fn argmax(values: &[f32]) -> usize {
    let mut best_index = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (i, &value) in values.iter().enumerate() {
        if value > best_value {
            best_index = i;
            best_value = value;
        }
    }
    best_index
}

/// Result of a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class index
    pub label_index: usize,

    /// Predicted class name
    pub label: String,

    /// Probability for the predicted class
    pub confidence: f32,

    /// Full probability distribution over all classes
    pub probabilities: Vec<f32>,
}

impl Prediction {
    /// Build a prediction from a probability distribution
    pub fn from_probabilities(probabilities: Vec<f32>) -> Self {
        let label_index = argmax(&probabilities);
        let confidence = probabilities.get(label_index).copied().unwrap_or(0.0);
        let label = class_name(label_index).unwrap_or("Unknown").to_string();

        Self {
            label_index,
            label,
            confidence,
            probabilities,
        }
    }
}

/// Predictor owning the assembled classifier
pub struct Predictor<B: Backend> {
    model: ImageClassifier<B>,
    device: B::Device,
    image_size: u32,
}

impl<B: Backend> Predictor<B> {
    /// Create a new predictor around an assembled model
    pub fn new(model: ImageClassifier<B>, device: B::Device, image_size: u32) -> Self {
        Self {
            model,
            device,
            image_size,
        }
    }

    /// Decode raw uploaded bytes into an image.
    ///
    /// Bytes that do not decode as an image are an error; there is no
    /// fallback prediction.
    pub fn decode_image(&self, bytes: &[u8]) -> Result<DynamicImage> {
        Ok(image::load_from_memory(bytes)?)
    }

    /// Preprocess an image: resize to the input size and normalize.
    /// Returns a CHW-flattened buffer of length 3 * size * size.
    pub fn preprocess(&self, image: &DynamicImage) -> Vec<f32> {
        let resized = resize_image(image, self.image_size, self.image_size);
        normalize_image(&resized)
    }

    /// Run the classifier on a preprocessed buffer
    pub fn predict_tensor(&self, data: Vec<f32>) -> Result<Prediction> {
        let size = self.image_size as usize;
        let input = Tensor::<B, 4>::from_floats(
            TensorData::new(data, [1, 3, size, size]),
            &self.device,
        );

        let probabilities: Vec<f32> = self
            .model
            .forward_softmax(input)
            .into_data()
            .to_vec()
            .map_err(|e| ClassifierError::Inference(format!("{e:?}")))?;

        Ok(Prediction::from_probabilities(probabilities))
    }

    /// Predict on raw uploaded bytes: decode, preprocess, classify
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction> {
        let image = self.decode_image(bytes)?;
        let data = self.preprocess(&image);
        self.predict_tensor(data)
    }
}
