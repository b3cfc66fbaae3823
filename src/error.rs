//! Error Handling Module
//!
//! Defines the error type for the classifier service library.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Main error type for classifier service operations
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Error decoding or processing an image
    #[error("Image error: {0}")]
    Image(String),

    /// Error with model assembly or weight loading
    #[error("Model error: {0}")]
    Model(String),

    /// Error during inference
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error (missing file, section, or key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for ClassifierError {
    fn from(err: image::ImageError) -> Self {
        ClassifierError::Image(err.to_string())
    }
}

/// Convenience Result type for classifier service operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
