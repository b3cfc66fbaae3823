//! Inference module for image preprocessing and prediction
//!
//! This module provides:
//! - Image decoding from uploaded bytes
//! - The fixed preprocessing pipeline (resize + channel normalization)
//! - Single-image prediction with the assembled classifier

pub mod predictor;

// Re-export main types for convenience
pub use predictor::{Prediction, Predictor};
