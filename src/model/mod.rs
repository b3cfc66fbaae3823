//! Model module for the classifier assembly using the Burn framework
//!
//! This module provides:
//! - A convolutional feature-extraction backbone
//! - The classifier assembly: backbone + global average pooling + a
//!   two-layer classification head with softmax output
//! - Optional loading of pretrained backbone weights

pub mod backbone;
pub mod classifier;

// Re-export main types for convenience
pub use backbone::Backbone;
pub use classifier::{ClassifierConfig, ImageClassifier};
