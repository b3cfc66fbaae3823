//! Backend abstraction - CPU inference backend
//!
//! The service runs inference only, so the portable `ndarray` backend is
//! used everywhere. Swapping in an accelerated backend is a type-alias
//! change here.

use burn::backend::ndarray::NdArrayDevice;

/// The backend used for model assembly and inference
pub type DefaultBackend = burn::backend::NdArray<f32>;

/// Get the default device (CPU)
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::Cpu
}

/// Get a human-readable name for the current backend
pub fn backend_name() -> &'static str {
    "ndarray (CPU)"
}
