//! Compute module - the droplet compositing pipeline.

mod canvas;
mod compositor;
mod kernel;
mod threshold;

pub use canvas::*;
pub use compositor::*;
pub use kernel::*;
pub use threshold::*;

/// Errors from kernel generation and compositing.
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("parameter `{name}` must be positive (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("shape mismatch in {context}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}
