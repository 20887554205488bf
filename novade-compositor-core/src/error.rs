//! Error type shared by every compositor-core operation.

use novade_buffer_manager::BufferError;
use thiserror::Error;

use crate::window::WindowId;

/// Errors reported by the window table, cursor and composition driver.
///
/// All of them are local and recoverable: a failed operation leaves the
/// compositor state as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositorError {
    #[error("Window table is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid window handle {0}")]
    InvalidHandle(WindowId),

    #[error("Pixel data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Failed to allocate {bytes} bytes of pixel memory")]
    AllocationFailure { bytes: usize },

    #[error("Invalid window dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Renderer error: {0}")]
    Render(String),

    /// A buffer the table refers to is missing or its lock is poisoned.
    #[error("Internal compositor error: {0}")]
    Internal(String),
}

impl From<BufferError> for CompositorError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::InvalidDimensions { width, height } => {
                CompositorError::InvalidDimensions { width, height }
            }
            BufferError::AllocationFailure { bytes } => CompositorError::AllocationFailure { bytes },
            BufferError::SizeMismatch { expected, actual } => {
                CompositorError::SizeMismatch { expected, actual }
            }
            other @ (BufferError::UnknownBuffer(_) | BufferError::Poisoned(_)) => {
                CompositorError::Internal(other.to_string())
            }
        }
    }
}

/// Result type for compositor-core operations.
pub type Result<T, E = CompositorError> = std::result::Result<T, E>;
