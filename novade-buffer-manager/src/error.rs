use crate::buffer::BufferId;
use thiserror::Error;

/// Errors reported by the [`crate::BufferManager`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate {bytes} bytes of pixel memory")]
    AllocationFailure { bytes: usize },

    #[error("Pixel data size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unknown buffer {0}")]
    UnknownBuffer(BufferId),

    #[error("Lock for buffer {0} is poisoned")]
    Poisoned(BufferId),
}
