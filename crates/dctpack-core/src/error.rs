//! Error types for codec operations

use thiserror::Error;

/// Result type for codec operations
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid channel count: expected 3, got {0}")]
    InvalidChannelCount(usize),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Plane shape mismatch: {0}")]
    PlaneShapeMismatch(String),

    #[error("Sparse matrix shape mismatch: {0}")]
    SparseShapeMismatch(String),

    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
