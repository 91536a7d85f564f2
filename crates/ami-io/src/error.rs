//! I/O error types
//!
//! Provides a unified error type for bitmap reading and writing. The
//! codec maps structural problems into `IoError` variants so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file uses a BMP feature the codec does not support
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. zero dimensions)
    #[error("core error: {0}")]
    Core(#[from] ami_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
