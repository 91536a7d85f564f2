//! Error types for ami-color

use thiserror::Error;

/// Errors that can occur during color operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error (invalid region, bad dimensions)
    #[error("core error: {0}")]
    Core(#[from] ami_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
