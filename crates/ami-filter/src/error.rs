//! Error types for ami-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (invalid region, bad dimensions)
    #[error("core error: {0}")]
    Core(#[from] ami_core::Error),

    /// Invalid filter parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
