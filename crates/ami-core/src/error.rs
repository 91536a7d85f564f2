//! Error types for ami-core
//!
//! Provides a unified error type for buffer and region operations.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside the buffer
    #[error("pixel ({x},{y}) out of bounds for {width}x{height} buffer")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Region corners are inverted (min greater than max)
    #[error("region corners are inverted: ({xmin},{ymin})..({xmax},{ymax})")]
    InvertedRegion { xmin: u32, ymin: u32, xmax: u32, ymax: u32 },

    /// Region bounds exceed the buffer extents
    #[error("region ({xmin},{ymin})..({xmax},{ymax}) exceeds {width}x{height} buffer")]
    InvalidRegion {
        xmin: u32,
        ymin: u32,
        xmax: u32,
        ymax: u32,
        width: u32,
        height: u32,
    },

    /// Buffer dimension mismatch between a source and a destination
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Raw data length does not match the declared dimensions
    #[error("raw data length {len} does not match {width}x{height} RGB buffer")]
    InvalidDataLength { len: usize, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
