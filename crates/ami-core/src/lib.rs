//! ami-core - Pixel buffer and region primitives
//!
//! This crate provides the data structures shared by every AMI
//! manipulation:
//!
//! - [`PixelBuffer`]: a width x height grid of 3-channel 8-bit RGB pixels
//! - [`Region`]: the half-open rectangle a filter is scoped to affect
//! - [`Error`] / [`Result`]: the shared error type
//!
//! Filters live in the `ami-filter`, `ami-color`, and `ami-annotate`
//! crates; file I/O lives in `ami-io`.

mod buffer;
mod error;
mod region;

pub use buffer::{Channel, MAX_CHANNEL, PixelBuffer};
pub use error::{Error, Result};
pub use region::Region;
