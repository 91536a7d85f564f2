//! ami-filter - Pointwise and windowed pixel filters
//!
//! This crate provides the spatial manipulations of the AMI engine:
//!
//! - Invert: per-channel `255 - c`
//! - Grayscale: per-pixel channel average
//! - Box blur: region-clamped windowed average over a frozen snapshot
//!
//! All filters are scoped to an [`ami_core::Region`] and validate it
//! before writing any pixel. HSV adjustment lives in `ami-color` and
//! text annotation in `ami-annotate`.

mod blur;
mod error;
mod pointwise;

pub use blur::{box_blur, box_blur_from};
pub use error::{FilterError, FilterResult};
pub use pointwise::{grayscale, invert};
