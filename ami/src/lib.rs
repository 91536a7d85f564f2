//! AMI - image manipulation library
//!
//! Applies pointwise and neighborhood pixel transforms to a rectangular
//! region of an in-memory RGB buffer:
//!
//! - Invert and grayscale (pointwise)
//! - Box blur (region-clamped windowed average)
//! - HSV adjustment (hue rotation, saturation/value scaling)
//! - Glyph-atlas text annotation
//!
//! # Example
//!
//! ```
//! use ami::{PixelBuffer, Region};
//! use ami::filter::invert;
//!
//! let mut buf = PixelBuffer::new(4, 4).unwrap();
//! let region = Region::full(&buf);
//! invert(&mut buf, region).unwrap();
//! assert_eq!(buf.get_rgb(0, 0), Some((255, 255, 255)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ami_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ami_annotate as annotate;
pub use ami_color as color;
pub use ami_filter as filter;
pub use ami_io as io;
