//! Pointwise filters
//!
//! Stateless per-pixel transforms with no cross-pixel read dependency:
//! each output pixel is a function of the same input pixel only, so
//! neither filter needs a snapshot.
//!
//! Invert is an involution (applying it twice restores the original).
//! Grayscale is idempotent after the first application but not an
//! involution.

use crate::FilterResult;
use ami_core::{MAX_CHANNEL, PixelBuffer, Region};

/// Invert every pixel in the region: each channel c becomes `255 - c`.
///
/// Pixels outside the region are untouched. The buffer is unmodified
/// on error.
///
/// # Errors
///
/// Returns an error if the region exceeds the buffer extents.
pub fn invert(buf: &mut PixelBuffer, region: Region) -> FilterResult<()> {
    region.check_within(buf.width(), buf.height())?;

    for y in region.ys() {
        for x in region.xs() {
            let (r, g, b) = buf.get_rgb_unchecked(x, y);
            buf.set_rgb_unchecked(x, y, MAX_CHANNEL - r, MAX_CHANNEL - g, MAX_CHANNEL - b);
        }
    }
    Ok(())
}

/// Replace every pixel in the region with its channel average.
///
/// All three channels become `floor((R + G + B) / 3)` (truncating
/// integer division). Pixels outside the region are untouched. The
/// buffer is unmodified on error.
///
/// # Errors
///
/// Returns an error if the region exceeds the buffer extents.
pub fn grayscale(buf: &mut PixelBuffer, region: Region) -> FilterResult<()> {
    region.check_within(buf.width(), buf.height())?;

    for y in region.ys() {
        for x in region.xs() {
            let (r, g, b) = buf.get_rgb_unchecked(x, y);
            let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
            buf.set_rgb_unchecked(x, y, avg, avg, avg);
        }
    }
    Ok(())
}
