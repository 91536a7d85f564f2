//! Box blur
//!
//! Windowed spatial-average filter. Each output pixel is the
//! per-channel mean of the `(2r+1) x (2r+1)` window around it, with the
//! window intersected with the operation region: pixels outside the
//! region are excluded from the average even when they lie inside the
//! buffer, and border pixels of the region average over fewer samples.
//! There is no reflection or replication padding.
//!
//! The blur reads from a frozen snapshot of the pre-filter state, so
//! its output for a region depends only on that region's original
//! pixels. Rows are independent given the snapshot and could be
//! processed in any order.

use crate::{FilterError, FilterResult};
use ami_core::{PixelBuffer, Region};

/// Validate a blur radius and convert it to the unsigned window extent.
fn check_radius(radius: i32) -> FilterResult<u32> {
    if radius < 0 {
        return Err(FilterError::InvalidParameter(format!(
            "blur radius must be non-negative, got {radius}"
        )));
    }
    Ok(radius as u32)
}

/// Blur a region of the buffer in place.
///
/// Takes a snapshot of the current pixel values, then overwrites each
/// region pixel with the truncated per-channel mean of the snapshot
/// pixels inside its window intersected with the region. A radius of 0
/// is the identity. The buffer is unmodified on error.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] for a negative radius and
/// a core error if the region exceeds the buffer extents.
pub fn box_blur(buf: &mut PixelBuffer, region: Region, radius: i32) -> FilterResult<()> {
    let radius = check_radius(radius)?;
    region.check_within(buf.width(), buf.height())?;

    let src = buf.snapshot();
    blur_region(&src, buf, region, radius);
    Ok(())
}

/// Blur a region from a frozen source into a separate destination.
///
/// The split interface makes the snapshot discipline explicit: `src` is
/// never written, `dst` is never read. Destination pixels outside the
/// region are left as they are.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] for a negative radius, a
/// dimension-mismatch error if `src` and `dst` differ in size, and a
/// core error if the region exceeds the buffer extents.
pub fn box_blur_from(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    region: Region,
    radius: i32,
) -> FilterResult<()> {
    let radius = check_radius(radius)?;
    if !src.sizes_equal(dst) {
        return Err(ami_core::Error::DimensionMismatch {
            expected: (src.width(), src.height()),
            actual: (dst.width(), dst.height()),
        }
        .into());
    }
    region.check_within(src.width(), src.height())?;

    blur_region(src, dst, region, radius);
    Ok(())
}

/// Average each region pixel's window, clamped to the region.
fn blur_region(src: &PixelBuffer, dst: &mut PixelBuffer, region: Region, radius: u32) {
    for y in region.ys() {
        let y0 = region.ymin.max(y.saturating_sub(radius));
        let y1 = region.ymax.min(y.saturating_add(radius).saturating_add(1));
        for x in region.xs() {
            let x0 = region.xmin.max(x.saturating_sub(radius));
            let x1 = region.xmax.min(x.saturating_add(radius).saturating_add(1));

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;
            for wy in y0..y1 {
                for wx in x0..x1 {
                    let (r, g, b) = src.get_rgb_unchecked(wx, wy);
                    sum_r += r as u64;
                    sum_g += g as u64;
                    sum_b += b as u64;
                    count += 1;
                }
            }

            // count >= 1: (x, y) itself is always in the window
            dst.set_rgb_unchecked(
                x,
                y,
                (sum_r / count) as u8,
                (sum_g / count) as u8,
                (sum_b / count) as u8,
            );
        }
    }
}
