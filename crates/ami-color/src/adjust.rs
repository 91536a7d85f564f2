//! HSV adjustment of a buffer region
//!
//! Rotates hue and scales saturation/value per pixel, reading every
//! input from a frozen snapshot so the three adjustments are always
//! computed from the original color, never from an already-adjusted
//! neighbor.
//!
//! Whether a pixel is achromatic is decided once, from its original
//! chroma: a pixel that starts gray stays gray regardless of the hue
//! delta or saturation factor (see [`crate::Hsv`]).

use crate::hsv::{MAX_DEGREES, hsv_to_rgb, rgb_to_hsv};
use crate::{ColorResult, Hsv};
use ami_core::{PixelBuffer, Region};

/// Per-pixel HSV adjustment parameters
///
/// All fields default to the neutral 0.0:
///
/// - `hue_delta`: degrees added to the hue of chromatic pixels, may be
///   negative
/// - `saturation_factor`: saturation is scaled by `1 + factor` and
///   clamped to [0, 1]; -1 zeroes it
/// - `value_factor`: value is scaled by `1 + factor` and clamped to
///   [0, 1]; -1 zeroes it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsvAdjustment {
    pub hue_delta: f64,
    pub saturation_factor: f64,
    pub value_factor: f64,
}

/// Scale a [0, 1] quantity by `1 + factor` and clamp it back to [0, 1].
#[inline]
fn scale_clamped(component: f64, factor: f64) -> f64 {
    (component * (1.0 + factor)).clamp(0.0, 1.0)
}

impl HsvAdjustment {
    /// Apply this adjustment to a single HSV color.
    ///
    /// Achromatic pixels only respond to the value factor; the hue
    /// delta and saturation factor cannot give them chroma.
    pub fn apply(&self, hsv: Hsv) -> Hsv {
        match hsv {
            Hsv::Achromatic { value } => Hsv::Achromatic {
                value: scale_clamped(value, self.value_factor),
            },
            Hsv::Chromatic {
                hue,
                saturation,
                value,
            } => Hsv::Chromatic {
                hue: (hue + self.hue_delta).rem_euclid(MAX_DEGREES),
                saturation: scale_clamped(saturation, self.saturation_factor),
                value: scale_clamped(value, self.value_factor),
            },
        }
    }
}

/// Adjust the HSV components of a buffer region in place.
///
/// Takes a snapshot, then for every region pixel converts the snapshot
/// color to HSV, applies the adjustment, converts back, and writes the
/// result to the live buffer. Pixels outside the region are untouched;
/// the buffer is unmodified on error.
///
/// # Errors
///
/// Returns an error if the region exceeds the buffer extents.
pub fn adjust_hsv(
    buf: &mut PixelBuffer,
    region: Region,
    adjustment: HsvAdjustment,
) -> ColorResult<()> {
    region.check_within(buf.width(), buf.height())?;

    let src = buf.snapshot();
    adjust_region(&src, buf, region, adjustment);
    Ok(())
}

/// Adjust HSV components from a frozen source into a separate destination.
///
/// The split interface makes the snapshot discipline explicit: `src` is
/// never written, `dst` is never read.
///
/// # Errors
///
/// Returns a dimension-mismatch error if `src` and `dst` differ in size
/// and a core error if the region exceeds the buffer extents.
pub fn adjust_hsv_from(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    region: Region,
    adjustment: HsvAdjustment,
) -> ColorResult<()> {
    if !src.sizes_equal(dst) {
        return Err(ami_core::Error::DimensionMismatch {
            expected: (src.width(), src.height()),
            actual: (dst.width(), dst.height()),
        }
        .into());
    }
    region.check_within(src.width(), src.height())?;

    adjust_region(src, dst, region, adjustment);
    Ok(())
}

fn adjust_region(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    region: Region,
    adjustment: HsvAdjustment,
) {
    for y in region.ys() {
        for x in region.xs() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            let adjusted = adjustment.apply(rgb_to_hsv(r, g, b));
            let (r, g, b) = hsv_to_rgb(adjusted);
            dst.set_rgb_unchecked(x, y, r, g, b);
        }
    }
}
