//! RGB <-> HSV conversion
//!
//! The HSV state is a tagged variant rather than a hue paired with a
//! side flag: a pixel whose chroma is zero has no defined hue and is
//! represented as [`Hsv::Achromatic`], which carries only its value.
//! This makes "hue rotation cannot turn gray into color" a property of
//! the type instead of a convention.
//!
//! HSV triples are transient: they are recomputed from RGB for every
//! pixel on every call and never persisted.

/// Degrees in a full hue circle.
pub const MAX_DEGREES: f64 = 360.0;

/// Degrees per hue sector.
const SECTOR_DEGREES: f64 = 60.0;

/// HSV color of a single pixel
///
/// - `hue`: degrees in [0, 360)
/// - `saturation`: [0, 1]
/// - `value`: [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hsv {
    /// A pixel with nonzero chroma and a defined hue.
    Chromatic {
        hue: f64,
        saturation: f64,
        value: f64,
    },
    /// A gray pixel (R = G = B): chroma is zero and hue is undefined.
    Achromatic { value: f64 },
}

impl Hsv {
    /// Get the value component.
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Hsv::Chromatic { value, .. } => value,
            Hsv::Achromatic { value } => value,
        }
    }

    /// Get the saturation component (zero for achromatic pixels).
    #[inline]
    pub fn saturation(&self) -> f64 {
        match *self {
            Hsv::Chromatic { saturation, .. } => saturation,
            Hsv::Achromatic { .. } => 0.0,
        }
    }
}

/// Convert 8-bit RGB channels to HSV.
///
/// Channels are normalized to [0, 1]; the hue comes from the standard
/// piecewise formula and lands in [0, 360). Equal channels produce
/// [`Hsv::Achromatic`].
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let value = max;

    if chroma == 0.0 {
        return Hsv::Achromatic { value };
    }

    // chroma > 0 implies value > 0
    let saturation = chroma / value;
    let piecewise = if max == r {
        ((g - b) / chroma) % 6.0
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    let hue = (SECTOR_DEGREES * piecewise).rem_euclid(MAX_DEGREES);

    Hsv::Chromatic {
        hue,
        saturation,
        value,
    }
}

/// Convert HSV back to 8-bit RGB channels.
///
/// Uses the sector decomposition of the hue circle; the final channels
/// truncate toward zero (not round), which is observable in round-trip
/// tests and deliberately preserved.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let (chroma, temp, value) = match hsv {
        Hsv::Achromatic { value } => (0.0, (0.0, 0.0, 0.0), value),
        Hsv::Chromatic {
            hue,
            saturation,
            value,
        } => {
            let chroma = value * saturation;
            let h = hue / SECTOR_DEGREES;
            let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
            let temp = if h <= 1.0 {
                (chroma, x, 0.0)
            } else if h <= 2.0 {
                (x, chroma, 0.0)
            } else if h <= 3.0 {
                (0.0, chroma, x)
            } else if h <= 4.0 {
                (0.0, x, chroma)
            } else if h <= 5.0 {
                (x, 0.0, chroma)
            } else {
                (chroma, 0.0, x)
            };
            (chroma, temp, value)
        }
    };

    let m = value - chroma;
    (
        ((temp.0 + m) * 255.0) as u8,
        ((temp.1 + m) * 255.0) as u8,
        ((temp.2 + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        match rgb_to_hsv(255, 0, 0) {
            Hsv::Chromatic {
                hue,
                saturation,
                value,
            } => {
                assert_eq!(hue, 0.0);
                assert_eq!(saturation, 1.0);
                assert_eq!(value, 1.0);
            }
            other => panic!("red should be chromatic, got {other:?}"),
        }
        match rgb_to_hsv(0, 255, 0) {
            Hsv::Chromatic { hue, .. } => assert_eq!(hue, 120.0),
            other => panic!("green should be chromatic, got {other:?}"),
        }
        match rgb_to_hsv(0, 0, 255) {
            Hsv::Chromatic { hue, .. } => assert_eq!(hue, 240.0),
            other => panic!("blue should be chromatic, got {other:?}"),
        }
    }

    #[test]
    fn test_gray_is_achromatic() {
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::Achromatic { value: 0.0 });
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv::Achromatic { value: 1.0 });
        match rgb_to_hsv(128, 128, 128) {
            Hsv::Achromatic { value } => assert!((value - 128.0 / 255.0).abs() < 1e-12),
            other => panic!("gray should be achromatic, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_piecewise_hue_wraps() {
        // max == R with B > G gives a negative piecewise hue; the
        // result must still land in [0, 360).
        match rgb_to_hsv(200, 50, 100) {
            Hsv::Chromatic { hue, .. } => {
                assert!((0.0..360.0).contains(&hue), "hue {hue} out of range");
                assert!(hue > 300.0, "magenta-ish hue expected, got {hue}");
            }
            other => panic!("expected chromatic, got {other:?}"),
        }
    }

    #[test]
    fn test_hsv_to_rgb_sectors() {
        let full = |hue| {
            hsv_to_rgb(Hsv::Chromatic {
                hue,
                saturation: 1.0,
                value: 1.0,
            })
        };
        assert_eq!(full(0.0), (255, 0, 0));
        assert_eq!(full(120.0), (0, 255, 0));
        assert_eq!(full(240.0), (0, 0, 255));
        assert_eq!(full(60.0), (255, 255, 0));
        assert_eq!(full(180.0), (0, 255, 255));
        assert_eq!(full(300.0), (255, 0, 255));
    }

    #[test]
    fn test_achromatic_to_rgb() {
        assert_eq!(hsv_to_rgb(Hsv::Achromatic { value: 0.0 }), (0, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::Achromatic { value: 1.0 }), (255, 255, 255));
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(
            hsv_to_rgb(Hsv::Achromatic { value: 0.5 }),
            (127, 127, 127)
        );
    }

    #[test]
    fn test_round_trip_within_truncation() {
        for &(r, g, b) in &[
            (12u8, 200u8, 97u8),
            (255, 254, 0),
            (1, 2, 3),
            (77, 77, 78),
            (240, 10, 130),
        ] {
            let (r2, g2, b2) = hsv_to_rgb(rgb_to_hsv(r, g, b));
            assert!(r.abs_diff(r2) <= 1, "{r} -> {r2}");
            assert!(g.abs_diff(g2) <= 1, "{g} -> {g2}");
            assert!(b.abs_diff(b2) <= 1, "{b} -> {b2}");
        }
    }
}
