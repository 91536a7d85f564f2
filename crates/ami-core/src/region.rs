//! Region - the rectangular scope of a filter
//!
//! A `Region` is a half-open rectangle `[xmin, xmax) x [ymin, ymax)` in
//! buffer coordinates. Every filter validates its region against the
//! target buffer before touching any pixel and fails fast with
//! [`Error::InvalidRegion`] rather than silently clamping.
//!
//! A degenerate (zero-area) region is legal and makes every filter a
//! no-op, not an error.

use crate::PixelBuffer;
use crate::error::{Error, Result};
use std::ops::Range;

/// Half-open rectangular region of a pixel buffer
///
/// Like the buffer itself, (0, 0) is the top-left corner. `Region` is a
/// small `Copy` type; filters take it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left column (inclusive)
    pub xmin: u32,
    /// Top row (inclusive)
    pub ymin: u32,
    /// Right column (exclusive)
    pub xmax: u32,
    /// Bottom row (exclusive)
    pub ymax: u32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedRegion`] if `xmin > xmax` or `ymin > ymax`.
    pub fn new(xmin: u32, ymin: u32, xmax: u32, ymax: u32) -> Result<Self> {
        if xmin > xmax || ymin > ymax {
            return Err(Error::InvertedRegion {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Create the region covering an entire buffer.
    pub fn full(buf: &PixelBuffer) -> Self {
        Self {
            xmin: 0,
            ymin: 0,
            xmax: buf.width(),
            ymax: buf.height(),
        }
    }

    /// Get the region width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.xmax - self.xmin
    }

    /// Get the region height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.ymax - self.ymin
    }

    /// Check if the region has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmin == self.xmax || self.ymin == self.ymax
    }

    /// Check if a point lies inside the region.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.xmin && x < self.xmax && y >= self.ymin && y < self.ymax
    }

    /// Column range covered by the region.
    #[inline]
    pub fn xs(&self) -> Range<u32> {
        self.xmin..self.xmax
    }

    /// Row range covered by the region.
    #[inline]
    pub fn ys(&self) -> Range<u32> {
        self.ymin..self.ymax
    }

    /// Validate that the region lies within a buffer of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `xmax > width` or `ymax > height`.
    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        if self.xmax > width || self.ymax > height {
            return Err(Error::InvalidRegion {
                xmin: self.xmin,
                ymin: self.ymin,
                xmax: self.xmax,
                ymax: self.ymax,
                width,
                height,
            });
        }
        Ok(())
    }
}
