//! PixelBuffer - the RGB image container
//!
//! A `PixelBuffer` owns a width x height grid of 3-channel 8-bit pixels
//! stored row-major, three bytes per pixel, in R, G, B order. Row 0 is
//! the top of the image and (0, 0) is the top-left corner; every
//! operation in the workspace uses this orientation.
//!
//! Filters that must read frozen input take a [`PixelBuffer::snapshot`]
//! before writing, so their output depends only on the pre-filter state.

use crate::error::{Error, Result};

/// Maximum value of a single 8-bit channel.
pub const MAX_CHANNEL: u8 = 255;

/// One of the three color channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Byte offset of this channel within a pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// RGB image buffer
///
/// # Examples
///
/// ```
/// use ami_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(4, 3).unwrap();
/// buf.set_rgb(1, 2, 10, 20, 30).unwrap();
/// assert_eq!(buf.get_rgb(1, 2), Some((10, 20, 30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer with all pixels set to black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * 3;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Create a buffer from raw interleaved RGB bytes (row-major, top row first).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidDataLength`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::InvalidDataLength {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw access to the interleaved RGB bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw access to the interleaved RGB bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Check that (x, y) lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Get the RGB values at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the RGB values at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = self.offset(x, y);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the RGB values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set the RGB values at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Get a single channel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_channel(&self, x: u32, y: u32, channel: Channel) -> Option<u8> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.data[self.offset(x, y) + channel.offset()])
    }

    /// Set a single channel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set_channel(&mut self, x: u32, y: u32, channel: Channel, value: u8) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y) + channel.offset();
        self.data[i] = value;
        Ok(())
    }

    /// Set every pixel to the given color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        for px in self.data.chunks_exact_mut(3) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
        }
    }

    /// Check if two buffers have the same dimensions.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Take a deep, frozen copy of the current pixel values.
    ///
    /// Filters whose output must depend only on pre-filter state read
    /// from a snapshot and write to the live buffer.
    pub fn snapshot(&self) -> PixelBuffer {
        self.clone()
    }
}
