//! Glyph atlas
//!
//! The atlas is an auxiliary image partitioned into 27 equal-width
//! cells: the 26 lowercase letters at indices 0-25 and one trailing
//! cell for the space character at index 26. The atlas height fixes the
//! stamped height of every annotation.
//!
//! Glyph lookup is an explicit mapping that rejects characters without
//! a cell, instead of raw character arithmetic that could compute an
//! out-of-range index.

use crate::error::{AnnotateError, AnnotateResult};
use ami_core::PixelBuffer;

/// Number of glyph cells in an atlas.
pub const GLYPH_COUNT: u32 = 27;

/// Cell index of the space character.
pub const SPACE_INDEX: u32 = 26;

/// Map a character to its atlas cell index.
///
/// # Errors
///
/// Returns [`AnnotateError::UnsupportedCharacter`] for anything other
/// than a lowercase ASCII letter or a space.
pub fn glyph_index(c: char) -> AnnotateResult<u32> {
    match c {
        'a'..='z' => Ok(c as u32 - 'a' as u32),
        ' ' => Ok(SPACE_INDEX),
        _ => Err(AnnotateError::UnsupportedCharacter(c)),
    }
}

/// Glyph atlas backing text annotation
///
/// Wraps the atlas image and its derived cell width. Construction
/// validates that the image width divides evenly into [`GLYPH_COUNT`]
/// cells, so a truncated cell width cannot silently misalign glyphs.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    image: PixelBuffer,
    cell_width: u32,
}

impl GlyphAtlas {
    /// Create an atlas from an image of 27 equal-width glyph cells.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::InvalidAtlas`] if the image width is
    /// not divisible by 27.
    pub fn new(image: PixelBuffer) -> AnnotateResult<Self> {
        if image.width() % GLYPH_COUNT != 0 {
            return Err(AnnotateError::InvalidAtlas {
                width: image.width(),
                glyphs: GLYPH_COUNT,
            });
        }
        let cell_width = image.width() / GLYPH_COUNT;
        Ok(Self { image, cell_width })
    }

    /// Width of a single glyph cell in pixels.
    #[inline]
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of the atlas (and of every stamped glyph).
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel of the glyph cell `index` at cell-local (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `index >= GLYPH_COUNT`, `x >= cell_width`, or
    /// `y >= height`. Callers index with validated glyph indices and
    /// cell-bounded loops.
    #[inline]
    pub(crate) fn cell_rgb(&self, index: u32, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(index < GLYPH_COUNT);
        debug_assert!(x < self.cell_width);
        self.image.get_rgb_unchecked(index * self.cell_width + x, y)
    }
}
