//! Annotation overlay
//!
//! Stamps a string of glyph cells onto the top-left corner of a target
//! buffer: character n occupies columns `[n*cell_width, (n+1)*cell_width)`
//! and rows `[0, atlas_height)`, copied channel-for-channel from the
//! atlas. The overlay is anchored at the buffer origin and is not
//! scoped to a region.
//!
//! Geometry and every glyph index are validated before the first write,
//! so any failure leaves the target unmodified.

use crate::atlas::{GlyphAtlas, glyph_index};
use crate::error::{AnnotateError, AnnotateResult};
use ami_core::PixelBuffer;

/// Stamp `text` onto the top-left corner of the buffer.
///
/// # Errors
///
/// - [`AnnotateError::OverlayOutOfBounds`] if the annotation is wider
///   than the buffer or the atlas is taller than the buffer
/// - [`AnnotateError::UnsupportedCharacter`] if any character has no
///   glyph cell
///
/// The buffer is untouched in both cases.
pub fn annotate(buf: &mut PixelBuffer, atlas: &GlyphAtlas, text: &str) -> AnnotateResult<()> {
    let cell_width = atlas.cell_width();
    let count = text.chars().count() as u64;
    let text_width = count * cell_width as u64;

    if text_width > buf.width() as u64 || atlas.height() > buf.height() {
        return Err(AnnotateError::OverlayOutOfBounds {
            text_width,
            atlas_height: atlas.height(),
            width: buf.width(),
            height: buf.height(),
        });
    }

    let indices = text
        .chars()
        .map(glyph_index)
        .collect::<AnnotateResult<Vec<_>>>()?;

    for (n, &index) in indices.iter().enumerate() {
        let dest_x0 = n as u32 * cell_width;
        for y in 0..atlas.height() {
            for x in 0..cell_width {
                let (r, g, b) = atlas.cell_rgb(index, x, y);
                buf.set_rgb_unchecked(dest_x0 + x, y, r, g, b);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Atlas whose glyph cells are filled with their own index value.
    fn indexed_atlas(cell_width: u32, height: u32) -> GlyphAtlas {
        let mut img = PixelBuffer::new(27 * cell_width, height).unwrap();
        for i in 0..27u32 {
            for y in 0..height {
                for x in 0..cell_width {
                    img.set_rgb(i * cell_width + x, y, i as u8, i as u8, i as u8)
                        .unwrap();
                }
            }
        }
        GlyphAtlas::new(img).unwrap()
    }

    #[test]
    fn test_single_letter_copies_cell_zero() {
        let atlas = indexed_atlas(3, 2);
        let mut buf = PixelBuffer::new(10, 5).unwrap();
        buf.fill(200, 200, 200);

        annotate(&mut buf, &atlas, "a").unwrap();

        // Columns [0, 3), rows [0, 2) hold glyph cell 0
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get_rgb(x, y), Some((0, 0, 0)));
            }
        }
        // First pixel past the stamped block is untouched
        assert_eq!(buf.get_rgb(3, 0), Some((200, 200, 200)));
        assert_eq!(buf.get_rgb(0, 2), Some((200, 200, 200)));
    }

    #[test]
    fn test_string_places_cells_left_to_right() {
        let atlas = indexed_atlas(2, 1);
        let mut buf = PixelBuffer::new(10, 1).unwrap();

        annotate(&mut buf, &atlas, "ba c").unwrap();

        assert_eq!(buf.get_rgb(0, 0), Some((1, 1, 1))); // 'b'
        assert_eq!(buf.get_rgb(2, 0), Some((0, 0, 0))); // 'a'
        assert_eq!(buf.get_rgb(4, 0), Some((26, 26, 26))); // ' '
        assert_eq!(buf.get_rgb(6, 0), Some((2, 2, 2))); // 'c'
    }

    #[test]
    fn test_too_wide_annotation_rejected() {
        let atlas = indexed_atlas(4, 2);
        let mut buf = PixelBuffer::new(10, 5).unwrap();
        buf.fill(7, 7, 7);
        let before = buf.clone();

        // 3 characters need 12 columns, buffer has 10
        let err = annotate(&mut buf, &atlas, "abc");
        assert!(matches!(err, Err(AnnotateError::OverlayOutOfBounds { .. })));
        assert_eq!(buf, before);
    }

    #[test]
    fn test_too_tall_atlas_rejected() {
        let atlas = indexed_atlas(1, 8);
        let mut buf = PixelBuffer::new(27, 5).unwrap();
        let err = annotate(&mut buf, &atlas, "a");
        assert!(matches!(err, Err(AnnotateError::OverlayOutOfBounds { .. })));
    }

    #[test]
    fn test_unsupported_character_leaves_buffer_untouched() {
        let atlas = indexed_atlas(2, 2);
        let mut buf = PixelBuffer::new(20, 5).unwrap();
        buf.fill(9, 9, 9);
        let before = buf.clone();

        // 'a' is fine, '!' is not; nothing may be stamped
        let err = annotate(&mut buf, &atlas, "a!");
        assert!(matches!(
            err,
            Err(AnnotateError::UnsupportedCharacter('!'))
        ));
        assert_eq!(buf, before);
    }

    #[test]
    fn test_empty_annotation_is_noop() {
        let atlas = indexed_atlas(2, 2);
        let mut buf = PixelBuffer::new(4, 4).unwrap();
        buf.fill(3, 3, 3);
        let before = buf.clone();
        annotate(&mut buf, &atlas, "").unwrap();
        assert_eq!(buf, before);
    }
}
