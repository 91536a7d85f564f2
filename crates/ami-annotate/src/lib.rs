//! ami-annotate - Glyph-atlas text annotation
//!
//! Stamps strings onto a pixel buffer by copying fixed-width glyph
//! cells from a [`GlyphAtlas`] (26 lowercase letters plus space). The
//! overlay is anchored at the buffer's top-left corner and validates
//! its geometry and every character before writing.

mod atlas;
mod error;
mod overlay;

pub use atlas::{GLYPH_COUNT, GlyphAtlas, SPACE_INDEX, glyph_index};
pub use error::{AnnotateError, AnnotateResult};
pub use overlay::annotate;
