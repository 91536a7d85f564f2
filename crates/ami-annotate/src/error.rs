//! Error types for ami-annotate

use thiserror::Error;

/// Errors that can occur while stamping text onto a buffer
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ami_core::Error),

    /// Atlas image width is not an even multiple of the glyph count
    #[error("atlas width {width} is not divisible by {glyphs} glyph cells")]
    InvalidAtlas { width: u32, glyphs: u32 },

    /// Character with no glyph cell in the atlas
    #[error("no glyph for character {0:?} (supported: 'a'..='z' and ' ')")]
    UnsupportedCharacter(char),

    /// Annotation does not fit inside the target buffer
    #[error(
        "overlay of {text_width}x{atlas_height} exceeds {width}x{height} target"
    )]
    OverlayOutOfBounds {
        text_width: u64,
        atlas_height: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for annotation operations
pub type AnnotateResult<T> = Result<T, AnnotateError>;
