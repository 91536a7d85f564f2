//! ami-io - Bitmap image I/O
//!
//! Loads and stores [`ami_core::PixelBuffer`] contents as uncompressed
//! Windows BMP files. This is the codec collaborator of the pixel
//! transform engine; it owns header parsing, row padding, and byte
//! order, and nothing else.

mod bmp;
mod error;

pub use bmp::{read_bmp, read_bmp_file, write_bmp, write_bmp_file};
pub use error::{IoError, IoResult};
