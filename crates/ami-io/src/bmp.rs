//! BMP image format support
//!
//! Reads and writes uncompressed Windows Bitmap (BMP) files. The reader
//! accepts 24- and 32-bit images in bottom-up or top-down row order;
//! the writer always produces 24-bit bottom-up files with 4-byte
//! aligned rows.

use crate::{IoError, IoResult};
use ami_core::PixelBuffer;
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image from a reader.
///
/// # Errors
///
/// - [`IoError::InvalidData`] for a missing "BM" magic or malformed headers
/// - [`IoError::UnsupportedFormat`] for compressed files or bit depths
///   other than 24 and 32
/// - [`IoError::Io`] for truncated input
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    // File header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {header_size}"
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);
    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {planes}"
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);
    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {bits_per_pixel}"
        )));
    }

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);
    // 0 = BI_RGB, 3 = BI_BITFIELDS with the default masks
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {compression}"
        )));
    }

    let top_down = height < 0;
    let width = width.unsigned_abs();
    let height = height.unsigned_abs();

    // Skip any header extension and optional color masks before the pixels
    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize;
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip)?;
    }

    let mut buf = PixelBuffer::new(width, height)?;

    // BMP rows are stored BGR and padded to 4-byte alignment
    let bytes_per_pixel = bits_per_pixel as usize / 8;
    let row_stride = (width as usize * bits_per_pixel as usize).div_ceil(32) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;
        let y = if top_down { row } else { height - 1 - row };

        for x in 0..width {
            let idx = x as usize * bytes_per_pixel;
            let b = row_buffer[idx];
            let g = row_buffer[idx + 1];
            let r = row_buffer[idx + 2];
            buf.set_rgb_unchecked(x, y, r, g, b);
        }
    }

    Ok(buf)
}

/// Write a buffer as a 24-bit uncompressed BMP.
///
/// # Errors
///
/// Returns [`IoError::Io`] on write failure.
pub fn write_bmp<W: Write>(buf: &PixelBuffer, mut writer: W) -> IoResult<()> {
    let width = buf.width();
    let height = buf.height();
    let row_stride = (width as usize * 24).div_ceil(32) * 4;
    let pixel_bytes = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE as u32 + BMP_INFO_HEADER_SIZE;
    let file_size = pixel_offset + pixel_bytes as u32;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // reserved
    writer.write_all(&pixel_offset.to_le_bytes())?;

    // Info header (BITMAPINFOHEADER)
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // positive: bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // planes
    writer.write_all(&24u16.to_le_bytes())?; // bits per pixel
    writer.write_all(&0u32.to_le_bytes())?; // compression (BI_RGB)
    writer.write_all(&(pixel_bytes as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // x pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // colors used
    writer.write_all(&0u32.to_le_bytes())?; // important colors

    // Pixel rows, bottom-up, BGR, padded
    let mut row_buffer = vec![0u8; row_stride];
    for row in (0..height).rev() {
        for x in 0..width {
            let (r, g, b) = buf.get_rgb_unchecked(x, row);
            let idx = x as usize * 3;
            row_buffer[idx] = b;
            row_buffer[idx + 1] = g;
            row_buffer[idx + 2] = r;
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}

/// Read a BMP image from a file path.
pub fn read_bmp_file<P: AsRef<std::path::Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = std::fs::File::open(path)?;
    read_bmp(std::io::BufReader::new(file))
}

/// Write a buffer as a 24-bit BMP to a file path.
pub fn write_bmp_file<P: AsRef<std::path::Path>>(buf: &PixelBuffer, path: P) -> IoResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_bmp(buf, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_buffer() -> PixelBuffer {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.set_rgb(0, 0, 255, 0, 0).unwrap();
        buf.set_rgb(1, 0, 0, 255, 0).unwrap();
        buf.set_rgb(2, 0, 0, 0, 255).unwrap();
        buf.set_rgb(0, 1, 10, 20, 30).unwrap();
        buf.set_rgb(1, 1, 40, 50, 60).unwrap();
        buf.set_rgb(2, 1, 70, 80, 90).unwrap();
        buf
    }

    #[test]
    fn test_round_trip_in_memory() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();
        let back = read_bmp(Cursor::new(bytes)).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_written_header_fields() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        // Pixel offset 54, width 3, height 2, 24 bpp
        assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 54);
        assert_eq!(i32::from_le_bytes(bytes[18..22].try_into().unwrap()), 3);
        assert_eq!(i32::from_le_bytes(bytes[22..26].try_into().unwrap()), 2);
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 24);
        // 3 pixels * 3 bytes = 9, padded to 12 per row
        assert_eq!(bytes.len(), 54 + 12 * 2);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            read_bmp(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_unsupported_depth() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();
        // Patch bits-per-pixel to 8
        bytes[28] = 8;
        bytes[29] = 0;
        assert!(matches!(
            read_bmp(Cursor::new(bytes)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_reads_top_down_rows() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();

        // Flip the height sign to mark the file top-down and swap the
        // two stored rows so it decodes to the same image.
        let h = i32::from_le_bytes(bytes[22..26].try_into().unwrap());
        bytes[22..26].copy_from_slice(&(-h).to_le_bytes());
        let (top, bottom) = (54usize, 54usize + 12);
        let mut row = [0u8; 12];
        row.copy_from_slice(&bytes[top..top + 12]);
        let second: [u8; 12] = bytes[bottom..bottom + 12].try_into().unwrap();
        bytes[top..top + 12].copy_from_slice(&second);
        bytes[bottom..bottom + 12].copy_from_slice(&row);

        let back = read_bmp(Cursor::new(bytes)).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_truncated_file() {
        let buf = sample_buffer();
        let mut bytes = Vec::new();
        write_bmp(&buf, &mut bytes).unwrap();
        bytes.truncate(60);
        assert!(matches!(read_bmp(Cursor::new(bytes)), Err(IoError::Io(_))));
    }
}
