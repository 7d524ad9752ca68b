use thiserror::Error;

use crate::image::format::{Rgb, FILTER_TYPE_NONE};

#[derive(Error, Debug)]
pub enum ScanlineError {
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
    #[error("Buffer size overflows for {width}x{height}")]
    BufferOverflow { width: u32, height: u32 },
}

/// Allocations are capped at `isize::MAX` bytes.
fn addressable(len: usize) -> Option<usize> {
    (len <= isize::MAX as usize).then_some(len)
}

/// Byte length of one scanline: filter byte plus `width` RGB triples.
pub fn scanline_len(width: u32) -> Result<usize, ScanlineError> {
    (width as usize)
        .checked_mul(Rgb::BYTES_PER_PIXEL)
        .and_then(|n| n.checked_add(1))
        .and_then(addressable)
        .ok_or(ScanlineError::BufferOverflow { width, height: 1 })
}

/// Byte length of the raw (unfiltered, uncompressed) buffer for an image.
pub fn raw_buffer_len(width: u32, height: u32) -> Result<usize, ScanlineError> {
    scanline_len(width)
        .ok()
        .and_then(|row| row.checked_mul(height as usize))
        .and_then(addressable)
        .ok_or(ScanlineError::BufferOverflow { width, height })
}

/// Byte length of a packed RGB pixel buffer.
pub fn pixel_data_len(width: u32, height: u32) -> Result<usize, ScanlineError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(Rgb::BYTES_PER_PIXEL))
        .and_then(addressable)
        .ok_or(ScanlineError::BufferOverflow { width, height })
}

/// Splits packed RGB pixels into rows and prefixes each with filter type 0.
///
/// # Parameters
/// - `rgb_data`: `width * height` RGB triples, row-major, top row first.
///
/// # Errors
/// - Returns `ScanlineError::InvalidPixelDataLength` if `rgb_data` does not hold
///   exactly `width * height` pixels
/// - Returns `ScanlineError::BufferOverflow` if the buffer size is not addressable
pub fn raw_scanlines(width: u32, height: u32, rgb_data: &[u8]) -> Result<Vec<u8>, ScanlineError> {
    let expected = pixel_data_len(width, height)?;
    if rgb_data.len() != expected {
        return Err(ScanlineError::InvalidPixelDataLength {
            expected,
            actual: rgb_data.len(),
        });
    }

    let mut raw = Vec::with_capacity(raw_buffer_len(width, height)?);
    let stride = width as usize * Rgb::BYTES_PER_PIXEL;
    if stride == 0 {
        return Ok(raw);
    }

    for row in rgb_data.chunks_exact(stride) {
        raw.push(FILTER_TYPE_NONE);
        raw.extend_from_slice(row);
    }

    Ok(raw)
}

/// Packed RGB pixels for an image filled with one color.
pub fn solid_pixels(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>, ScanlineError> {
    let len = pixel_data_len(width, height)?;
    Ok(color.to_bytes().repeat(len / Rgb::BYTES_PER_PIXEL))
}
