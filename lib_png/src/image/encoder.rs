use flate2::Compression;
use log::{debug, error, info};
use thiserror::Error;

use super::chunk::Chunk;
use super::format::{Ihdr, Rgb, IDAT, IEND, IHDR, MAX_PNG_U32, PNG_SIGNATURE};
use crate::compression::scanline::{self, ScanlineError};
use crate::compression::{compression_level, deflate, CompressionError};
use crate::constants::DEFAULT_COMPRESSION_LEVEL;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Invalid dimensions {width}x{height}: each side must be in 1..=2147483647")]
    InvalidDimension { width: u32, height: u32 },
    #[error("Invalid color component {value} in channel {channel}: expected 0..=255")]
    InvalidColorComponent { channel: usize, value: i64 },
    #[error("Invalid pixel data length: expected {expected} bytes, got {actual}")]
    InvalidPixelDataLength { expected: usize, actual: usize },
    #[error("Image is too large to encode")]
    ImageTooLarge,
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] CompressionError),
}

impl From<ScanlineError> for EncodingError {
    fn from(err: ScanlineError) -> Self {
        match err {
            ScanlineError::InvalidPixelDataLength { expected, actual } => {
                EncodingError::InvalidPixelDataLength { expected, actual }
            }
            ScanlineError::BufferOverflow { .. } => EncodingError::ImageTooLarge,
        }
    }
}

/// Encodes a `width` x `height` image filled with `color`.
pub fn encode(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>, EncodingError> {
    encode_with_level(width, height, color, DEFAULT_COMPRESSION_LEVEL)
}

pub fn encode_with_level(
    width: u32,
    height: u32,
    color: Rgb,
    level: u32,
) -> Result<Vec<u8>, EncodingError> {
    let compression = validate(width, height, level)?;
    debug!("Filling {}x{} with {:?}", width, height, color);

    let pixels = scanline::solid_pixels(width, height, color)?;
    encode_validated(width, height, &pixels, compression)
}

/// Encodes packed RGB pixels (row-major, top row first) as an 8-bit truecolor PNG.
pub fn encode_rgb(width: u32, height: u32, rgb_data: &[u8]) -> Result<Vec<u8>, EncodingError> {
    encode_rgb_with_level(width, height, rgb_data, DEFAULT_COMPRESSION_LEVEL)
}

pub fn encode_rgb_with_level(
    width: u32,
    height: u32,
    rgb_data: &[u8],
    level: u32,
) -> Result<Vec<u8>, EncodingError> {
    let compression = validate(width, height, level)?;
    encode_validated(width, height, rgb_data, compression)
}

fn encode_validated(
    width: u32,
    height: u32,
    rgb_data: &[u8],
    compression: Compression,
) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding of {}x{} image", width, height);

    // Step 1: Build the raw buffer, one filter byte per scanline
    let raw = scanline::raw_scanlines(width, height, rgb_data)?;
    debug!("Raw buffer built: {} bytes", raw.len());

    // Step 2: Compress the raw buffer
    let compressed = deflate(&raw, compression)?;
    if compressed.len() > MAX_PNG_U32 as usize {
        error!(
            "Compressed stream of {} bytes exceeds the chunk length limit",
            compressed.len()
        );
        return Err(EncodingError::ImageTooLarge);
    }
    debug!("Image data compressed to {} bytes", compressed.len());

    // Step 3: Frame the chunks behind the signature
    let ihdr = Chunk::new(IHDR, Ihdr::truecolor(width, height).to_bytes());
    let idat = Chunk::new(IDAT, compressed);
    let iend = Chunk::new(IEND, Vec::new());

    let mut encoded_data =
        Vec::with_capacity(PNG_SIGNATURE.len() + 3 * Chunk::OVERHEAD + ihdr.len() + idat.len());
    encoded_data.extend_from_slice(&PNG_SIGNATURE);
    for chunk in [&ihdr, &idat, &iend] {
        chunk.write_to(&mut encoded_data);
        debug!(
            "{} chunk written: {} data bytes, crc {:08x}",
            String::from_utf8_lossy(chunk.kind()),
            chunk.len(),
            chunk.crc()
        );
    }

    info!(
        "Encoding process completed successfully: {} bytes",
        encoded_data.len()
    );
    Ok(encoded_data)
}

fn validate(width: u32, height: u32, level: u32) -> Result<Compression, EncodingError> {
    if width == 0 || height == 0 || width > MAX_PNG_U32 || height > MAX_PNG_U32 {
        error!("Invalid dimensions {}x{}", width, height);
        return Err(EncodingError::InvalidDimension { width, height });
    }
    compression_level(level).map_err(EncodingError::from)
}
