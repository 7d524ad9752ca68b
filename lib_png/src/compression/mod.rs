pub mod scanline;

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::{debug, error, info};
use thiserror::Error;

use crate::constants::MAX_COMPRESSION_LEVEL;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Invalid compression level {0}: expected 0..=9")]
    InvalidCompressionLevel(u32),
    #[error("zlib stream failed: {0}")]
    Io(#[from] io::Error),
}

/// Maps a zlib level `0..=9` to a `flate2` setting.
pub fn compression_level(level: u32) -> Result<Compression, CompressionError> {
    if level > MAX_COMPRESSION_LEVEL {
        error!("Compression level {} is out of range", level);
        return Err(CompressionError::InvalidCompressionLevel(level));
    }
    Ok(Compression::new(level))
}

/// Compresses `raw` into a zlib stream (2-byte header, DEFLATE blocks, Adler-32).
pub fn compress(raw: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    deflate(raw, compression_level(level)?)
}

/// Same as [`compress`] with an already checked level.
pub(crate) fn deflate(raw: &[u8], level: Compression) -> Result<Vec<u8>, CompressionError> {
    info!("Starting compression");
    debug!("Input data length: {}, level: {}", raw.len(), level.level());

    let mut encoder = ZlibEncoder::new(Vec::new(), level);
    encoder.write_all(raw)?;
    let compressed = encoder.finish()?;

    if !raw.is_empty() {
        info!(
            "Compression completed successfully: {:.2}%",
            ((raw.len() as f32 - compressed.len() as f32) / raw.len() as f32) * 100.0
        );
    }
    debug!("Compressed data length: {}", compressed.len());

    Ok(compressed)
}
