pub mod compression;
pub mod constants;
pub mod image;

use log::*;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub use crate::image::encoder::EncodingError;
pub use crate::image::format::Rgb;
pub use crate::image::writer::save;
pub use crate::image::{encode, encode_rgb, encode_rgb_with_level, encode_with_level};

#[derive(Error, Debug)]
pub enum PngError {
    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes a solid `width` x `height` image and writes it to `path`.
pub fn write_png<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    color: Rgb,
) -> Result<(), PngError> {
    let bytes = encode(width, height, color)?;
    save(path, &bytes)?;
    Ok(())
}

pub fn init_logging() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_png"), LevelFilter::Info)
        .filter(Some("icon_gen"), LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
