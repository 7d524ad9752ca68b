pub mod chunk;
pub mod encoder;
pub mod format;
pub mod writer;

pub use encoder::{encode, encode_rgb, encode_rgb_with_level, encode_with_level};
