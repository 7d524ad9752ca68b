pub const FILE_EXT: &str = "png";

/// zlib level used by [`crate::encode`] and [`crate::encode_rgb`].
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
pub const MAX_COMPRESSION_LEVEL: u32 = 9;
