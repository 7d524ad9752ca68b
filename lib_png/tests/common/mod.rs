#![allow(dead_code)]

use image::{DynamicImage, ImageFormat};

pub const ICON_192: (u32, [u8; 3]) = (192, [233, 170, 196]);
pub const ICON_512: (u32, [u8; 3]) = (512, [201, 183, 255]);

/// 4x4 image with a distinct color per pixel.
pub const GRADIENT_4X4: [u8; 48] = [
    0, 0, 0, 16, 0, 0, 32, 0, 0, 48, 0, 0, //
    0, 16, 0, 16, 16, 0, 32, 16, 0, 48, 16, 0, //
    0, 32, 16, 16, 32, 16, 32, 32, 16, 48, 32, 16, //
    0, 48, 32, 16, 48, 32, 32, 48, 32, 255, 255, 255,
];

pub struct RawChunk {
    pub length: u32,
    pub kind: [u8; 4],
    pub data: Vec<u8>,
    pub crc: u32,
}

/// Splits a PNG byte stream into its chunks, skipping the signature.
pub fn parse_chunks(bytes: &[u8]) -> Vec<RawChunk> {
    let mut chunks = Vec::new();
    let mut cursor = 8;

    while cursor < bytes.len() {
        let length = u32::from_be_bytes(bytes[cursor..cursor + 4].try_into().unwrap());
        let kind: [u8; 4] = bytes[cursor + 4..cursor + 8].try_into().unwrap();
        let data_start = cursor + 8;
        let data_end = data_start + length as usize;
        let data = bytes[data_start..data_end].to_vec();
        let crc = u32::from_be_bytes(bytes[data_end..data_end + 4].try_into().unwrap());

        chunks.push(RawChunk {
            length,
            kind,
            data,
            crc,
        });
        cursor = data_end + 4;
    }

    assert_eq!(cursor, bytes.len(), "trailing bytes after last chunk");
    chunks
}

pub fn decode_png(bytes: &[u8]) -> DynamicImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Png).unwrap()
}
