use super::encoder::EncodingError;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

pub const BIT_DEPTH: u8 = 8;
pub const COLOR_TYPE_TRUECOLOR: u8 = 2;
pub const COMPRESSION_METHOD_DEFLATE: u8 = 0;
pub const FILTER_METHOD_ADAPTIVE: u8 = 0;
pub const INTERLACE_NONE: u8 = 0;
pub const FILTER_TYPE_NONE: u8 = 0;

/// Largest value PNG allows for a dimension or a chunk length.
pub const MAX_PNG_U32: u32 = (1 << 31) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = EncodingError;

    fn try_from(channels: [i64; 3]) -> Result<Self, Self::Error> {
        let mut out = [0u8; 3];
        for (channel, (&value, slot)) in channels.iter().zip(out.iter_mut()).enumerate() {
            *slot = u8::try_from(value)
                .map_err(|_| EncodingError::InvalidColorComponent { channel, value })?;
        }
        Ok(Self::from(out))
    }
}

impl TryFrom<(i64, i64, i64)> for Rgb {
    type Error = EncodingError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::try_from([r, g, b])
    }
}

/// Header record serialized into the IHDR chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl Ihdr {
    pub const SIZE: usize = 13;

    /// 8-bit truecolor, no interlacing.
    pub fn truecolor(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_TRUECOLOR,
            compression_method: COMPRESSION_METHOD_DEFLATE,
            filter_method: FILTER_METHOD_ADAPTIVE,
            interlace_method: INTERLACE_NONE,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::SIZE);
        data.extend_from_slice(&self.width.to_be_bytes());
        data.extend_from_slice(&self.height.to_be_bytes());
        data.extend_from_slice(&[
            self.bit_depth,
            self.color_type,
            self.compression_method,
            self.filter_method,
            self.interlace_method,
        ]);
        data
    }
}
