use crc32fast::Hasher;

/// A framed PNG chunk: length, 4-byte type, data and CRC-32 over type ++ data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    kind: [u8; 4],
    data: Vec<u8>,
}

impl Chunk {
    pub const LENGTH_SIZE: usize = 4;
    pub const TYPE_SIZE: usize = 4;
    pub const CRC_SIZE: usize = 4;
    pub const OVERHEAD: usize = Self::LENGTH_SIZE + Self::TYPE_SIZE + Self::CRC_SIZE;

    pub fn new(kind: [u8; 4], data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    pub fn kind(&self) -> &[u8; 4] {
        &self.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte length of the data field only.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn crc(&self) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(&self.kind);
        hasher.update(&self.data);
        hasher.finalize()
    }

    /// Appends the framed chunk to `out`.
    ///
    /// The caller guarantees the data length fits in a `u32`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(Self::OVERHEAD + self.data.len());
        out.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.kind);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}
