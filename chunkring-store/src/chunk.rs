use byteorder::{ByteOrder, LittleEndian};

/// Fixed-size, zero-initialised byte region with little-endian accessors.
///
/// Offsets are in bytes. Reads and writes past the end panic; the store only
/// ever addresses slots inside its own layout.
#[derive(Debug, PartialEq, Eq)]
pub struct ByteChunk {
    bytes: Box<[u8]>,
}

impl ByteChunk {
    pub fn new(len_bytes: usize) -> Self {
        Self {
            bytes: vec![0u8; len_bytes].into_boxed_slice(),
        }
    }

    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn read_i16_le(&self, offset: usize) -> i16 {
        LittleEndian::read_i16(&self.bytes[offset..offset + 2])
    }

    #[inline]
    pub fn write_i16_le(&mut self, offset: usize, value: i16) {
        LittleEndian::write_i16(&mut self.bytes[offset..offset + 2], value);
    }

    #[inline]
    pub fn read_i32_le(&self, offset: usize) -> i32 {
        LittleEndian::read_i32(&self.bytes[offset..offset + 4])
    }

    #[inline]
    pub fn write_i32_le(&mut self, offset: usize, value: i32) {
        LittleEndian::write_i32(&mut self.bytes[offset..offset + 4], value);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
