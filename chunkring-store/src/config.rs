use chunkring_codec::Encoding;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CHUNK_COUNT: usize = 3;
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Chunk count must be at least 1")]
    ZeroChunks,
    #[error("Chunk of {max_chunk_bytes} bytes cannot hold a single {width}-byte element")]
    ChunkTooSmall { max_chunk_bytes: usize, width: usize },
    #[error("Capacity of {chunk_count} chunks x {chunk_capacity} elements overflows usize")]
    CapacityOverflow { chunk_count: usize, chunk_capacity: usize },
}

/// Store construction parameters
///
/// Partial JSON is accepted; missing fields fall back to the defaults
/// (Int16, 3 chunks, 1024 bytes per chunk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub encoding: Encoding,
    pub chunk_count: usize,
    /// Upper bound on a single chunk allocation. The usable size is rounded
    /// down to a whole number of elements.
    pub max_chunk_bytes: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            chunk_count: DEFAULT_CHUNK_COUNT,
            max_chunk_bytes: DEFAULT_MAX_CHUNK_BYTES,
        }
    }
}

impl StoreConfig {
    pub fn new(encoding: Encoding, chunk_count: usize) -> Self {
        Self {
            encoding,
            chunk_count,
            ..Self::default()
        }
    }

    pub fn with_max_chunk_bytes(mut self, max_chunk_bytes: usize) -> Self {
        self.max_chunk_bytes = max_chunk_bytes;
        self
    }

    /// Elements per chunk: `floor(max_chunk_bytes / width)`
    pub fn chunk_capacity(&self) -> usize {
        self.max_chunk_bytes / self.encoding.width()
    }

    /// Total elements across all chunks, `None` on overflow
    pub fn capacity(&self) -> Option<usize> {
        self.chunk_count.checked_mul(self.chunk_capacity())
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.chunk_count == 0 {
            return Err(StoreError::ZeroChunks);
        }
        if self.chunk_capacity() == 0 {
            return Err(StoreError::ChunkTooSmall {
                max_chunk_bytes: self.max_chunk_bytes,
                width: self.encoding.width(),
            });
        }
        if self.capacity().is_none() {
            return Err(StoreError::CapacityOverflow {
                chunk_count: self.chunk_count,
                chunk_capacity: self.chunk_capacity(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.encoding, Encoding::Int16);
        assert_eq!(config.chunk_capacity(), 512);
        assert_eq!(config.capacity(), Some(1536));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunk_capacity_rounds_down() {
        let config = StoreConfig::new(Encoding::Int32, 2).with_max_chunk_bytes(10);
        assert_eq!(config.chunk_capacity(), 2);
        assert_eq!(config.capacity(), Some(4));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            StoreConfig::new(Encoding::Int16, 0).validate(),
            Err(StoreError::ZeroChunks)
        );
        assert_eq!(
            StoreConfig::new(Encoding::Int32, 1).with_max_chunk_bytes(3).validate(),
            Err(StoreError::ChunkTooSmall { max_chunk_bytes: 3, width: 4 })
        );
        assert!(matches!(
            StoreConfig::new(Encoding::Int16, usize::MAX).with_max_chunk_bytes(4).validate(),
            Err(StoreError::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn test_partial_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{ "encoding": "float16", "chunk_count": 4 }"#).unwrap();
        assert_eq!(config.encoding, Encoding::Float16);
        assert_eq!(config.chunk_count, 4);
        assert_eq!(config.max_chunk_bytes, DEFAULT_MAX_CHUNK_BYTES);
    }
}
