use crate::chunk::ByteChunk;
use crate::config::{StoreConfig, StoreError};
use chunkring_codec::Encoding;
use log::{debug, trace};
use std::iter::FusedIterator;

/// Fixed-capacity circular buffer over equal-size byte chunks.
///
/// Two regimes: while `len() < capacity()` appends fill the next free slot;
/// once full, each append overwrites the oldest sample and advances `start`.
/// The store never shrinks, so the transition happens at most once.
///
/// # Example
/// ```
/// use chunkring_store::{CircularStore, Encoding, StoreConfig};
///
/// let config = StoreConfig::new(Encoding::Int16, 3).with_max_chunk_bytes(4);
/// let mut store = CircularStore::new(&config).unwrap();
/// for v in 0..8 {
///     store.append(v as f64);
/// }
/// assert_eq!(store.len(), 6);
/// assert_eq!(store.get(0), 2.0);
/// assert_eq!(store.get(5), 7.0);
/// ```
#[derive(Debug)]
pub struct CircularStore {
    encoding: Encoding,
    chunks: Box<[ByteChunk]>,
    chunk_capacity: usize,
    capacity: usize,
    /// Slot of the oldest element
    start: usize,
    size: usize,
}

impl CircularStore {
    /// Allocate every chunk up front. Fails only on an invalid layout.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;

        let encoding = config.encoding;
        let chunk_capacity = config.chunk_capacity();
        let capacity = config.capacity().ok_or(StoreError::CapacityOverflow {
            chunk_count: config.chunk_count,
            chunk_capacity,
        })?;
        let chunk_bytes = chunk_capacity * encoding.width();

        let chunks = (0..config.chunk_count)
            .map(|_| ByteChunk::new(chunk_bytes))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        debug!(
            "circular store: encoding={} chunks={}x{}B ({} elements each) capacity={}",
            encoding, config.chunk_count, chunk_bytes, chunk_capacity, capacity
        );

        Ok(Self {
            encoding,
            chunks,
            chunk_capacity,
            capacity,
            start: 0,
            size: 0,
        })
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn append(&mut self, value: f64) {
        let raw = self.encoding.encode(value);

        if self.size < self.capacity {
            let slot = (self.start + self.size) % self.capacity;
            self.write_slot(slot, raw);
            self.size += 1;
            if self.size == self.capacity {
                trace!("circular store full at {} elements, overwriting oldest from now on", self.capacity);
            }
        } else {
            self.write_slot(self.start, raw);
            self.start = (self.start + 1) % self.capacity;
        }
    }

    /// Sample at logical `index` (0 = oldest). Out-of-range indices return 0.
    pub fn get(&self, index: i64) -> f64 {
        let Ok(index) = usize::try_from(index) else {
            return 0.0;
        };
        if index >= self.size {
            return 0.0;
        }
        self.read_logical(index)
    }

    /// Newest sample, if any
    pub fn latest(&self) -> Option<f64> {
        self.size.checked_sub(1).map(|i| self.read_logical(i))
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Elements per chunk
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Decoded samples, oldest first
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            front: 0,
            back: self.size,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// (chunk index, element offset within chunk) for an absolute slot
    #[inline]
    fn locate(&self, slot: usize) -> (usize, usize) {
        (slot / self.chunk_capacity, slot % self.chunk_capacity)
    }

    fn write_slot(&mut self, slot: usize, raw: i32) {
        let (chunk, offset) = self.locate(slot);
        let encoding = self.encoding;
        let byte_offset = offset * encoding.width();
        let chunk = &mut self.chunks[chunk];
        match encoding {
            Encoding::Int16 | Encoding::Float16 => chunk.write_i16_le(byte_offset, raw as i16),
            Encoding::Int32 => chunk.write_i32_le(byte_offset, raw),
        }
    }

    fn read_slot(&self, slot: usize) -> i32 {
        let (chunk, offset) = self.locate(slot);
        let byte_offset = offset * self.encoding.width();
        let chunk = &self.chunks[chunk];
        match self.encoding {
            Encoding::Int16 | Encoding::Float16 => chunk.read_i16_le(byte_offset) as i32,
            Encoding::Int32 => chunk.read_i32_le(byte_offset),
        }
    }

    /// Caller guarantees `index < size`
    fn read_logical(&self, index: usize) -> f64 {
        let slot = (self.start + index) % self.capacity;
        self.encoding.decode(self.read_slot(slot))
    }
}

impl Extend<f64> for CircularStore {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a> IntoIterator for &'a CircularStore {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Oldest-to-newest iterator over decoded samples
pub struct Iter<'a> {
    store: &'a CircularStore,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        let value = self.store.read_logical(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<f64> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.store.read_logical(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
