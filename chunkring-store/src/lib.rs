//! # chunkring-store
//!
//! Fixed-capacity circular store for time-ordered samples.
//!
//! Storage is split across several equal-size [`ByteChunk`]s allocated once at
//! construction. Logical index `i` (0 = oldest) lives at absolute slot
//! `(start + i) % capacity`, i.e. chunk `slot / chunk_capacity`, offset
//! `slot % chunk_capacity`. Once full, every append overwrites the oldest sample.
//!
//! Values pass through the [`Encoding`] codec on the way in and out, so the same
//! store holds i16, i32 or half-float samples.

pub mod chunk;
pub mod config;
pub mod store;

pub use chunk::ByteChunk;
pub use chunkring_codec::Encoding;
pub use config::{StoreConfig, StoreError};
pub use store::{CircularStore, Iter};
