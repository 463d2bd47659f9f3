//! # chunkring
//!
//! Chunked circular sample store with a pluggable fixed-width numeric codec.
//!
//! - [`codec`]: i16 / i32 / half-float conversions ([`Encoding`])
//! - [`store`]: the chunked ring itself ([`CircularStore`], [`StoreConfig`])

pub use chunkring_codec as codec;
pub use chunkring_store as store;

pub use chunkring_codec::Encoding;
pub use chunkring_store::{CircularStore, StoreConfig, StoreError};
