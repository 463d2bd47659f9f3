//! # chunkring-codec
//!
//! Fixed-width numeric codecs for the chunked circular store.
//!
//! An application value (`f64`) is converted to the raw integer that lands in
//! storage and back again:
//! - [`Encoding::Int16`] / [`Encoding::Int32`]: truncate toward zero, wrap to
//!   the signed width (see [`integer`])
//! - [`Encoding::Float16`]: custom 1+5+10 half-precision float (see [`half`])
//!
//! All conversions are infallible. Out-of-range values wrap or saturate.

pub mod encoding;
pub mod half;
pub mod integer;

pub use encoding::{Encoding, ParseEncodingError};
