use crate::{half, integer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Storage encoding selector
///
/// Fixed for the lifetime of a store. Determines both the element width in
/// bytes and the codec applied on every append/get:
/// - **Int16**: wrapping signed 16-bit integer
/// - **Int32**: wrapping signed 32-bit integer
/// - **Float16**: custom half-precision float stored in 16 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Int16,
    Int32,
    Float16,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown encoding {0:?} (expected int16, int32 or float16)")]
pub struct ParseEncodingError(pub String);

impl Encoding {
    pub const ALL: [Encoding; 3] = [Encoding::Int16, Encoding::Int32, Encoding::Float16];

    /// Element width in bytes
    pub const fn width(self) -> usize {
        match self {
            Encoding::Int16 | Encoding::Float16 => 2,
            Encoding::Int32 => 4,
        }
    }

    /// Convert an application value to the raw integer written to storage.
    ///
    /// 16-bit encodings return a value in `i16` range (Float16 bits are
    /// reinterpreted as signed), so the caller can narrow with `as i16`.
    pub fn encode(self, value: f64) -> i32 {
        match self {
            Encoding::Int16 => integer::encode_i16(value) as i32,
            Encoding::Int32 => integer::encode_i32(value),
            Encoding::Float16 => half::encode(value) as i16 as i32,
        }
    }

    /// Inverse of [`Encoding::encode`]. Only the low `width()` bytes of `raw` are used.
    pub fn decode(self, raw: i32) -> f64 {
        match self {
            Encoding::Int16 => integer::decode_i16(raw as i16),
            Encoding::Int32 => integer::decode_i32(raw),
            Encoding::Float16 => half::decode(raw as u16),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Int16 => "int16",
            Encoding::Int32 => "int32",
            Encoding::Float16 => "float16",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int16" | "i16" => Ok(Encoding::Int16),
            "int32" | "i32" => Ok(Encoding::Int32),
            "float16" | "f16" | "half" => Ok(Encoding::Float16),
            _ => Err(ParseEncodingError(s.to_string())),
        }
    }
}
