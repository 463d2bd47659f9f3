const I16_MODULUS: f64 = 65_536.0;
const I32_MODULUS: f64 = 4_294_967_296.0;

/// Truncate toward zero, then wrap modulo 2^16 into two's complement.
/// Non-finite values store 0.
#[inline]
pub fn encode_i16(value: f64) -> i16 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(I16_MODULUS) as u16 as i16
}

/// Truncate toward zero, then wrap modulo 2^32 into two's complement.
/// Non-finite values store 0.
#[inline]
pub fn encode_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(I32_MODULUS) as u32 as i32
}

#[inline]
pub fn decode_i16(raw: i16) -> f64 {
    raw as f64
}

#[inline]
pub fn decode_i32(raw: i32) -> f64 {
    raw as f64
}
