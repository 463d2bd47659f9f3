//! Half-precision-like float: 1 sign bit, 5 exponent bits (bias 15), 10 mantissa bits.
//!
//! Not bit-identical to IEEE binary16:
//! - magnitudes at or above 2^16 saturate to [`OVERFLOW_BITS`] (decodes to 65536, not infinity)
//! - values below the normal range keep the normalized significand as the
//!   mantissa source, so the stored mantissa carries into bit 10
//! - there is no NaN; NaN input encodes as positive overflow

pub const EXPONENT_BIAS: i32 = 15;
pub const MANTISSA_BITS: u32 = 10;
pub const SIGN_MASK: u16 = 0x8000;
pub const EXPONENT_MASK: u16 = 0x1F;
pub const MANTISSA_MASK: u16 = 0x03FF;
/// Exponent field all ones, mantissa zero. The sign bit is applied on top.
pub const OVERFLOW_BITS: u16 = EXPONENT_MASK << MANTISSA_BITS;

const MANTISSA_SCALE: f64 = (1u32 << MANTISSA_BITS) as f64;
const MAX_BIASED_EXPONENT: i32 = 31;
const SUBNORMAL_EXPONENT: i32 = -14;

/// Encode `value` into the 16-bit pattern.
pub fn encode(value: f64) -> u16 {
    if value == 0.0 {
        return 0;
    }
    if value.is_nan() {
        return OVERFLOW_BITS;
    }

    let sign = if value < 0.0 { SIGN_MASK } else { 0 };
    if value.is_infinite() {
        return sign | OVERFLOW_BITS;
    }

    // Scale into [1, 2). Halving and doubling are exact in f64.
    let mut v = value.abs();
    let mut exponent = 0i32;
    while v >= 2.0 {
        v /= 2.0;
        exponent += 1;
    }
    while v < 1.0 {
        v *= 2.0;
        exponent -= 1;
    }

    let biased = exponent + EXPONENT_BIAS;
    if biased >= MAX_BIASED_EXPONENT {
        return sign | OVERFLOW_BITS;
    }

    let (field, source) = if biased <= 0 {
        (0u16, v)
    } else {
        (biased as u16, v - 1.0)
    };
    // source < 2, so the truncated mantissa fits in 11 bits. Not masked.
    let mantissa = (source * MANTISSA_SCALE) as u16;

    sign | (field << MANTISSA_BITS) | mantissa
}

/// Decode a 16-bit pattern back to `f64`.
pub fn decode(bits: u16) -> f64 {
    let negative = bits & SIGN_MASK != 0;
    let exponent = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    let mantissa = (bits & MANTISSA_MASK) as f64;

    let magnitude = if exponent == 0 {
        if mantissa == 0.0 {
            return 0.0;
        }
        (mantissa / MANTISSA_SCALE) * 2f64.powi(SUBNORMAL_EXPONENT)
    } else {
        (1.0 + mantissa / MANTISSA_SCALE) * 2f64.powi(exponent - EXPONENT_BIAS)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values_roundtrip() {
        let input = [1.5, 2.0, -0.25, 0.5, 1.0, -3.0, 1024.0, 65504.0, 0.099_975_585_937_5];
        for &val in &input {
            let out = decode(encode(val));
            assert_eq!(out, val, "Mismatch for {}: got {}", val, out);
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode(0.0), 0);
        assert_eq!(encode(-0.0), 0);
        assert_eq!(decode(0), 0.0);
        assert_eq!(decode(SIGN_MASK), 0.0);
    }

    #[test]
    fn test_known_bit_patterns() {
        assert_eq!(encode(1.0), 0x3C00);
        assert_eq!(encode(1.5), 0x3E00);
        assert_eq!(encode(2.0), 0x4000);
        assert_eq!(encode(0.5), 0x3800);
        assert_eq!(encode(-0.25), 0xB400);
        assert_eq!(encode(65504.0), 0x7BFF);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(encode(65536.0), OVERFLOW_BITS);
        assert_eq!(encode(-1.0e9), SIGN_MASK | OVERFLOW_BITS);
        assert_eq!(encode(f64::INFINITY), OVERFLOW_BITS);
        assert_eq!(encode(f64::NEG_INFINITY), SIGN_MASK | OVERFLOW_BITS);
        assert_eq!(encode(f64::NAN), OVERFLOW_BITS);
        assert_eq!(decode(OVERFLOW_BITS), 65536.0);
    }

    #[test]
    fn test_mantissa_truncates_toward_zero() {
        // 1 + 1/1024 + 1/4096 -> mantissa 1 (the 1/4096 is dropped)
        let v = 1.0 + 1.0 / 1024.0 + 1.0 / 4096.0;
        assert_eq!(encode(v), 0x3C01);
        assert_eq!(encode(-v), 0xBC01);
    }

    #[test]
    fn test_below_normal_range_carries_into_exponent() {
        // 2^-14 is the smallest normal value and round-trips.
        assert_eq!(encode(2f64.powi(-14)), 0x0400);
        // 2^-15 clamps the exponent to 0 and keeps the normalized 1.0 as the
        // mantissa source: 1.0 * 1024 = 0x400, which lands in bit 10.
        assert_eq!(encode(2f64.powi(-15)), 0x0400);
        assert_eq!(encode(-1.5 * 2f64.powi(-20)), SIGN_MASK | 0x0600);
    }

    #[test]
    fn test_subnormal_decode() {
        assert_eq!(decode(0x0001), 2f64.powi(-24));
        assert_eq!(decode(0x0200), 2f64.powi(-15));
        assert_eq!(decode(SIGN_MASK | 0x0200), -(2f64.powi(-15)));
    }
}
