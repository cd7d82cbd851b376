//! Fixed-point quantization of floating scale factors
//!
//! A positive scale `s` becomes `(multiplier, shift)` with
//! `s ≈ multiplier / 2^shift`. The multiplier is normalized to use the top
//! bit of its width, so reconstruction error stays below one unit in the
//! last representable place of the chosen width.

use serde::{Deserialize, Serialize};

/// Significant width of the fixed-point multiplier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleWidth {
    /// 16-bit multiplier (15 fraction bits)
    Bits16,
    /// 32-bit multiplier (31 fraction bits)
    Bits32,
}

impl ScaleWidth {
    /// Fraction bits of the normalized multiplier
    fn fraction_bits(self) -> i32 {
        match self {
            ScaleWidth::Bits16 => 15,
            ScaleWidth::Bits32 => 31,
        }
    }
}

/// Integer multiplier and right-shift pair approximating a floating scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPointScale {
    pub multiplier: i32,
    pub shift: i32,
}

impl FixedPointScale {
    /// The scale this pair reconstructs: `multiplier * 2^-shift`
    pub fn reconstruct(&self) -> f64 {
        f64::from(self.multiplier) * 2f64.powi(-self.shift)
    }
}

/// Decompose a finite double into a mantissa in [0.5, 1) and an exponent
/// such that `value = mantissa * 2^exponent`
fn frexp(value: f64) -> (f64, i32) {
    if value == 0.0 {
        return (0.0, 0);
    }

    let bits = value.to_bits();
    let raw_exponent = ((bits >> 52) & 0x7ff) as i32;
    if raw_exponent == 0 {
        // Subnormal: renormalize through a 2^64 upscale first
        let (mantissa, exponent) = frexp(value * 2f64.powi(64));
        return (mantissa, exponent - 64);
    }

    let exponent = raw_exponent - 1022;
    let mantissa = f64::from_bits((bits & !(0x7ffu64 << 52)) | (1022u64 << 52));
    (mantissa, exponent)
}

/// Quantize a positive scale factor into a fixed-point multiplier/shift pair
///
/// Rounding is to nearest, ties away from zero. The degenerate
/// `scale == 0.0` yields `(0, 0)`; callers are expected never to request it.
///
/// # Arguments
/// * `scale` - Positive floating scale factor
/// * `width` - Multiplier width (16 or 32 significant bits)
pub fn quantize_scale(scale: f64, width: ScaleWidth) -> FixedPointScale {
    if scale == 0.0 {
        return FixedPointScale { multiplier: 0, shift: 0 };
    }

    let fraction_bits = width.fraction_bits();
    let (mantissa, mut exponent) = frexp(scale);

    // Mantissa in [0.5, 1) lands the rounded value on the top bit
    let mut rounded = (mantissa * (1i64 << fraction_bits) as f64).round() as i64;

    // Rounding can carry up to the next power of two
    if rounded == 1i64 << fraction_bits {
        rounded /= 2;
        exponent += 1;
    }

    let mut multiplier = rounded as i32;
    let mut shift = fraction_bits - exponent;

    // Right shifts top out at 62 bits; fold the excess into the multiplier
    if shift > 62 {
        multiplier >>= (shift - 62).min(31);
        shift = 62;
    }

    FixedPointScale { multiplier, shift }
}
