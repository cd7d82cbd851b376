//! Table sampling and quantization
//!
//! All builders emit constants of exactly [`TABLE_SIZE`] entries clamped to
//! the signed 16-bit range, wrapped in a unit-scale quantized i16 element
//! type.

use crate::ir::{AffineParams, ConstData, Constant, ElementType, QuantizedType, TensorType, Value};

/// Entry count of every generated table
pub const TABLE_SIZE: usize = 513;

/// Round to nearest, ties away from zero
fn llround(x: f64) -> i64 {
    x.round() as i64
}

/// Element type shared by all table constants: 16-bit storage, unit scale,
/// zero offset
fn table_element_type() -> ElementType {
    ElementType::Quantized(QuantizedType::PerTensor(AffineParams {
        scale: 1.0,
        zero_point: 0,
        storage_bits: 16,
    }))
}

fn table_constant(entries: Vec<i16>) -> Value {
    debug_assert_eq!(entries.len(), TABLE_SIZE);

    Value::Constant(Constant {
        ty: TensorType::new(vec![TABLE_SIZE as i64], table_element_type()),
        data: ConstData::I16(entries),
    })
}

/// Build a table over the dequantized 8-bit input domain
///
/// Samples the integers -256..=256 offset by the input zero point and
/// scaled by the input scale, applies `func`, then requantizes each sample
/// by the output scale and zero point.
///
/// # Arguments
/// * `input_scale`, `input_zp` - Input affine parameters
/// * `output_scale`, `output_zp` - Output affine parameters
/// * `func` - Sampled function
pub fn build_table_8bit<F>(
    input_scale: f64,
    input_zp: i32,
    output_scale: f64,
    output_zp: i32,
    func: F,
) -> Value
where
    F: Fn(f64) -> f64,
{
    let mut entries = Vec::with_capacity(TABLE_SIZE);

    for i in -256i32..=256 {
        let dequantized = input_scale * f64::from(i - input_zp);
        let transformed = func(dequantized);
        let rescaled = llround(transformed / output_scale);
        let quantized = rescaled + i64::from(output_zp);
        entries.push(quantized.clamp(-32768, 32767) as i16);
    }

    table_constant(entries)
}

/// Build a table over an explicit continuous domain `[min, max]`
///
/// 512 equal steps give 513 samples. Each stepped sample carries a bias
/// subtracting half the discrepancy between the linear interpolant's
/// midpoint and the true function value at that midpoint, which minimizes
/// worst-case error for consumers that interpolate between adjacent
/// entries at runtime. The final sample is taken at `max` directly so step
/// accumulation cannot drift past the boundary.
pub fn build_table_16bit<F>(func: F, min: f64, max: f64) -> Value
where
    F: Fn(f64) -> f64,
{
    let step = (max - min) / 512.0;
    let half_step = step / 2.0;

    let mut entries = Vec::with_capacity(TABLE_SIZE);

    for i in 0..512 {
        let x = min + f64::from(i) * step;
        let sample = llround(func(x) * 32768.0);

        let next_sample = func(min + f64::from(i + 1) * step) * 32768.0;
        let midpoint_interp = ((next_sample + (func(x) * 32768.0).round()) / 2.0).round();
        let midpoint = (func(x + half_step) * 32768.0).round();
        let bias = llround((midpoint_interp - midpoint) / 2.0);

        entries.push((sample - bias).clamp(-32768, 32767) as i16);
    }

    let last = llround(func(max) * 32768.0);
    entries.push(last.clamp(-32768, 32767) as i16);

    table_constant(entries)
}

/// Build the split-precision table pair for 32-bit outputs
///
/// Output values are restricted to `[-1.0, 1.0]` and encoded as signed
/// 31-bit fractions. The upper table holds the high half-word of each
/// encoded sample; the lower table holds the low half-word offset by
/// -0x8000 so the unsigned complement fits signed 16-bit storage
/// (consumers add the offset back before reassembling the 32-bit value).
/// An exact +1.0 would encode as 2^31, which i32 cannot represent; it
/// clamps to `2^31 - 1` before splitting.
///
/// Returns `(upper, lower)`.
pub fn build_table_32bit<F>(input_scale: f64, input_zp: i32, func: F) -> (Value, Value)
where
    F: Fn(f64) -> f64,
{
    let output_inv_scale = (1i64 << 31) as f64;

    let mut upper_entries = Vec::with_capacity(TABLE_SIZE);
    let mut lower_entries = Vec::with_capacity(TABLE_SIZE);

    for i in -256i32..=256 {
        let dequantized = input_scale * f64::from(i - input_zp);
        let truncated = func(dequantized).clamp(-1.0, 1.0);
        let mut rescaled = (truncated * output_inv_scale).round() as i64;

        if rescaled == 1i64 << 31 {
            rescaled = (1i64 << 31) - 1;
        }

        upper_entries.push(((rescaled >> 16) & 0xffff) as i16);
        lower_entries.push(((rescaled & 0xffff) - 0x8000) as i16);
    }

    (table_constant(upper_entries), table_constant(lower_entries))
}
