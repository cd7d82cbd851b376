//! Rescale operation builders
//!
//! Emit the rescale ops that move values between quantized domains: a
//! generic form, promotion into and demotion out of the 32-bit accumulator
//! domain, and the convolution-output form that folds input, weight and
//! output scales together.

use log::{debug, warn};

use crate::error::{LegalizeError, Result};
use crate::ir::{AffineParams, ElementType, IntWidth, QuantizedType, RescaleOp, TensorType, Value};

use super::{quantize_scale, ScaleWidth};

/// True when the 32-bit scale path applies to the given output element
///
/// Only 8-bit outputs get the wider multiplier: the narrow storage leaves
/// no headroom for 16-bit-multiplier rounding error, while 16-bit outputs
/// tolerate it.
pub fn is_scale32(output_qtype: &AffineParams) -> bool {
    output_qtype.storage_bits == 8
}

/// Build a rescale op from a floating scale and zero points
///
/// The scale is quantized at 32-bit width when `scale32` is set, 16-bit
/// otherwise.
pub fn build_rescale(
    input: Value,
    output_type: TensorType,
    scale: f64,
    input_zp: i64,
    output_zp: i64,
    double_round: bool,
    scale32: bool,
) -> Value {
    let width = if scale32 { ScaleWidth::Bits32 } else { ScaleWidth::Bits16 };
    let fixed = quantize_scale(scale, width);

    Value::Rescale(Box::new(RescaleOp {
        input,
        output_type,
        input_zp: input_zp as i32,
        output_zp: output_zp as i32,
        multipliers: vec![fixed.multiplier],
        shifts: vec![fixed.shift],
        scale32,
        double_round,
        per_channel: false,
    }))
}

/// Rescale a narrow quantized value into the 32-bit accumulator domain
///
/// Output element type is always i32 over the input's shape, output zero
/// point 0, single rounding, 32-bit scale.
pub fn build_rescale_to_i32(input: Value, input_scale: f64, input_zp: i64) -> Value {
    let output_type =
        TensorType::new(input.ty().shape.clone(), ElementType::Int(IntWidth::I32));
    build_rescale(input, output_type, input_scale, input_zp, 0, false, true)
}

/// Rescale a 32-bit accumulator value down into a narrow quantized type
///
/// Input zero point is 0 by construction; always double rounding on the
/// 32-bit scale path. The input element type must be exactly i32.
pub fn build_rescale_from_i32(
    input: Value,
    output_type: TensorType,
    output_scale: f64,
    output_zp: i64,
) -> Value {
    assert!(
        input.ty().element.is_int(32),
        "rescale-from-i32 input element type must be i32"
    );

    build_rescale(input, output_type, output_scale, 0, output_zp, true, true)
}

/// Rescale a convolution accumulator into the declared output type
///
/// The per-element scale is `(input_scale * weight_scale) / output_scale`.
/// Per-tensor weight quantization yields a single multiplier/shift pair;
/// per-channel weights yield one pair per output channel (trailing
/// dimension of the output shape) with the per-channel flag set. Any other
/// weight quantization representation is a data-dependent failure.
///
/// Input and output element types must be per-tensor quantized.
pub fn build_rescale_conv_output(
    conv_val: Value,
    input_type: &TensorType,
    weight_type: &TensorType,
    output_type: &TensorType,
) -> Result<Value> {
    let input_qtype = input_type
        .element
        .per_tensor_quantized()
        .expect("conv rescale input must be per-tensor quantized");
    let output_qtype = output_type
        .element
        .per_tensor_quantized()
        .expect("conv rescale output must be per-tensor quantized");

    let input_scale = input_qtype.scale;
    let output_scale = output_qtype.scale;
    let output_zp = output_qtype.zero_point;

    let scale32 = is_scale32(output_qtype);
    let width = if scale32 { ScaleWidth::Bits32 } else { ScaleWidth::Bits16 };

    match weight_type.element.quantized() {
        Some(QuantizedType::PerTensor(weight_qtype)) => {
            let op_tensor_scale = (input_scale * weight_qtype.scale) / output_scale;
            let fixed = quantize_scale(op_tensor_scale, width);

            Ok(Value::Rescale(Box::new(RescaleOp {
                input: conv_val,
                output_type: output_type.clone(),
                input_zp: 0,
                output_zp: output_zp as i32,
                multipliers: vec![fixed.multiplier],
                shifts: vec![fixed.shift],
                scale32,
                double_round: true,
                per_channel: false,
            })))
        }
        Some(QuantizedType::PerChannel(weight_qtype)) => {
            let output_channels = output_type.last_dim() as usize;
            debug!("per-channel conv rescale over {output_channels} output channels");

            let mut multipliers = Vec::with_capacity(output_channels);
            let mut shifts = Vec::with_capacity(output_channels);

            for oc in 0..output_channels {
                let op_channel_scale = (input_scale * weight_qtype.scales[oc]) / output_scale;
                let fixed = quantize_scale(op_channel_scale, width);
                multipliers.push(fixed.multiplier);
                shifts.push(fixed.shift);
            }

            Ok(Value::Rescale(Box::new(RescaleOp {
                input: conv_val,
                output_type: output_type.clone(),
                input_zp: 0,
                output_zp: output_zp as i32,
                multipliers,
                shifts,
                scale32,
                double_round: true,
                per_channel: true,
            })))
        }
        None => {
            warn!("conv rescale: weight element type carries no usable quantization");
            Err(LegalizeError::UnsupportedWeightQuantization {
                found: format!("{:?}", weight_type.element),
            })
        }
    }
}
