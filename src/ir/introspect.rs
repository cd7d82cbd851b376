//! Introspection over already-materialized constants

use crate::error::{LegalizeError, Result};

use super::{ConstData, Constant, ElementType, IntWidth, TensorType, Value};

/// Extract the integer elements of a statically-constant value
///
/// An empty vector is a valid success; a value that is not backed by an
/// integer constant fails with [`LegalizeError::NotAConstant`]. Elements
/// of any storage width are narrowed to `i32`.
pub fn vector_from_value(value: &Value) -> Result<Vec<i32>> {
    let constant = value.as_constant().ok_or(LegalizeError::NotAConstant)?;

    match &constant.data {
        ConstData::I8(v) => Ok(v.iter().map(|&x| i32::from(x)).collect()),
        ConstData::I16(v) => Ok(v.iter().map(|&x| i32::from(x)).collect()),
        ConstData::I32(v) => Ok(v.clone()),
        ConstData::I48(v) | ConstData::I64(v) => Ok(v.iter().map(|&x| x as i32).collect()),
        ConstData::F32(_) => Err(LegalizeError::NotAConstant),
    }
}

/// Strip quantization metadata from a constant bias tensor
///
/// If the value is statically constant and its element type carries
/// quantized affine metadata, re-emit an equivalent constant at the raw
/// storage integer type with the payload untouched; otherwise hand the
/// input back unchanged. Values are never rescaled here — callers handle
/// the numeric reinterpretation.
pub fn unquantized_bias(value: &Value) -> Value {
    if let Value::Constant(constant) = value {
        if let ElementType::Quantized(qtype) = &constant.ty.element {
            if let Some(width) = IntWidth::from_bits(qtype.storage_bits()) {
                return Value::Constant(Constant {
                    ty: TensorType::new(constant.ty.shape.clone(), ElementType::Int(width)),
                    data: constant.data.clone(),
                });
            }
        }
    }

    value.clone()
}
