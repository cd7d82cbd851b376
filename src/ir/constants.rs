//! Constant emitters for scalar and rank-1 tensors
//!
//! Pure builders: identical inputs produce structurally identical
//! constants. Width dispatch is a match over the closed [`IntWidth`] set,
//! one construction rule per variant.

use super::{ConstData, Constant, ElementType, IntWidth, TensorType, Value};

/// Create a rank-0 32-bit float constant
pub fn const_scalar_f32(val: f32) -> Value {
    Value::Constant(Constant {
        ty: TensorType::scalar(ElementType::Float32),
        data: ConstData::F32(vec![val]),
    })
}

/// Create a rank-0 32-bit integer constant
pub fn const_scalar_i32(val: i32) -> Value {
    Value::Constant(Constant {
        ty: TensorType::scalar(ElementType::Int(IntWidth::I32)),
        data: ConstData::I32(vec![val]),
    })
}

/// Create a rank-1 integer constant at the given storage width
///
/// Values are narrowed into the width's payload representation. 48-bit
/// entries are wrapped into the 48-bit two's-complement range and kept in
/// `i64` carriers.
pub fn const_1d_int(width: IntWidth, values: &[i64]) -> Value {
    let data = match width {
        IntWidth::I8 => ConstData::I8(values.iter().map(|&v| v as i8).collect()),
        IntWidth::I16 => ConstData::I16(values.iter().map(|&v| v as i16).collect()),
        IntWidth::I32 => ConstData::I32(values.iter().map(|&v| v as i32).collect()),
        IntWidth::I48 => ConstData::I48(values.iter().map(|&v| wrap_i48(v)).collect()),
        IntWidth::I64 => ConstData::I64(values.to_vec()),
    };

    Value::Constant(Constant {
        ty: TensorType::new(vec![values.len() as i64], ElementType::Int(width)),
        data,
    })
}

/// Create a rank-1 32-bit float constant
pub fn const_1d_f32(values: &[f32]) -> Value {
    Value::Constant(Constant {
        ty: TensorType::new(vec![values.len() as i64], ElementType::Float32),
        data: ConstData::F32(values.to_vec()),
    })
}

/// Wrap a 64-bit value into 48-bit two's complement, sign-extended
fn wrap_i48(v: i64) -> i64 {
    (v << 16) >> 16
}
