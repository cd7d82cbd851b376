//! IR values: constants and rescale operations

use serde::{Deserialize, Serialize};

use super::TensorType;

/// Constant payload, tagged by storage width
///
/// The target's width set is closed, so each width gets its own variant
/// rather than a generic parameter. 48-bit entries live in sign-extended
/// `i64` carriers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstData {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I48(Vec<i64>),
    I64(Vec<i64>),
    F32(Vec<f32>),
}

impl ConstData {
    /// Number of elements in the payload
    pub fn len(&self) -> usize {
        match self {
            ConstData::I8(v) => v.len(),
            ConstData::I16(v) => v.len(),
            ConstData::I32(v) => v.len(),
            ConstData::I48(v) | ConstData::I64(v) => v.len(),
            ConstData::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A materialized constant tensor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub ty: TensorType,
    pub data: ConstData,
}

/// Integer rescale operation
///
/// Applies `out = clamp(round((in - input_zp) * multiplier >> shift) + output_zp)`
/// where rounding is single or double-compensated per `double_round`.
/// `multipliers` and `shifts` are parallel sequences of length 1, or one
/// pair per trailing-dimension output channel when `per_channel` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RescaleOp {
    /// Value being rescaled
    pub input: Value,
    /// Declared result type
    pub output_type: TensorType,
    pub input_zp: i32,
    pub output_zp: i32,
    pub multipliers: Vec<i32>,
    pub shifts: Vec<i32>,
    /// 32-bit multiplier path (16-bit otherwise)
    pub scale32: bool,
    /// Compensated double rounding
    pub double_round: bool,
    /// One multiplier/shift pair per output channel
    pub per_channel: bool,
}

/// A value flowing through the host graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Statically known constant
    Constant(Constant),
    /// Result of a rescale operation
    Rescale(Box<RescaleOp>),
    /// Produced elsewhere in the graph; opaque to this layer
    Argument(TensorType),
}

impl Value {
    /// Result type of the value
    pub fn ty(&self) -> &TensorType {
        match self {
            Value::Constant(c) => &c.ty,
            Value::Rescale(op) => &op.output_type,
            Value::Argument(ty) => ty,
        }
    }

    /// The constant backing this value, if statically known
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Value::Constant(c) => Some(c),
            _ => None,
        }
    }
}
