//! Minimal IR value model consumed and produced by the legalization builders
//!
//! The host graph-rewriting engine hands this crate read-only tensor type
//! descriptors and receives freshly constructed values back:
//! - **types**: element/tensor type descriptors with quantization metadata
//! - **value**: constants and rescale operations
//! - **constants**: scalar and rank-1 constant emitters
//! - **introspect**: element extraction and bias dequantization over
//!   already-materialized constants

mod constants;
mod introspect;
mod types;
mod value;

pub use constants::{const_1d_f32, const_1d_int, const_scalar_f32, const_scalar_i32};
pub use introspect::{unquantized_bias, vector_from_value};
pub use types::{
    AffineParams, ElementType, IntWidth, PerChannelParams, QuantizedType, TensorType,
};
pub use value::{ConstData, Constant, RescaleOp, Value};
