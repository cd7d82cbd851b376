//! # Legalizar: Quantized-Operator Numeric Legalization
//!
//! Legalizar converts quantized neural-network operator parameters (affine
//! scale/zero-point pairs, per-tensor or per-channel) into the integer-only
//! form a hardware target executes: multiplier + right-shift rescales and
//! 513-entry interpolated lookup tables, plus padding geometry translation
//! and constant-tensor utilities.
//!
//! ## Architecture
//!
//! - **ir**: Tensor/element type descriptors, constant values, introspection
//! - **rescale**: Fixed-point scale quantizer and rescale op builders
//! - **table**: 8/16/32-bit lookup-table construction
//! - **padding**: SAME/VALID symbolic padding → explicit per-side counts
//!
//! Every operation is a pure function: immutable descriptors in, freshly
//! constructed values out, no retained state. The enclosing graph-rewriting
//! engine owns pattern matching and decides *when* to call these builders;
//! this crate owns the numeric transformations themselves.

pub mod ir;
pub mod padding;
pub mod rescale;
pub mod table;

pub mod error;

// Re-export commonly used types
pub use error::{LegalizeError, Result};
pub use ir::{Constant, ElementType, TensorType, Value};
pub use rescale::{quantize_scale, FixedPointScale, ScaleWidth};
