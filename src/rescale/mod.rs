//! Integer rescale derivation
//!
//! The target has no floating-point multiply; a floating scale factor is
//! legalized into an integer multiplier and right shift, applied as
//! `(x * multiplier) >> shift` with optional zero-point adjustment and
//! double-rounding bias compensation.
//!
//! - **fixed_point**: scale → (multiplier, shift) quantizer
//! - **builder**: rescale op construction (generic, to/from the 32-bit
//!   accumulator domain, convolution output)

mod builder;
mod fixed_point;

pub use builder::{
    build_rescale, build_rescale_conv_output, build_rescale_from_i32, build_rescale_to_i32,
    is_scale32,
};
pub use fixed_point::{quantize_scale, FixedPointScale, ScaleWidth};
