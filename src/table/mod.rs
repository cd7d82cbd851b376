//! Lookup-table construction
//!
//! The target approximates arbitrary nonlinear functions through
//! interpolated lookup tables of exactly 513 signed 16-bit entries. Three
//! builders cover the 8-bit symmetric domain, the 16-bit bounded domain
//! with interpolation-error compensation, and the 32-bit split-precision
//! dual-table path. Each accepts the sampling function as a first-class
//! `f64 → f64` closure — sigmoid, tanh, exp and friends are supplied by
//! the operator-specific legalization policy.

mod builder;
#[cfg(test)]
mod tests;

pub use builder::{build_table_16bit, build_table_32bit, build_table_8bit, TABLE_SIZE};
