//! Legalization error types.

use thiserror::Error;

/// Legalization errors
///
/// Only data-dependent failures travel through this type. Violated call
/// preconditions (wrong element type fed to a builder that documents its
/// input type) are programmer errors in the calling legalization policy and
/// fail through assertions instead.
#[derive(Debug, Error)]
pub enum LegalizeError {
    #[error("unsupported weight quantization: {found}")]
    UnsupportedWeightQuantization { found: String },

    #[error(
        "infeasible padding: input {input_size}, filter {filter_size}, \
         stride {stride}, dilation {dilation}"
    )]
    InfeasiblePadding {
        input_size: i64,
        filter_size: i64,
        stride: i64,
        dilation: i64,
    },

    #[error("value is not a compile-time constant")]
    NotAConstant,
}

/// Result type for legalization operations
pub type Result<T> = std::result::Result<T, LegalizeError>;
