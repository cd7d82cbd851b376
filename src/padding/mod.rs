//! Padding geometry translation
//!
//! Converts symbolic SAME/VALID padding policy into the explicit per-side
//! pad counts the target consumes, restricted to the two spatial
//! dimensions of 4-D tensors in channel-first or channel-last layout.
//!
//! - **conv**: regular-convolution translation and explicit-pad extraction
//! - **transpose**: transposed-convolution derivation (leading pads only)

mod conv;
mod transpose;
mod types;

pub use conv::{conv_padding, explicit_padding};
pub use transpose::transpose_conv_padding;
pub use types::{DataLayout, PadPolicy};
