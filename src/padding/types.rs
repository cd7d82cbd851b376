//! Padding policy and tensor layout descriptors

use serde::{Deserialize, Serialize};

/// Symbolic convolution padding policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadPolicy {
    /// Pad so every input position contributes an output at stride 1
    Same,
    /// No padding; windows must fit entirely inside the input
    Valid,
    /// Per-side counts supplied directly by the caller; never handled by
    /// the symbolic translators
    Explicit,
}

/// Spatial layout of a 4-D tensor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataLayout {
    /// Batch, height, width, channels
    Nhwc,
    /// Batch, channels, height, width
    Nchw,
}

impl DataLayout {
    /// Index of the i-th spatial dimension (i in 0..2) of a 4-D tensor
    pub fn spatial_dim_index(self, i: usize) -> usize {
        debug_assert!(i < 2, "4-D tensors carry two spatial dimensions");
        match self {
            DataLayout::Nhwc => 1 + i,
            DataLayout::Nchw => 2 + i,
        }
    }
}
