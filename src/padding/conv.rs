//! SAME/VALID padding translation for regular convolutions

use log::debug;

use crate::error::{LegalizeError, Result};
use crate::ir::TensorType;

use super::{DataLayout, PadPolicy};

/// Windowed output extent and padding for one spatial dimension
///
/// TensorFlow-compatible formula; odd SAME padding lands on the after
/// side. Fails when the stride/dilation are invalid or the output extent
/// would be non-positive.
fn windowed_output_size(
    input_size: i64,
    filter_size: i64,
    dilation: i64,
    stride: i64,
    policy: PadPolicy,
) -> Result<(i64, i64, i64)> {
    if stride < 1 || dilation < 1 {
        return Err(LegalizeError::InfeasiblePadding {
            input_size,
            filter_size,
            stride,
            dilation,
        });
    }

    let effective_filter_size = (filter_size - 1) * dilation + 1;

    let (output_size, pad_before, pad_after) = match policy {
        PadPolicy::Valid => ((input_size - effective_filter_size + stride) / stride, 0, 0),
        PadPolicy::Same => {
            let output_size = (input_size + stride - 1) / stride;
            let needed =
                ((output_size - 1) * stride + effective_filter_size - input_size).max(0);
            let before = needed / 2;
            (output_size, before, needed - before)
        }
        PadPolicy::Explicit => unreachable!("explicit padding is pre-filtered by the caller"),
    };

    if output_size < 1 {
        debug!(
            "infeasible window: input {input_size}, filter {filter_size}, \
             stride {stride}, dilation {dilation}"
        );
        return Err(LegalizeError::InfeasiblePadding {
            input_size,
            filter_size,
            stride,
            dilation,
        });
    }

    Ok((output_size, pad_before, pad_after))
}

/// Translate SAME/VALID policy into explicit pads for a regular convolution
///
/// Computed independently per spatial dimension; the result holds
/// `[before_0, after_0, before_1, after_1]`. No partial result is produced
/// on failure. The caller must pre-filter [`PadPolicy::Explicit`].
///
/// # Arguments
/// * `policy` - SAME or VALID
/// * `layout` - Spatial layout of the 4-D input
/// * `first_filter_spatial_dim` - Index of the filter's first spatial dim
/// * `input_type`, `filter_type` - Shape descriptors
/// * `strides`, `dilations` - One entry per spatial dimension
pub fn conv_padding(
    policy: PadPolicy,
    layout: DataLayout,
    first_filter_spatial_dim: usize,
    input_type: &TensorType,
    filter_type: &TensorType,
    strides: &[i64],
    dilations: &[i64],
) -> Result<Vec<i64>> {
    assert!(
        policy != PadPolicy::Explicit,
        "symbolic translator cannot take explicit padding"
    );

    let mut pads = Vec::with_capacity(4);
    for i in 0..2 {
        let input_dim = layout.spatial_dim_index(i);
        let filter_dim = first_filter_spatial_dim + i;

        let (_, before, after) = windowed_output_size(
            input_type.dim(input_dim),
            filter_type.dim(filter_dim),
            dilations[i],
            strides[i],
            policy,
        )?;

        pads.push(before);
        pads.push(after);
    }

    Ok(pads)
}

/// Extract the two spatial pairs from a full per-dimension pad array
///
/// The caller-supplied array holds `(before, after)` for every dimension
/// of a 4-D tensor, eight entries in trailing-pair layout; only the two
/// spatial pairs survive, in order.
pub fn explicit_padding(pads: &[i64], layout: DataLayout) -> Vec<i64> {
    let mut spatial = Vec::with_capacity(4);
    for i in 0..2 {
        let dim = layout.spatial_dim_index(i);
        spatial.push(pads[dim * 2]);
        spatial.push(pads[dim * 2 + 1]);
    }
    spatial
}
