//! Padding derivation for transposed convolutions

use crate::ir::TensorType;

use super::DataLayout;

/// Derive the explicit padding of a transposed convolution
///
/// Per spatial dimension the total padding reconciles the stride-expanded
/// input against the declared output extent:
/// `total = max(0, (input-1)*stride + effective_filter - output)` with
/// `effective_filter = (filter-1)*dilation + 1`, split as
/// `before = total / 2`, `after = total - before`.
///
/// Only `before` appears in the result (two entries, one per spatial
/// dimension); the consumer's attribute arity expects exactly this shape,
/// unlike the regular-convolution translator which emits both sides.
pub fn transpose_conv_padding(
    layout: DataLayout,
    first_filter_spatial_dim: usize,
    input_type: &TensorType,
    filter_type: &TensorType,
    output_type: &TensorType,
    strides: &[i64],
    dilations: &[i64],
) -> Vec<i64> {
    let mut pads = Vec::with_capacity(2);

    for i in 0..2 {
        let spatial_dim = layout.spatial_dim_index(i);
        let input_size = input_type.dim(spatial_dim);
        let output_size = output_type.dim(spatial_dim);
        let filter_size = filter_type.dim(first_filter_spatial_dim + i);

        let effective_filter_size = (filter_size - 1) * dilations[i] + 1;
        let total_padding =
            ((input_size - 1) * strides[i] + effective_filter_size - output_size).max(0);

        let pad_before = total_padding / 2;
        pads.push(pad_before);
    }

    pads
}
