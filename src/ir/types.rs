//! Tensor and element type descriptors

use serde::{Deserialize, Serialize};

/// Integer storage widths understood by the target
///
/// A closed set; 48-bit accumulators have no native machine integer, so
/// their constant payloads are carried as sign-extended `i64` through to
/// serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I48,
    I64,
}

impl IntWidth {
    /// Width in bits
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::I8 => 8,
            IntWidth::I16 => 16,
            IntWidth::I32 => 32,
            IntWidth::I48 => 48,
            IntWidth::I64 => 64,
        }
    }

    /// Width for a given bit count, if it belongs to the closed set
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(IntWidth::I8),
            16 => Some(IntWidth::I16),
            32 => Some(IntWidth::I32),
            48 => Some(IntWidth::I48),
            64 => Some(IntWidth::I64),
            _ => None,
        }
    }
}

/// Per-tensor affine quantization parameters
///
/// Maps stored integers to reals via `real = scale * (stored - zero_point)`.
/// Invariants: `scale > 0`; `zero_point` fits the signed range implied by
/// `storage_bits`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineParams {
    /// Scale factor
    pub scale: f64,
    /// Zero point
    pub zero_point: i64,
    /// Storage width in bits (8, 16 or 32)
    pub storage_bits: u32,
}

/// Per-channel affine quantization: one scale per output channel with a
/// shared zero point (TOSA convention)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerChannelParams {
    /// Scale factors, one per output channel (trailing dimension)
    pub scales: Vec<f64>,
    /// Shared zero point
    pub zero_point: i64,
    /// Storage width in bits
    pub storage_bits: u32,
}

/// Quantization granularity attached to an element type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuantizedType {
    /// Single scale/zero-point for the whole tensor
    PerTensor(AffineParams),
    /// One scale per output channel
    PerChannel(PerChannelParams),
}

impl QuantizedType {
    /// Storage width in bits
    pub fn storage_bits(&self) -> u32 {
        match self {
            QuantizedType::PerTensor(params) => params.storage_bits,
            QuantizedType::PerChannel(params) => params.storage_bits,
        }
    }

    /// Zero point (shared across channels in the per-channel case)
    pub fn zero_point(&self) -> i64 {
        match self {
            QuantizedType::PerTensor(params) => params.zero_point,
            QuantizedType::PerChannel(params) => params.zero_point,
        }
    }
}

/// Element type of a tensor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ElementType {
    /// Plain integer
    Int(IntWidth),
    /// 32-bit float
    Float32,
    /// Integer storage with affine quantization metadata
    Quantized(QuantizedType),
}

impl ElementType {
    /// True for a plain integer of exactly `bits`
    pub fn is_int(&self, bits: u32) -> bool {
        matches!(self, ElementType::Int(w) if w.bits() == bits)
    }

    /// Storage width in bits for integer-backed elements
    pub fn storage_bits(&self) -> Option<u32> {
        match self {
            ElementType::Int(w) => Some(w.bits()),
            ElementType::Quantized(q) => Some(q.storage_bits()),
            ElementType::Float32 => None,
        }
    }

    /// Quantization metadata, if any
    pub fn quantized(&self) -> Option<&QuantizedType> {
        match self {
            ElementType::Quantized(q) => Some(q),
            _ => None,
        }
    }

    /// Per-tensor affine params, when this element is so quantized
    pub fn per_tensor_quantized(&self) -> Option<&AffineParams> {
        match self {
            ElementType::Quantized(QuantizedType::PerTensor(params)) => Some(params),
            _ => None,
        }
    }
}

/// Ranked tensor type: shape plus element type
///
/// Owned by the caller and never mutated here; builders clone what they
/// need into the values they return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensorType {
    /// Dimension sizes, outermost first
    pub shape: Vec<i64>,
    /// Element type
    pub element: ElementType,
}

impl TensorType {
    pub fn new(shape: Vec<i64>, element: ElementType) -> Self {
        Self { shape, element }
    }

    /// Rank-0 (scalar) tensor type
    pub fn scalar(element: ElementType) -> Self {
        Self { shape: vec![], element }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Size of dimension `i`
    pub fn dim(&self, i: usize) -> i64 {
        self.shape[i]
    }

    /// Trailing dimension, the output-channel axis for per-channel rescales
    pub fn last_dim(&self) -> i64 {
        *self.shape.last().expect("rank-0 tensor has no trailing dimension")
    }

    /// Total element count
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product::<i64>() as usize
    }
}
