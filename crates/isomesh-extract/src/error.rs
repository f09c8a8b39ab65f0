//! Pipeline error taxonomy. Every variant aborts the whole extraction.

use isomesh_march::MarchError;
use isomesh_mask::MaskError;

#[derive(Debug)]
pub enum ExtractError {
    /// Complex-valued sample type; cannot be thresholded.
    UnsupportedScalarType,
    /// The volume's raw samples were purged before masking.
    SamplesUnavailable,
    /// A per-voxel array (external mask or inclusion mask) does not match
    /// the volume's voxel count.
    DimensionMismatch { expected: usize, got: usize },
    /// No voxel satisfied the selection criterion.
    EmptySelection,
    /// External mask-expression evaluator failed.
    Evaluator(String),
    /// Triangulation stage failed (malformed field or internal failure).
    Triangulation(String),
    /// Assembler found a triangle referencing a missing vertex.
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        len: usize,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::UnsupportedScalarType => {
                write!(f, "cannot threshold complex-valued samples")
            }
            ExtractError::SamplesUnavailable => {
                write!(f, "volume samples were already purged")
            }
            ExtractError::DimensionMismatch { expected, got } => {
                write!(f, "mask has {} entries, volume has {} voxels", got, expected)
            }
            ExtractError::EmptySelection => {
                write!(f, "no voxels matched the selection criterion; nothing to do")
            }
            ExtractError::Evaluator(msg) => write!(f, "mask evaluator failed: {}", msg),
            ExtractError::Triangulation(msg) => write!(f, "triangulation failed: {}", msg),
            ExtractError::IndexOutOfRange {
                triangle,
                index,
                len,
            } => write!(
                f,
                "triangle {} references vertex {} but only {} vertices exist",
                triangle, index, len
            ),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<MaskError> for ExtractError {
    fn from(e: MaskError) -> Self {
        match e {
            MaskError::UnsupportedScalarType => ExtractError::UnsupportedScalarType,
            MaskError::SamplesUnavailable => ExtractError::SamplesUnavailable,
            MaskError::DimensionMismatch { expected, got } => {
                ExtractError::DimensionMismatch { expected, got }
            }
            MaskError::EmptySelection => ExtractError::EmptySelection,
            MaskError::Evaluator(msg) => ExtractError::Evaluator(msg),
        }
    }
}

impl From<MarchError> for ExtractError {
    fn from(e: MarchError) -> Self {
        ExtractError::Triangulation(e.to_string())
    }
}
