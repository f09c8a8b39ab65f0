//! Per-voxel inclusion mask construction from a scalar volume.
#![forbid(unsafe_code)]

use isomesh_volume::{ScalarType, ScalarVolume};

/// Which voxels belong to the region of interest. Exactly one variant is
/// active per extraction run.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionCriterion {
    /// Include voxels whose scaled sample equals the value exactly.
    ///
    /// Exact floating equality is deliberate: values that pass through a
    /// brick scale factor may not compare equal to the "same" constant, and
    /// that can legitimately select nothing. Callers wanting robustness
    /// should use `Range` instead; this variant is never tolerance-widened.
    ExactValue(f64),
    /// Include voxels with `lo <= sample < hi` (half-open). Invariant:
    /// `lo <= hi`, enforced where the criterion is parsed.
    Range { lo: f64, hi: f64 },
    /// Delegate voxel selection to an external mask-expression evaluator.
    External(String),
}

/// Seam for the external mask-expression engine. Implementations return one
/// byte per voxel (nonzero = included) plus their own included count.
pub trait MaskEvaluator {
    fn evaluate(
        &self,
        expr: &str,
        vol: &ScalarVolume,
    ) -> Result<(Vec<u8>, usize), Box<dyn std::error::Error>>;
}

/// Per-voxel included/excluded labels with a cached included count.
#[derive(Clone, Debug)]
pub struct InclusionMask {
    labels: Vec<bool>,
    included: usize,
}

impl InclusionMask {
    pub fn from_labels(labels: Vec<bool>) -> Self {
        let included = labels.iter().filter(|b| **b).count();
        Self { labels, included }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn included_count(&self) -> usize {
        self.included
    }

    #[inline]
    pub fn is_included(&self, i: usize) -> bool {
        self.labels[i]
    }

    #[inline]
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }
}

#[derive(Debug)]
pub enum MaskError {
    /// Complex-valued samples have no total order and cannot be thresholded.
    UnsupportedScalarType,
    /// The volume's raw buffer was already purged.
    SamplesUnavailable,
    /// External evaluator returned a mask of the wrong length.
    DimensionMismatch { expected: usize, got: usize },
    /// No voxel satisfied the criterion; nothing to triangulate.
    EmptySelection,
    Evaluator(String),
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::UnsupportedScalarType => write!(f, "cannot threshold complex-valued samples"),
            MaskError::SamplesUnavailable => write!(f, "volume samples were already purged"),
            MaskError::DimensionMismatch { expected, got } => {
                write!(f, "external mask has {} entries, volume has {} voxels", got, expected)
            }
            MaskError::EmptySelection => write!(f, "no voxels matched the selection criterion"),
            MaskError::Evaluator(msg) => write!(f, "mask evaluator failed: {}", msg),
        }
    }
}

impl std::error::Error for MaskError {}

/// Build the inclusion mask for one extraction run.
///
/// Threshold criteria coerce the raw samples to a scaled f64 copy and then
/// purge the volume's raw buffer, so the run never holds both the original
/// samples and the mask. The external-evaluator path leaves the volume
/// untouched (the evaluator may read the samples itself).
pub fn build_mask(
    vol: &mut ScalarVolume,
    criterion: &SelectionCriterion,
    evaluator: &dyn MaskEvaluator,
) -> Result<InclusionMask, MaskError> {
    if vol.scalar_type() == ScalarType::Complex32 {
        return Err(MaskError::UnsupportedScalarType);
    }
    let nvox = vol.nvox();

    let mask = match criterion {
        SelectionCriterion::External(expr) => {
            let (bytes, count) = evaluator
                .evaluate(expr, vol)
                .map_err(|e| MaskError::Evaluator(e.to_string()))?;
            if bytes.len() != nvox {
                return Err(MaskError::DimensionMismatch {
                    expected: nvox,
                    got: bytes.len(),
                });
            }
            let mask = InclusionMask::from_labels(bytes.iter().map(|b| *b != 0).collect());
            if mask.included_count() != count {
                log::debug!(
                    "evaluator reported {} included voxels, mask holds {}",
                    count,
                    mask.included_count()
                );
            }
            mask
        }
        SelectionCriterion::ExactValue(v) => {
            let dvec = scaled_samples(vol)?;
            vol.purge();
            InclusionMask::from_labels(dvec.iter().map(|s| *s == *v).collect())
        }
        SelectionCriterion::Range { lo, hi } => {
            let dvec = scaled_samples(vol)?;
            vol.purge();
            InclusionMask::from_labels(dvec.iter().map(|s| *lo <= *s && *s < *hi).collect())
        }
    };

    if mask.included_count() == 0 {
        return Err(MaskError::EmptySelection);
    }
    log::debug!(
        "mask ready: {} of {} voxels included",
        mask.included_count(),
        mask.len()
    );
    Ok(mask)
}

fn scaled_samples(vol: &ScalarVolume) -> Result<Vec<f64>, MaskError> {
    if vol.is_purged() {
        return Err(MaskError::SamplesUnavailable);
    }
    // Complex was rejected up front, so coercion can only fail on a purge.
    vol.coerce_f64().ok_or(MaskError::SamplesUnavailable)
}
