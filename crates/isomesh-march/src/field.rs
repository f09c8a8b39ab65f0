//! Mask to sentinel-field conversion.

use isomesh_mask::InclusionMask;

/// Field value for included voxels.
pub const INCLUDED_SENTINEL: f32 = 1.0;
/// Field value for excluded voxels. Non-zero so the inclusion boundary can
/// never coincide with a zero level in the field.
pub const EXCLUDED_SENTINEL: f32 = -1.0;

/// Expand an inclusion mask into the dense two-valued field the
/// triangulation stage consumes.
pub fn sentinel_field(mask: &InclusionMask) -> Vec<f32> {
    mask.labels()
        .iter()
        .map(|b| if *b { INCLUDED_SENTINEL } else { EXCLUDED_SENTINEL })
        .collect()
}
