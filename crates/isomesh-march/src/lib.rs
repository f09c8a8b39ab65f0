//! Index-space triangulation of an inclusion mask.
//!
//! The triangulation stage is a seam: anything implementing [`Triangulator`]
//! and honoring its contract (closed, crack-free boundary for regions that
//! stay off the volume border, one deterministic rule for ambiguous
//! configurations) can produce the index-space mesh. The default
//! implementation is boolean surface nets, which meets the contract by
//! construction on two-valued fields.
#![forbid(unsafe_code)]

mod field;
mod nets;

pub use field::{EXCLUDED_SENTINEL, INCLUDED_SENTINEL, sentinel_field};
pub use nets::SurfaceNets;

use isomesh_geom::Vec3;

/// Vertices in (possibly fractional) voxel-index units plus triangles as
/// vertex-index triples. Every triangle index is < `vertices.len()` for
/// meshes produced by a conforming [`Triangulator`].
#[derive(Clone, Debug, Default)]
pub struct IndexMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

#[derive(Debug)]
pub enum MarchError {
    /// The sentinel field does not match the advertised dimensions.
    FieldSizeMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for MarchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarchError::FieldSizeMismatch { expected, got } => {
                write!(f, "sentinel field holds {} values, dims require {}", got, expected)
            }
        }
    }
}

impl std::error::Error for MarchError {}

/// Contract for the triangulation stage.
///
/// `field` carries one value per voxel: positive for included, a non-zero
/// negative sentinel for excluded (never zero, so the inclusion boundary is
/// never ambiguous against a zero level). Implementations must be pure:
/// same field in, same mesh out.
pub trait Triangulator {
    fn triangulate(
        &self,
        dims: (usize, usize, usize),
        field: &[f32],
    ) -> Result<IndexMesh, MarchError>;
}
