//! Isosurface extraction pipeline: mask, triangulate, map, assemble.
//!
//! One extraction run is a single atomic batch. Each stage completes fully
//! before the next begins, any failure aborts the whole run, and no partial
//! mesh ever escapes. The run holds no state between invocations.
#![forbid(unsafe_code)]

mod error;

pub use error::ExtractError;

use isomesh_geom::{Aabb, Vec3};
use isomesh_march::{Triangulator, sentinel_field};
use isomesh_mask::{InclusionMask, MaskEvaluator, SelectionCriterion, build_mask};
use isomesh_volume::{ScalarVolume, index_to_world};

/// Final surface: world-space vertices plus triangles as vertex-index
/// triples. The mesh exclusively owns its buffers.
#[derive(Clone, Debug)]
pub struct SurfaceMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Validate triangle indices and move the buffers into a [`SurfaceMesh`].
///
/// No vertex deduplication, no normals, no repair; downstream consumers
/// own those concerns.
pub fn assemble(
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
) -> Result<SurfaceMesh, ExtractError> {
    let len = vertices.len();
    for (t, tri) in triangles.iter().enumerate() {
        for &index in tri {
            if index as usize >= len {
                return Err(ExtractError::IndexOutOfRange {
                    triangle: t,
                    index,
                    len,
                });
            }
        }
    }
    Ok(SurfaceMesh {
        vertices,
        triangles,
    })
}

/// Triangulate an already-built mask and express the surface in world
/// coordinates.
///
/// Exposed separately from [`extract_isosurface`] so callers can inspect or
/// dump the mask between the two stages; the stage order and all-or-nothing
/// behavior are identical.
pub fn surface_from_mask(
    vol: &ScalarVolume,
    mask: &InclusionMask,
    triangulator: &dyn Triangulator,
) -> Result<SurfaceMesh, ExtractError> {
    let nvox = vol.nvox();
    if mask.len() != nvox {
        return Err(ExtractError::DimensionMismatch {
            expected: nvox,
            got: mask.len(),
        });
    }

    let field = sentinel_field(mask);
    let index_mesh = triangulator.triangulate(vol.dims(), &field)?;
    drop(field);

    // Independent per-vertex transform; the triangle list carries over.
    let world: Vec<Vec3> = index_mesh
        .vertices
        .iter()
        .map(|v| index_to_world(vol, *v))
        .collect();

    if let Some(bb) = Aabb::from_points(&world) {
        log::debug!(
            "surface bounds: ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
            bb.min.x,
            bb.min.y,
            bb.min.z,
            bb.max.x,
            bb.max.y,
            bb.max.z
        );
    }

    assemble(world, index_mesh.triangles)
}

/// Run the whole pipeline: build the inclusion mask, triangulate it, map
/// vertices to world space, assemble the surface.
pub fn extract_isosurface(
    vol: &mut ScalarVolume,
    criterion: &SelectionCriterion,
    evaluator: &dyn MaskEvaluator,
    triangulator: &dyn Triangulator,
) -> Result<SurfaceMesh, ExtractError> {
    let mask = build_mask(vol, criterion, evaluator)?;
    let mesh = surface_from_mask(vol, &mask, triangulator)?;
    log::info!(
        "extracted surface: {} vertices, {} triangles from {} included voxels",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mask.included_count()
    );
    Ok(mesh)
}
