//! Boolean surface nets over the voxel corner lattice.
//!
//! Two-valued fields give the classic tri-table mesher ambiguous cell
//! configurations with no scalar gradient to break ties, which can open
//! cracks between neighboring cells. Surface nets sidesteps that: every
//! mixed cell gets exactly one vertex (the mean of its crossing-edge
//! midpoints), and every lattice edge whose endpoints disagree gets one
//! quad stitched between the four cells around it. Both rules are local,
//! deterministic, and agree across cell boundaries, so adjacent cells can
//! never disagree about the surface.

use std::time::Instant;

use hashbrown::HashMap;
use isomesh_geom::Vec3;

use crate::{IndexMesh, MarchError, Triangulator};

/// Offsets of a cell's 8 corners, low corner first.
const CORNER_OFF: [(i64, i64, i64); 8] = [
    (0, 0, 0),
    (1, 0, 0),
    (1, 1, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (1, 1, 1),
    (0, 1, 1),
];

/// Cell edges as corner-index pairs.
const CELL_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Default [`Triangulator`]: boolean surface nets in voxel-index space.
///
/// No padding layer is added around the volume, so a region that touches
/// the volume border produces a surface clipped open at that border; only
/// border-free regions come out closed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceNets;

impl Triangulator for SurfaceNets {
    fn triangulate(
        &self,
        dims: (usize, usize, usize),
        field: &[f32],
    ) -> Result<IndexMesh, MarchError> {
        let (nx, ny, nz) = dims;
        let expected = nx * ny * nz;
        if field.len() != expected {
            return Err(MarchError::FieldSizeMismatch {
                expected,
                got: field.len(),
            });
        }
        let t0 = Instant::now();

        let inside = |x: i64, y: i64, z: i64| -> bool {
            let i = x as usize + nx * (y as usize + ny * z as usize);
            field[i] > 0.0
        };

        // One vertex per mixed cell. The map is keyed by cell coordinates so
        // memory tracks the surface, not the whole grid.
        let mut cell_vertex: HashMap<(i64, i64, i64), u32> = HashMap::new();
        let mut vertices: Vec<Vec3> = Vec::new();

        let cx_max = nx as i64 - 1;
        let cy_max = ny as i64 - 1;
        let cz_max = nz as i64 - 1;

        for cz in 0..cz_max {
            for cy in 0..cy_max {
                for cx in 0..cx_max {
                    let mut corner_in = [false; 8];
                    let mut all_in = true;
                    let mut all_out = true;
                    for (i, (dx, dy, dz)) in CORNER_OFF.iter().enumerate() {
                        let b = inside(cx + dx, cy + dy, cz + dz);
                        corner_in[i] = b;
                        all_in &= b;
                        all_out &= !b;
                    }
                    if all_in || all_out {
                        continue;
                    }

                    // Mean of crossing-edge midpoints. On a two-valued field
                    // the midpoint is exactly the interpolated crossing.
                    let mut acc = Vec3::ZERO;
                    let mut n = 0u32;
                    for (a, b) in CELL_EDGES {
                        if corner_in[a] == corner_in[b] {
                            continue;
                        }
                        let (adx, ady, adz) = CORNER_OFF[a];
                        let (bdx, bdy, bdz) = CORNER_OFF[b];
                        acc += Vec3::new(
                            (cx + adx) as f64 + (cx + bdx) as f64,
                            (cy + ady) as f64 + (cy + bdy) as f64,
                            (cz + adz) as f64 + (cz + bdz) as f64,
                        ) * 0.5;
                        n += 1;
                    }
                    // Mixed corners imply at least one crossing edge.
                    debug_assert!(n > 0);

                    let idx = vertices.len() as u32;
                    vertices.push(acc / f64::from(n));
                    cell_vertex.insert((cx, cy, cz), idx);
                }
            }
        }

        let mut triangles: Vec<[u32; 3]> = Vec::new();
        let cell = |x: i64, y: i64, z: i64| -> Option<u32> {
            if x < 0 || y < 0 || z < 0 || x >= cx_max || y >= cy_max || z >= cz_max {
                return None;
            }
            cell_vertex.get(&(x, y, z)).copied()
        };
        let mut quad = |a: u32, b: u32, c: u32, d: u32| {
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        };

        // Stitch one quad around every crossing lattice edge. Winding is
        // fixed by the edge axis and the inside->outside direction along it,
        // so triangles come out facing away from the included region.
        for z in 0..nz as i64 {
            for y in 0..ny as i64 {
                for x in 0..cx_max {
                    let a = inside(x, y, z);
                    if a == inside(x + 1, y, z) {
                        continue;
                    }
                    let (Some(i00), Some(i10), Some(i11), Some(i01)) = (
                        cell(x, y - 1, z - 1),
                        cell(x, y, z - 1),
                        cell(x, y, z),
                        cell(x, y - 1, z),
                    ) else {
                        continue;
                    };
                    if a {
                        quad(i00, i01, i11, i10);
                    } else {
                        quad(i00, i10, i11, i01);
                    }
                }
            }
        }
        for z in 0..nz as i64 {
            for y in 0..cy_max {
                for x in 0..nx as i64 {
                    let a = inside(x, y, z);
                    if a == inside(x, y + 1, z) {
                        continue;
                    }
                    let (Some(i00), Some(i10), Some(i11), Some(i01)) = (
                        cell(x - 1, y, z - 1),
                        cell(x, y, z - 1),
                        cell(x, y, z),
                        cell(x - 1, y, z),
                    ) else {
                        continue;
                    };
                    if a {
                        quad(i00, i10, i11, i01);
                    } else {
                        quad(i00, i01, i11, i10);
                    }
                }
            }
        }
        for z in 0..cz_max {
            for y in 0..ny as i64 {
                for x in 0..nx as i64 {
                    let a = inside(x, y, z);
                    if a == inside(x, y, z + 1) {
                        continue;
                    }
                    let (Some(i00), Some(i10), Some(i11), Some(i01)) = (
                        cell(x - 1, y - 1, z),
                        cell(x, y - 1, z),
                        cell(x, y, z),
                        cell(x - 1, y, z),
                    ) else {
                        continue;
                    };
                    if a {
                        quad(i00, i01, i11, i10);
                    } else {
                        quad(i00, i10, i11, i01);
                    }
                }
            }
        }

        let ms = t0.elapsed().as_millis();
        log::info!(
            target: "perf",
            "ms={} surface_nets dims=({}, {}, {}) verts={} tris={}",
            ms,
            nx,
            ny,
            nz,
            vertices.len(),
            triangles.len()
        );

        Ok(IndexMesh {
            vertices,
            triangles,
        })
    }
}
