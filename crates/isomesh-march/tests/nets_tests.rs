use std::collections::HashMap;

use isomesh_march::{
    EXCLUDED_SENTINEL, INCLUDED_SENTINEL, IndexMesh, MarchError, SurfaceNets, Triangulator,
    sentinel_field,
};
use isomesh_mask::InclusionMask;

fn field_from(labels: Vec<bool>) -> Vec<f32> {
    sentinel_field(&InclusionMask::from_labels(labels))
}

/// Count how many triangles use each undirected vertex-pair edge.
fn edge_counts(mesh: &IndexMesh) -> HashMap<(u32, u32), usize> {
    let mut counts = HashMap::new();
    for t in &mesh.triangles {
        for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
            let key = (a.min(b), a.max(b));
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn assert_closed_manifold(mesh: &IndexMesh) {
    assert!(!mesh.triangles.is_empty());
    for (edge, count) in edge_counts(mesh) {
        assert_eq!(count, 2, "edge {:?} bordered by {} triangles", edge, count);
    }
}

#[test]
fn rejects_wrong_field_size() {
    let r = SurfaceNets.triangulate((4, 4, 4), &[INCLUDED_SENTINEL; 10]);
    assert!(matches!(
        r,
        Err(MarchError::FieldSizeMismatch {
            expected: 64,
            got: 10
        })
    ));
}

#[test]
fn uniform_field_yields_empty_mesh() {
    let all_in = vec![INCLUDED_SENTINEL; 64];
    let mesh = SurfaceNets.triangulate((4, 4, 4), &all_in).unwrap();
    assert!(mesh.vertices.is_empty());
    assert!(mesh.triangles.is_empty());

    let all_out = vec![EXCLUDED_SENTINEL; 64];
    let mesh = SurfaceNets.triangulate((4, 4, 4), &all_out).unwrap();
    assert!(mesh.triangles.is_empty());
}

#[test]
fn interior_block_produces_closed_surface() {
    // 4x4x4 grid, only the inner 2x2x2 voxels included, borders excluded.
    let mut labels = vec![false; 64];
    for z in 1..3 {
        for y in 1..3 {
            for x in 1..3 {
                labels[x + 4 * (y + 4 * z)] = true;
            }
        }
    }
    let mesh = SurfaceNets
        .triangulate((4, 4, 4), &field_from(labels))
        .unwrap();

    // 8 included corners, 3 crossing lattice edges each -> 24 quads.
    assert_eq!(mesh.triangles.len(), 48);
    assert_closed_manifold(&mesh);

    for t in &mesh.triangles {
        for i in t {
            assert!((*i as usize) < mesh.vertices.len());
        }
    }
    for v in &mesh.vertices {
        assert!(v.x >= 0.0 && v.x <= 3.0);
        assert!(v.y >= 0.0 && v.y <= 3.0);
        assert!(v.z >= 0.0 && v.z <= 3.0);
    }
}

#[test]
fn single_interior_voxel_is_boxed_in() {
    let mut labels = vec![false; 27];
    labels[1 + 3 * (1 + 3)] = true; // (1,1,1)
    let mesh = SurfaceNets
        .triangulate((3, 3, 3), &field_from(labels))
        .unwrap();
    // All 8 cells touch the included corner: 8 vertices, 6 quads.
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(mesh.triangles.len(), 12);
    assert_closed_manifold(&mesh);
}

#[test]
fn vertices_are_fractional_interpolations() {
    let mut labels = vec![false; 27];
    labels[1 + 3 * (1 + 3)] = true;
    let mesh = SurfaceNets
        .triangulate((3, 3, 3), &field_from(labels))
        .unwrap();
    // Surface vertices sit between lattice points, not on them.
    assert!(
        mesh.vertices
            .iter()
            .any(|v| v.x.fract() != 0.0 || v.y.fract() != 0.0 || v.z.fract() != 0.0)
    );
}

#[test]
fn border_touching_region_is_clipped_open() {
    // One included voxel in the corner of a 2x2x2 grid: the only cell gets
    // a vertex, but every crossing edge lacks in-range neighbor cells, so
    // no quad can be stitched.
    let mut labels = vec![false; 8];
    labels[0] = true;
    let mesh = SurfaceNets
        .triangulate((2, 2, 2), &field_from(labels))
        .unwrap();
    assert_eq!(mesh.vertices.len(), 1);
    assert!(mesh.triangles.is_empty());
}

#[test]
fn triangulation_is_deterministic() {
    let mut labels = vec![false; 125];
    for z in 1..4 {
        for y in 1..4 {
            for x in 1..4 {
                if (x + y + z) % 2 == 0 {
                    labels[x + 5 * (y + 5 * z)] = true;
                }
            }
        }
    }
    let field = field_from(labels);
    let a = SurfaceNets.triangulate((5, 5, 5), &field).unwrap();
    let b = SurfaceNets.triangulate((5, 5, 5), &field).unwrap();
    assert_eq!(a.vertices, b.vertices);
    assert_eq!(a.triangles, b.triangles);
}

#[test]
fn sentinel_field_maps_labels() {
    let mask = InclusionMask::from_labels(vec![true, false, true]);
    let f = sentinel_field(&mask);
    assert_eq!(f, vec![INCLUDED_SENTINEL, EXCLUDED_SENTINEL, INCLUDED_SENTINEL]);
    assert!(f.iter().all(|v| *v != 0.0));
}
