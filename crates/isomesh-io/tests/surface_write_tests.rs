use std::fs;
use std::path::PathBuf;

use isomesh_extract::{SurfaceMesh, assemble};
use isomesh_geom::Vec3;
use isomesh_io::{
    SurfaceFormat, surface_paths, write_full_mask_table, write_included_mask_table, write_surface,
};
use isomesh_mask::InclusionMask;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("isomesh-out-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn tetra() -> SurfaceMesh {
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let tris = vec![[0u32, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
    assemble(verts, tris).unwrap()
}

#[test]
fn format_names_round_trip() {
    for f in [SurfaceFormat::Ply, SurfaceFormat::Obj, SurfaceFormat::Vec] {
        assert_eq!(SurfaceFormat::from_name(f.name()), Some(f));
    }
    assert_eq!(SurfaceFormat::from_name("stl"), None);
}

#[test]
fn ply_has_matching_header_and_body() {
    let dir = scratch_dir("ply");
    let mesh = tetra();
    let paths = write_surface(&mesh, &dir.join("surf"), SurfaceFormat::Ply).unwrap();
    assert_eq!(paths, surface_paths(&dir.join("surf"), SurfaceFormat::Ply));

    let text = fs::read_to_string(&paths[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "ply");
    assert_eq!(lines[1], "format ascii 1.0");
    assert!(text.contains("element vertex 4"));
    assert!(text.contains("element face 4"));
    let body_start = lines.iter().position(|l| *l == "end_header").unwrap() + 1;
    assert_eq!(lines.len() - body_start, 4 + 4);
    assert_eq!(lines[body_start], "0 0 0");
    // Face rows carry the list-length prefix.
    assert_eq!(lines[body_start + 4], "3 0 2 1");
}

#[test]
fn obj_uses_one_based_indices() {
    let dir = scratch_dir("obj");
    let paths = write_surface(&tetra(), &dir.join("surf"), SurfaceFormat::Obj).unwrap();
    let text = fs::read_to_string(&paths[0]).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 4);
    assert!(text.contains("f 1 3 2"));
    assert!(!text.contains("f 0"));
}

#[test]
fn vec_format_writes_coord_and_topo_tables() {
    let dir = scratch_dir("vec");
    let paths = write_surface(&tetra(), &dir.join("surf"), SurfaceFormat::Vec).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].to_string_lossy().ends_with(".coord.1D"));
    assert!(paths[1].to_string_lossy().ends_with(".topo.1D"));

    let coord = fs::read_to_string(&paths[0]).unwrap();
    let topo = fs::read_to_string(&paths[1]).unwrap();
    assert_eq!(coord.lines().filter(|l| !l.starts_with('#')).count(), 4);
    assert_eq!(topo.lines().filter(|l| !l.starts_with('#')).count(), 4);
    assert!(topo.contains("0 2 1"));
}

#[test]
fn included_table_lists_only_included_voxels() {
    let dir = scratch_dir("inmask");
    let mask = InclusionMask::from_labels(vec![false, true, false, true]);
    let path = dir.join("inmaskvec.1D");
    write_included_mask_table(&mask, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows, vec!["1 1", "3 1"]);
}

#[test]
fn full_table_lists_every_voxel() {
    let dir = scratch_dir("maskvec");
    let mask = InclusionMask::from_labels(vec![false, true, false, true]);
    let path = dir.join("maskvec.1D");
    write_full_mask_table(&mask, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows, vec!["0 0", "1 1", "2 0", "3 1"]);
}
