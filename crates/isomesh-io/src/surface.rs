//! Surface writers: ASCII PLY, Wavefront OBJ, and a two-file coord/topo
//! table format.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use isomesh_extract::SurfaceMesh;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceFormat {
    Ply,
    Obj,
    /// Two plain-text tables: `<prefix>.coord.1D` (one vertex per row) and
    /// `<prefix>.topo.1D` (one triangle per row).
    Vec,
}

impl SurfaceFormat {
    pub fn name(self) -> &'static str {
        match self {
            SurfaceFormat::Ply => "ply",
            SurfaceFormat::Obj => "obj",
            SurfaceFormat::Vec => "vec",
        }
    }

    pub fn from_name(name: &str) -> Option<SurfaceFormat> {
        Some(match name {
            "ply" => SurfaceFormat::Ply,
            "obj" => SurfaceFormat::Obj,
            "vec" => SurfaceFormat::Vec,
            _ => return None,
        })
    }
}

/// Paths `write_surface` would create for this prefix and format. Callers
/// check these for collisions before writing.
pub fn surface_paths(prefix: &Path, format: SurfaceFormat) -> Vec<PathBuf> {
    let with_ext = |ext: &str| {
        let mut s = prefix.as_os_str().to_os_string();
        s.push(ext);
        PathBuf::from(s)
    };
    match format {
        SurfaceFormat::Ply => vec![with_ext(".ply")],
        SurfaceFormat::Obj => vec![with_ext(".obj")],
        SurfaceFormat::Vec => vec![with_ext(".coord.1D"), with_ext(".topo.1D")],
    }
}

/// Write `mesh` under `prefix` in the given format; returns the paths
/// created.
pub fn write_surface(
    mesh: &SurfaceMesh,
    prefix: &Path,
    format: SurfaceFormat,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let paths = surface_paths(prefix, format);
    match format {
        SurfaceFormat::Ply => write_ply(mesh, &paths[0])?,
        SurfaceFormat::Obj => write_obj(mesh, &paths[0])?,
        SurfaceFormat::Vec => write_vec(mesh, &paths[0], &paths[1])?,
    }
    log::info!(
        "wrote {} vertices, {} triangles as {} ({})",
        mesh.vertex_count(),
        mesh.triangle_count(),
        format.name(),
        paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(paths)
}

fn write_ply(mesh: &SurfaceMesh, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "ply")?;
    writeln!(w, "format ascii 1.0")?;
    writeln!(w, "element vertex {}", mesh.vertex_count())?;
    writeln!(w, "property float x")?;
    writeln!(w, "property float y")?;
    writeln!(w, "property float z")?;
    writeln!(w, "element face {}", mesh.triangle_count())?;
    writeln!(w, "property list uchar int vertex_indices")?;
    writeln!(w, "end_header")?;
    for v in &mesh.vertices {
        writeln!(w, "{} {} {}", v.x, v.y, v.z)?;
    }
    for t in &mesh.triangles {
        writeln!(w, "3 {} {} {}", t[0], t[1], t[2])?;
    }
    w.flush()?;
    Ok(())
}

fn write_obj(mesh: &SurfaceMesh, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut w = BufWriter::new(File::create(path)?);
    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    // OBJ indices are 1-based.
    for t in &mesh.triangles {
        writeln!(w, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
    }
    w.flush()?;
    Ok(())
}

fn write_vec(mesh: &SurfaceMesh, coord: &Path, topo: &Path) -> Result<(), Box<dyn Error>> {
    let mut w = BufWriter::new(File::create(coord)?);
    writeln!(w, "#Col. 0-2: vertex x y z")?;
    for v in &mesh.vertices {
        writeln!(w, "{} {} {}", v.x, v.y, v.z)?;
    }
    w.flush()?;

    let mut w = BufWriter::new(File::create(topo)?);
    writeln!(w, "#Col. 0-2: triangle vertex indices")?;
    for t in &mesh.triangles {
        writeln!(w, "{} {} {}", t[0], t[1], t[2])?;
    }
    w.flush()?;
    Ok(())
}
