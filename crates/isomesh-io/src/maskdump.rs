//! Diagnostic mask tables: plain-text, two columns per row.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use isomesh_mask::InclusionMask;

/// Write one row per included voxel: voxel index, label (always 1).
pub fn write_included_mask_table(
    mask: &InclusionMask,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "#Col. 0: voxel index")?;
    writeln!(w, "#Col. 1: value in mask")?;
    for (i, included) in mask.labels().iter().enumerate() {
        if *included {
            writeln!(w, "{} 1", i)?;
        }
    }
    w.flush()?;
    log::debug!(
        "wrote {} included voxels to {}",
        mask.included_count(),
        path.display()
    );
    Ok(())
}

/// Write one row per voxel: voxel index, label (1 included, 0 excluded).
pub fn write_full_mask_table(
    mask: &InclusionMask,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "#Col. 0: voxel index")?;
    writeln!(w, "#Col. 1: value in mask")?;
    for (i, included) in mask.labels().iter().enumerate() {
        writeln!(w, "{} {}", i, if *included { 1 } else { 0 })?;
    }
    w.flush()?;
    log::debug!("wrote {} voxel labels to {}", mask.len(), path.display());
    Ok(())
}
