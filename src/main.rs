//! Command-line isosurface extractor: volume in, triangle mesh out.

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use isomesh_extract::surface_from_mask;
use isomesh_io::{
    SurfaceFormat, load_volume, surface_paths, write_full_mask_table, write_included_mask_table,
    write_surface,
};
use isomesh_march::SurfaceNets;
use isomesh_mask::{SelectionCriterion, build_mask};

mod cmask;

use cmask::CmpEvaluator;

#[derive(Parser, Debug)]
#[command(name = "isomesh")]
#[command(about = "Extract an isosurface mesh from a scalar volume", long_about = None)]
#[command(group(
    ArgGroup::new("criterion")
        .required(true)
        .args(["isoval", "isorange", "isocmask"])
))]
struct Cli {
    /// Volume header file (.vhdr)
    #[arg(short, long)]
    input: PathBuf,

    /// Select voxels whose scaled value equals V exactly
    #[arg(long, value_name = "V")]
    isoval: Option<f64>,

    /// Select voxels with V0 <= value < V1
    #[arg(long, num_args = 2, value_names = ["V0", "V1"])]
    isorange: Option<Vec<f64>>,

    /// Select voxels where a comparison over the value holds, e.g. 'a > 0.5'
    #[arg(long, value_name = "EXPR")]
    isocmask: Option<String>,

    /// Output path prefix
    #[arg(short, long, default_value = "isosurface_out")]
    output: PathBuf,

    /// Output format
    #[arg(long, default_value = "ply", value_parser = ["ply", "obj", "vec"])]
    format: String,

    /// Debug level; 2 dumps included voxels (inmaskvec.1D), 3 dumps every
    /// voxel (maskvec.1D)
    #[arg(long, default_value_t = 0)]
    debug: u8,
}

fn criterion_from_args(cli: &Cli) -> Result<SelectionCriterion, Box<dyn Error>> {
    if let Some(v) = cli.isoval {
        return Ok(SelectionCriterion::ExactValue(v));
    }
    if let Some(range) = &cli.isorange {
        let (lo, hi) = (range[0], range[1]);
        if lo > hi {
            return Err(format!("--isorange bounds out of order: {} > {}", lo, hi).into());
        }
        return Ok(SelectionCriterion::Range { lo, hi });
    }
    if let Some(expr) = &cli.isocmask {
        return Ok(SelectionCriterion::External(expr.clone()));
    }
    // clap's group guarantees one of the three was given.
    unreachable!("argument group enforces a selection criterion")
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let format = SurfaceFormat::from_name(&cli.format)
        .ok_or_else(|| format!("unknown output format {:?}", cli.format))?;
    let criterion = criterion_from_args(&cli)?;

    for path in surface_paths(&cli.output, format) {
        if path.exists() {
            return Err(format!(
                "output file {} already exists, refusing to overwrite",
                path.display()
            )
            .into());
        }
    }

    let mut vol = load_volume(&cli.input)?;
    let mask = build_mask(&mut vol, &criterion, &CmpEvaluator)?;
    log::info!(
        "mask: {} of {} voxels included",
        mask.included_count(),
        mask.len()
    );

    if cli.debug >= 2 {
        write_included_mask_table(&mask, "inmaskvec.1D")?;
    }
    if cli.debug >= 3 {
        write_full_mask_table(&mask, "maskvec.1D")?;
    }

    let mesh = surface_from_mask(&vol, &mask, &SurfaceNets)?;
    let paths = write_surface(&mesh, &cli.output, format)?;
    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("isomesh: {}", e);
        std::process::exit(1);
    }
}
