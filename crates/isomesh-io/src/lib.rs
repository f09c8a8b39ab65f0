//! On-disk formats: volume headers and bricks in, surfaces and mask tables out.
#![forbid(unsafe_code)]

mod maskdump;
mod surface;
mod volume;

pub use maskdump::{write_full_mask_table, write_included_mask_table};
pub use surface::{SurfaceFormat, surface_paths, write_surface};
pub use volume::{InputError, VolumeHeader, load_volume};
