//! Index-space to world-space vertex mapping.
//!
//! The forward transform is two steps: scale-and-offset each index
//! coordinate along its own volume axis, then permute and sign-flip the
//! three raw coordinates into the canonical world convention according to
//! the orientation codes. The inverse runs the same steps backwards, so a
//! round trip reproduces the input up to floating rounding.

use isomesh_geom::Vec3;

use crate::ScalarVolume;

/// Map a (possibly fractional) voxel-index position into world space.
pub fn index_to_world(vol: &ScalarVolume, v: Vec3) -> Vec3 {
    let raw = [
        vol.origin[0] + v.x * vol.spacing[0],
        vol.origin[1] + v.y * vol.spacing[1],
        vol.origin[2] + v.z * vol.spacing[2],
    ];
    let mut world = [0.0f64; 3];
    for (axis, o) in vol.orient.iter().enumerate() {
        let c = raw[axis];
        world[o.world_axis()] = if o.flipped() { -c } else { c };
    }
    Vec3::new(world[0], world[1], world[2])
}

/// Exact inverse of [`index_to_world`].
pub fn world_to_index(vol: &ScalarVolume, w: Vec3) -> Vec3 {
    let world = [w.x, w.y, w.z];
    let mut idx = [0.0f64; 3];
    for (axis, o) in vol.orient.iter().enumerate() {
        let c = world[o.world_axis()];
        let raw = if o.flipped() { -c } else { c };
        idx[axis] = (raw - vol.origin[axis]) / vol.spacing[axis];
    }
    Vec3::new(idx[0], idx[1], idx[2])
}
