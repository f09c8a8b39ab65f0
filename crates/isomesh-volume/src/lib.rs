//! Scalar volume model: dims, spacing, origin, axis orientation, typed samples.
#![forbid(unsafe_code)]

mod coords;
mod orient;
mod samples;

pub use coords::{index_to_world, world_to_index};
pub use orient::AxisOrientation;
pub use samples::{SampleBuf, ScalarType};

/// Errors raised while constructing a volume from raw parts.
#[derive(Debug)]
pub enum VolumeError {
    ZeroDimension,
    ZeroSpacing,
    /// The three orientation codes must address three distinct world axes.
    OrientationNotBijective,
    SampleCountMismatch {
        expected: usize,
        got: usize,
    },
}

impl std::fmt::Display for VolumeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeError::ZeroDimension => write!(f, "volume has a zero-sized axis"),
            VolumeError::ZeroSpacing => write!(f, "volume has a zero spacing on some axis"),
            VolumeError::OrientationNotBijective => {
                write!(f, "orientation codes do not cover three distinct world axes")
            }
            VolumeError::SampleCountMismatch { expected, got } => {
                write!(f, "sample buffer holds {} values, expected {}", got, expected)
            }
        }
    }
}

impl std::error::Error for VolumeError {}

/// A regularly sampled 3D scalar grid plus the metadata needed to place it
/// in world space.
///
/// The sample buffer is optional so that it can be purged once a downstream
/// stage no longer needs raw values; all metadata survives a purge.
#[derive(Clone, Debug)]
pub struct ScalarVolume {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Voxel-to-voxel step per volume axis, in world units.
    pub spacing: [f64; 3],
    /// World coordinate of voxel (0, 0, 0) along each volume axis.
    pub origin: [f64; 3],
    pub orient: [AxisOrientation; 3],
    /// Brick scale factor; 0.0 means "stored values are final".
    pub scale: f64,
    scalar_type: ScalarType,
    samples: Option<SampleBuf>,
}

impl ScalarVolume {
    pub fn new(
        dims: (usize, usize, usize),
        spacing: [f64; 3],
        origin: [f64; 3],
        orient: [AxisOrientation; 3],
        scale: f64,
        samples: SampleBuf,
    ) -> Result<Self, VolumeError> {
        let (nx, ny, nz) = dims;
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(VolumeError::ZeroDimension);
        }
        if spacing.iter().any(|d| *d == 0.0) {
            return Err(VolumeError::ZeroSpacing);
        }
        let mut seen = [false; 3];
        for o in orient {
            seen[o.world_axis()] = true;
        }
        if seen != [true, true, true] {
            return Err(VolumeError::OrientationNotBijective);
        }
        let expected = nx * ny * nz;
        let got = samples.len();
        if got != expected {
            return Err(VolumeError::SampleCountMismatch { expected, got });
        }
        Ok(Self {
            nx,
            ny,
            nz,
            spacing,
            origin,
            orient,
            scale,
            scalar_type: samples.scalar_type(),
            samples: Some(samples),
        })
    }

    #[inline]
    pub fn nvox(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.nx * (y + self.ny * z)
    }

    /// Declared sample type; known even after a purge.
    #[inline]
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    #[inline]
    pub fn samples(&self) -> Option<&SampleBuf> {
        self.samples.as_ref()
    }

    #[inline]
    pub fn is_purged(&self) -> bool {
        self.samples.is_none()
    }

    /// Coerce the raw samples to f64, applying the brick scale factor.
    ///
    /// Returns `None` if the buffer was purged or the samples are
    /// complex-valued (no total order, cannot be thresholded).
    pub fn coerce_f64(&self) -> Option<Vec<f64>> {
        self.samples.as_ref()?.coerce_f64(self.scale)
    }

    /// Release the raw sample buffer. Metadata is retained so coordinate
    /// mapping keeps working after the purge.
    pub fn purge(&mut self) {
        if let Some(buf) = self.samples.take() {
            log::debug!(
                "purged {} raw samples ({} bytes)",
                buf.len(),
                buf.len() * buf.scalar_type().elem_size()
            );
        }
    }
}
