//! Volume loading: a TOML header (`.vhdr`) describing the grid plus a raw
//! little-endian brick file (`.vbrk`) holding the samples.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use isomesh_volume::{AxisOrientation, SampleBuf, ScalarType, ScalarVolume};

/// Header file contents, e.g.:
///
/// ```toml
/// dims = [64, 64, 40]
/// spacing = [1.0, 1.0, 1.5]
/// origin = [-32.0, -32.0, -30.0]
/// orient = ["R2L", "A2P", "I2S"]
/// datatype = "i16"
/// scale = 0.01
/// brick = "anat.vbrk"
/// ```
///
/// `scale` defaults to 0.0 ("stored values are final"); `brick` is resolved
/// relative to the header's directory.
#[derive(Debug, Deserialize)]
pub struct VolumeHeader {
    pub dims: [usize; 3],
    pub spacing: [f64; 3],
    pub origin: [f64; 3],
    pub orient: [String; 3],
    pub datatype: String,
    #[serde(default)]
    pub scale: f64,
    pub brick: String,
}

#[derive(Debug)]
pub enum InputError {
    UnknownOrientation(String),
    UnknownScalarType(String),
    /// Brick byte length disagrees with `nvox * elem_size`.
    BrickSizeMismatch {
        expected: usize,
        got: usize,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::UnknownOrientation(code) => {
                write!(f, "unknown orientation code {:?}", code)
            }
            InputError::UnknownScalarType(name) => {
                write!(f, "unknown datatype {:?}", name)
            }
            InputError::BrickSizeMismatch { expected, got } => {
                write!(f, "brick holds {} bytes, header implies {}", got, expected)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Read a header file and its brick into a [`ScalarVolume`].
pub fn load_volume(header_path: impl AsRef<Path>) -> Result<ScalarVolume, Box<dyn Error>> {
    let header_path = header_path.as_ref();
    let s = fs::read_to_string(header_path)?;
    let hdr: VolumeHeader = toml::from_str(&s)?;

    let mut orient = [AxisOrientation::RightToLeft; 3];
    for (axis, code) in hdr.orient.iter().enumerate() {
        orient[axis] = AxisOrientation::from_code(code)
            .ok_or_else(|| InputError::UnknownOrientation(code.clone()))?;
    }
    let scalar_type = ScalarType::from_name(&hdr.datatype)
        .ok_or_else(|| InputError::UnknownScalarType(hdr.datatype.clone()))?;

    let brick_path = match header_path.parent() {
        Some(dir) => dir.join(&hdr.brick),
        None => Path::new(&hdr.brick).to_path_buf(),
    };
    let bytes = fs::read(&brick_path)?;

    let nvox = hdr.dims[0] * hdr.dims[1] * hdr.dims[2];
    let expected = nvox * scalar_type.elem_size();
    if bytes.len() != expected {
        return Err(Box::new(InputError::BrickSizeMismatch {
            expected,
            got: bytes.len(),
        }));
    }

    let samples = decode_brick(&bytes, scalar_type);
    log::info!(
        "loaded {} ({}x{}x{} {} voxels, scale {})",
        header_path.display(),
        hdr.dims[0],
        hdr.dims[1],
        hdr.dims[2],
        hdr.datatype,
        hdr.scale
    );

    let vol = ScalarVolume::new(
        (hdr.dims[0], hdr.dims[1], hdr.dims[2]),
        hdr.spacing,
        hdr.origin,
        orient,
        hdr.scale,
        samples,
    )?;
    Ok(vol)
}

fn decode_brick(bytes: &[u8], ty: ScalarType) -> SampleBuf {
    match ty {
        ScalarType::U8 => SampleBuf::U8(bytes.to_vec()),
        ScalarType::I16 => SampleBuf::I16(
            bytes
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        ScalarType::F32 => SampleBuf::F32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        ScalarType::F64 => SampleBuf::F64(
            bytes
                .chunks_exact(8)
                .map(|c| {
                    f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]])
                })
                .collect(),
        ),
        ScalarType::Complex32 => SampleBuf::Complex32(
            bytes
                .chunks_exact(8)
                .map(|c| {
                    [
                        f32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                        f32::from_le_bytes([c[4], c[5], c[6], c[7]]),
                    ]
                })
                .collect(),
        ),
    }
}
