//! Typed sample buffers and f64 coercion.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarType {
    U8,
    I16,
    F32,
    F64,
    /// Interleaved (re, im) pairs. Not orderable; cannot be thresholded.
    Complex32,
}

impl ScalarType {
    #[inline]
    pub fn elem_size(self) -> usize {
        match self {
            ScalarType::U8 => 1,
            ScalarType::I16 => 2,
            ScalarType::F32 => 4,
            ScalarType::F64 => 8,
            ScalarType::Complex32 => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::U8 => "u8",
            ScalarType::I16 => "i16",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Complex32 => "c32",
        }
    }

    pub fn from_name(name: &str) -> Option<ScalarType> {
        Some(match name {
            "u8" => ScalarType::U8,
            "i16" => ScalarType::I16,
            "f32" => ScalarType::F32,
            "f64" => ScalarType::F64,
            "c32" => ScalarType::Complex32,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug)]
pub enum SampleBuf {
    U8(Vec<u8>),
    I16(Vec<i16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
    Complex32(Vec<[f32; 2]>),
}

impl SampleBuf {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            SampleBuf::U8(v) => v.len(),
            SampleBuf::I16(v) => v.len(),
            SampleBuf::F32(v) => v.len(),
            SampleBuf::F64(v) => v.len(),
            SampleBuf::Complex32(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            SampleBuf::U8(_) => ScalarType::U8,
            SampleBuf::I16(_) => ScalarType::I16,
            SampleBuf::F32(_) => ScalarType::F32,
            SampleBuf::F64(_) => ScalarType::F64,
            SampleBuf::Complex32(_) => ScalarType::Complex32,
        }
    }

    /// Widen to f64, multiplying by `scale` unless it is 0.0 (the header
    /// convention for "no scaling"). `None` for complex buffers.
    pub fn coerce_f64(&self, scale: f64) -> Option<Vec<f64>> {
        let factor = if scale == 0.0 { 1.0 } else { scale };
        let out = match self {
            SampleBuf::U8(v) => v.iter().map(|s| f64::from(*s) * factor).collect(),
            SampleBuf::I16(v) => v.iter().map(|s| f64::from(*s) * factor).collect(),
            SampleBuf::F32(v) => v.iter().map(|s| f64::from(*s) * factor).collect(),
            SampleBuf::F64(v) => v.iter().map(|s| s * factor).collect(),
            SampleBuf::Complex32(_) => return None,
        };
        Some(out)
    }
}
