//! Per-axis orientation codes.
//!
//! Each code names the world direction a volume axis moves toward as its
//! index increases. The canonical world convention is right-handed with
//! x running right-to-left, y anterior-to-posterior, z inferior-to-superior,
//! so e.g. `LeftToRight` maps onto world x with a sign flip.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrientation {
    RightToLeft,
    LeftToRight,
    AnteriorToPosterior,
    PosteriorToAnterior,
    InferiorToSuperior,
    SuperiorToInferior,
}

impl AxisOrientation {
    /// World axis this volume axis contributes to: 0 = x, 1 = y, 2 = z.
    #[inline]
    pub fn world_axis(self) -> usize {
        match self {
            AxisOrientation::RightToLeft | AxisOrientation::LeftToRight => 0,
            AxisOrientation::AnteriorToPosterior | AxisOrientation::PosteriorToAnterior => 1,
            AxisOrientation::InferiorToSuperior | AxisOrientation::SuperiorToInferior => 2,
        }
    }

    /// Whether the raw coordinate is negated when expressed in the
    /// canonical convention.
    #[inline]
    pub fn flipped(self) -> bool {
        matches!(
            self,
            AxisOrientation::LeftToRight
                | AxisOrientation::PosteriorToAnterior
                | AxisOrientation::SuperiorToInferior
        )
    }

    /// Two-letter-2-two-letter code used in volume headers, e.g. "R2L".
    pub fn code(self) -> &'static str {
        match self {
            AxisOrientation::RightToLeft => "R2L",
            AxisOrientation::LeftToRight => "L2R",
            AxisOrientation::AnteriorToPosterior => "A2P",
            AxisOrientation::PosteriorToAnterior => "P2A",
            AxisOrientation::InferiorToSuperior => "I2S",
            AxisOrientation::SuperiorToInferior => "S2I",
        }
    }

    pub fn from_code(code: &str) -> Option<AxisOrientation> {
        Some(match code {
            "R2L" => AxisOrientation::RightToLeft,
            "L2R" => AxisOrientation::LeftToRight,
            "A2P" => AxisOrientation::AnteriorToPosterior,
            "P2A" => AxisOrientation::PosteriorToAnterior,
            "I2S" => AxisOrientation::InferiorToSuperior,
            "S2I" => AxisOrientation::SuperiorToInferior,
            _ => return None,
        })
    }

    pub const ALL: [AxisOrientation; 6] = [
        AxisOrientation::RightToLeft,
        AxisOrientation::LeftToRight,
        AxisOrientation::AnteriorToPosterior,
        AxisOrientation::PosteriorToAnterior,
        AxisOrientation::InferiorToSuperior,
        AxisOrientation::SuperiorToInferior,
    ];
}
