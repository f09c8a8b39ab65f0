use isomesh_volume::{AxisOrientation, SampleBuf, ScalarType, ScalarVolume, VolumeError};

fn rai() -> [AxisOrientation; 3] {
    [
        AxisOrientation::RightToLeft,
        AxisOrientation::AnteriorToPosterior,
        AxisOrientation::InferiorToSuperior,
    ]
}

fn unit_volume(samples: SampleBuf) -> Result<ScalarVolume, VolumeError> {
    ScalarVolume::new((2, 2, 2), [1.0; 3], [0.0; 3], rai(), 0.0, samples)
}

#[test]
fn rejects_zero_dimension() {
    let r = ScalarVolume::new(
        (0, 2, 2),
        [1.0; 3],
        [0.0; 3],
        rai(),
        0.0,
        SampleBuf::U8(vec![]),
    );
    assert!(matches!(r, Err(VolumeError::ZeroDimension)));
}

#[test]
fn rejects_zero_spacing() {
    let r = ScalarVolume::new(
        (2, 2, 2),
        [1.0, 0.0, 1.0],
        [0.0; 3],
        rai(),
        0.0,
        SampleBuf::U8(vec![0; 8]),
    );
    assert!(matches!(r, Err(VolumeError::ZeroSpacing)));
}

#[test]
fn rejects_degenerate_orientation() {
    // Two axes both claim world x.
    let orient = [
        AxisOrientation::RightToLeft,
        AxisOrientation::LeftToRight,
        AxisOrientation::InferiorToSuperior,
    ];
    let r = ScalarVolume::new(
        (2, 2, 2),
        [1.0; 3],
        [0.0; 3],
        orient,
        0.0,
        SampleBuf::U8(vec![0; 8]),
    );
    assert!(matches!(r, Err(VolumeError::OrientationNotBijective)));
}

#[test]
fn rejects_short_sample_buffer() {
    let r = unit_volume(SampleBuf::U8(vec![0; 7]));
    assert!(matches!(
        r,
        Err(VolumeError::SampleCountMismatch {
            expected: 8,
            got: 7
        })
    ));
}

#[test]
fn idx_is_x_fastest() {
    let vol = ScalarVolume::new(
        (3, 4, 5),
        [1.0; 3],
        [0.0; 3],
        rai(),
        0.0,
        SampleBuf::U8(vec![0; 60]),
    )
    .unwrap();
    assert_eq!(vol.idx(0, 0, 0), 0);
    assert_eq!(vol.idx(1, 0, 0), 1);
    assert_eq!(vol.idx(0, 1, 0), 3);
    assert_eq!(vol.idx(0, 0, 1), 12);
    assert_eq!(vol.idx(2, 3, 4), 59);
}

#[test]
fn coerce_applies_scale_factor() {
    let vol = ScalarVolume::new(
        (2, 2, 2),
        [1.0; 3],
        [0.0; 3],
        rai(),
        0.5,
        SampleBuf::I16(vec![2; 8]),
    )
    .unwrap();
    let d = vol.coerce_f64().unwrap();
    assert!(d.iter().all(|v| *v == 1.0));
}

#[test]
fn zero_scale_means_unscaled() {
    let vol = unit_volume(SampleBuf::F32(vec![3.0; 8])).unwrap();
    let d = vol.coerce_f64().unwrap();
    assert!(d.iter().all(|v| *v == 3.0));
}

#[test]
fn complex_samples_do_not_coerce() {
    let vol = unit_volume(SampleBuf::Complex32(vec![[1.0, 2.0]; 8])).unwrap();
    assert_eq!(vol.scalar_type(), ScalarType::Complex32);
    assert!(vol.coerce_f64().is_none());
}

#[test]
fn purge_drops_samples_but_keeps_metadata() {
    let mut vol = unit_volume(SampleBuf::U8(vec![1; 8])).unwrap();
    assert!(!vol.is_purged());
    vol.purge();
    assert!(vol.is_purged());
    assert!(vol.coerce_f64().is_none());
    // Metadata still answers.
    assert_eq!(vol.dims(), (2, 2, 2));
    assert_eq!(vol.scalar_type(), ScalarType::U8);
    // Purging twice is a no-op.
    vol.purge();
    assert!(vol.is_purged());
}

#[test]
fn orientation_codes_round_trip() {
    for o in AxisOrientation::ALL {
        assert_eq!(AxisOrientation::from_code(o.code()), Some(o));
    }
    assert_eq!(AxisOrientation::from_code("X2Y"), None);
}
