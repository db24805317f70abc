use super::*;

#[test]
fn speed_scales_inversely_with_duration() {
    let cfg = MotionConfig::default();
    assert_eq!(
        motion_for(KenBurnsDirection::SlowZoomIn, 11.0, &cfg).speed_multiplier,
        1.0
    );
    assert_eq!(
        motion_for(KenBurnsDirection::SlowZoomIn, 22.0, &cfg).speed_multiplier,
        0.5
    );
    assert_eq!(
        motion_for(KenBurnsDirection::SlowZoomIn, 6.0, &cfg).speed_multiplier,
        1.833
    );
}

#[test]
fn short_durations_use_minimum() {
    let cfg = MotionConfig::default();
    let m = motion_for(KenBurnsDirection::SlowPanLeft, 0.5, &cfg);
    assert_eq!(m.speed_multiplier, 3.667);
    let m = motion_for(KenBurnsDirection::SlowPanLeft, f64::NAN, &cfg);
    assert_eq!(m.speed_multiplier, 3.667);
}

#[test]
fn presets_match_direction() {
    let cfg = MotionConfig::default();
    let zin = motion_for(KenBurnsDirection::SlowZoomIn, 8.0, &cfg);
    assert_eq!((zin.start_scale, zin.end_scale), (1.0, 1.15));
    let zout = motion_for(KenBurnsDirection::SlowZoomOut, 8.0, &cfg);
    assert_eq!((zout.start_scale, zout.end_scale), (1.15, 1.0));
    let right = motion_for(KenBurnsDirection::SlowPanRight, 8.0, &cfg);
    assert_eq!((right.start_x_offset, right.end_x_offset), (-40.0, 40.0));
    let left = motion_for(KenBurnsDirection::SlowPanLeft, 8.0, &cfg);
    assert_eq!((left.start_x_offset, left.end_x_offset), (40.0, -40.0));
    let tilt = motion_for(KenBurnsDirection::SlowTiltUp, 8.0, &cfg);
    assert_eq!((tilt.start_y_offset, tilt.end_y_offset), (30.0, -30.0));
    assert_eq!(tilt.start_scale, 1.0);
    assert_eq!(tilt.direction, KenBurnsDirection::SlowTiltUp);
}

#[test]
fn validate_rejects_shrinking_zoom() {
    let cfg = MotionConfig {
        zoom_scale: 0.9,
        ..MotionConfig::default()
    };
    assert!(cfg.validate().is_err());
    assert!(MotionConfig::default().validate().is_ok());
}
