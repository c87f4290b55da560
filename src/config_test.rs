use super::*;

#[test]
fn defaults_are_valid() {
    assert!(MotionConfig::default().validate().is_ok());
}

#[test]
fn defaults_match_tuned_literals() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.parallax.spring, SpringParams::new(400.0, 90.0, 1.0));
    assert_eq!(cfg.cursor.spring, SpringParams::new(150.0, 15.0, 0.1));
    assert_eq!(cfg.drag.elastic, 0.05);
    assert_eq!(cfg.drag.time_constant_ms, 200.0);
    assert_eq!(cfg.stacking.dragging, 9999);
    assert_eq!(cfg.stacking.hovering, 1000);
}

#[test]
fn inverted_stacking_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.stacking.dragging = 10;
    cfg.stacking.hovering = 10;
    assert!(matches!(cfg.validate(), Err(Error::InvalidMotion { .. })));
}

#[test]
fn zero_mass_spring_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.cursor.spring.mass = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("cursor.spring.mass"));
}

#[test]
fn elastic_outside_unit_range_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.drag.elastic = 1.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn nan_time_constant_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.drag.time_constant_ms = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg: MotionConfig =
        serde_json::from_str(r#"{ "drag": { "elastic": 0.2 }, "cursor": { "hover_scale": 3.0 } }"#)
            .unwrap();
    assert_eq!(cfg.drag.elastic, 0.2);
    assert_eq!(cfg.drag.power, 0.1);
    assert_eq!(cfg.cursor.hover_scale, 3.0);
    assert_eq!(cfg.cursor.spring, SpringParams::new(150.0, 15.0, 0.1));
    assert_eq!(cfg.parallax, ParallaxConfig::default());
}

#[test]
fn or_default_discards_invalid_overrides() {
    let mut bad = MotionConfig::default();
    bad.stacking.hovering = 20_000;
    assert_eq!(MotionConfig::or_default(Some(bad)), MotionConfig::default());
    assert_eq!(MotionConfig::or_default(None), MotionConfig::default());
}

#[test]
fn or_default_keeps_valid_overrides() {
    let mut good = MotionConfig::default();
    good.parallax.distance = 150.0;
    assert_eq!(MotionConfig::or_default(Some(good)).parallax.distance, 150.0);
}

// =============================================================
// Spring stability and stacking headroom
// =============================================================

#[test]
fn stiff_spring_that_would_diverge_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.parallax.spring = SpringParams::new(1e6, 10.0, 1.0);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("parallax.spring"));
}

#[test]
fn overdamped_light_spring_is_rejected() {
    let mut cfg = MotionConfig::default();
    cfg.cursor.spring = SpringParams::new(150.0, 60.0, 0.1);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepted_springs_stay_bounded() {
    use crate::state::spring::Spring;

    let params = SpringParams::new(100_000.0, 200.0, 1.0);
    let mut cfg = MotionConfig::default();
    cfg.pose.spring = params;
    assert!(cfg.validate().is_ok());

    let mut s = Spring::new(0.0, params);
    s.set_target(100.0);
    for _ in 0..600 {
        s.step(0.016);
        assert!(s.value.abs() < 1_000.0, "diverged to {}", s.value);
    }
}

#[test]
fn lowest_hover_layer_is_rejected_without_overflow() {
    let mut cfg = MotionConfig::default();
    cfg.stacking.hovering = i32::MIN;
    cfg.stacking.dragging = 0;
    assert_eq!(cfg.max_baseline_z(), i32::MIN);
    assert!(matches!(cfg.validate(), Err(Error::InvalidMotion { .. })));
}
