use super::*;

fn item(z: i32) -> ItemState {
    ItemState::new(
        Placement {
            z_index: z,
            rotation: -5.0,
            speed: 1.0,
            scale: 1.0,
        },
        &MotionConfig::default(),
    )
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn starts_idle_at_baseline() {
    let it = item(15);
    assert_eq!(it.phase(), Phase::Idle);
    assert_eq!(it.z_index(), 15);
}

#[test]
fn enter_and_leave_toggle_hover() {
    let mut it = item(15);
    it.pointer_enter();
    assert_eq!(it.phase(), Phase::Hovering);
    it.pointer_leave();
    assert_eq!(it.phase(), Phase::Idle);
}

#[test]
fn leaving_mid_drag_keeps_dragging() {
    let mut it = item(15);
    it.pointer_enter();
    it.drag_start();
    it.pointer_leave();
    assert_eq!(it.phase(), Phase::Dragging);
    it.drag_end();
    assert_eq!(it.phase(), Phase::Idle);
}

#[test]
fn drag_ending_under_pointer_returns_to_hover() {
    let mut it = item(15);
    it.pointer_enter();
    it.drag_start();
    it.drag_end();
    assert_eq!(it.phase(), Phase::Hovering);
}

#[test]
fn drag_end_without_drag_is_ignored() {
    let mut it = item(15);
    it.pointer_enter();
    it.drag_end();
    assert_eq!(it.phase(), Phase::Hovering);
}

// =============================================================
// Stacking order
// =============================================================

#[test]
fn stacking_order_dragging_above_hover_above_baseline() {
    let cfg = MotionConfig::default();
    for z in [0, 1, 10, 30, cfg.max_baseline_z()] {
        let mut it = item(z);
        let baseline = it.z_index();
        it.pointer_enter();
        let hovering = it.z_index();
        it.drag_start();
        let dragging = it.z_index();
        assert!(dragging > hovering, "z={z}");
        assert!(hovering > baseline, "z={z}");
    }
}

// =============================================================
// Pose
// =============================================================

#[test]
fn hover_pose_scales_up_and_tilts() {
    let mut it = item(10);
    it.pointer_enter();
    let pose = it.pose_target();
    assert!((pose.scale - 1.02).abs() < 1e-9);
    assert!((pose.rotation - -3.0).abs() < 1e-9);
}

#[test]
fn drag_pose_scales_more_and_restores_rotation() {
    let mut it = item(10);
    it.pointer_enter();
    it.drag_start();
    let pose = it.pose_target();
    assert!((pose.scale - 1.05).abs() < 1e-9);
    assert_eq!(pose.rotation, -5.0);
}

#[test]
fn project_scale_multiplies_pose() {
    let mut it = ItemState::new(
        Placement {
            scale: 2.0,
            ..Placement::default()
        },
        &MotionConfig::default(),
    );
    assert_eq!(it.pose().scale, 2.0);
    it.pointer_enter();
    assert!((it.pose_target().scale - 2.04).abs() < 1e-9);
}

#[test]
fn tick_springs_pose_toward_target() {
    let mut it = item(10);
    it.pointer_enter();
    for _ in 0..300 {
        it.tick(0.0, 16.0);
    }
    let pose = it.pose();
    assert!((pose.scale - 1.02).abs() < 1e-9);
    assert!((pose.rotation - -3.0).abs() < 1e-9);
}

#[test]
fn tick_smooths_parallax_offset() {
    let mut it = item(10);
    assert!(it.tick(-100.0, 16.0));
    let first = it.parallax.value;
    assert!(first < 0.0 && first > -100.0, "spring jumped to {first}");
    for _ in 0..300 {
        it.tick(-100.0, 16.0);
    }
    assert_eq!(it.parallax.value, -100.0);
    assert!(!it.tick(-100.0, 16.0));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_baseline_state() {
    let cfg = MotionConfig::default();
    let mut it = item(12);
    it.pointer_enter();
    it.drag.press(0.0, 0.0, 0.0);
    it.drag.moved(120.0, 40.0, 16.0);
    it.drag_start();
    it.tick(-60.0, 16.0);
    it.reset(&cfg);
    assert_eq!(it.phase(), Phase::Idle);
    assert_eq!(it.z_index(), 12);
    assert_eq!(it.drag.offset(), crate::state::drag::Point::ZERO);
    assert!(!it.drag.is_pressed());
    assert_eq!(it.parallax.value, 0.0);
    assert_eq!(it.pose().rotation, -5.0);
}

#[test]
fn baseline_above_hover_layer_is_capped() {
    let cfg = MotionConfig::default();
    for z in [cfg.stacking.hovering, 5000, cfg.stacking.dragging, i32::MAX] {
        let mut it = item(z);
        let baseline = it.z_index();
        assert_eq!(baseline, cfg.max_baseline_z(), "z={z}");
        it.pointer_enter();
        let hovering = it.z_index();
        it.drag_start();
        let dragging = it.z_index();
        assert!(dragging > hovering, "z={z}");
        assert!(hovering > baseline, "z={z}");
    }
}

#[test]
fn reset_keeps_capped_baseline() {
    let cfg = MotionConfig::default();
    let mut it = item(5000);
    it.reset(&cfg);
    assert_eq!(it.z_index(), cfg.max_baseline_z());
}
