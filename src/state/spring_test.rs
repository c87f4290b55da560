use super::*;

fn run(spring: &mut Spring, seconds: f64) {
    let frames = (seconds * 60.0) as usize;
    for _ in 0..frames {
        spring.step(1.0 / 60.0);
    }
}

#[test]
fn new_spring_is_at_rest() {
    let s = Spring::new(5.0, SpringParams::new(400.0, 90.0, 1.0));
    assert!(s.settled());
    assert_eq!(s.target, 5.0);
}

#[test]
fn stiff_overdamped_spring_converges_without_overshoot() {
    let mut s = Spring::new(0.0, SpringParams::new(400.0, 90.0, 1.0));
    s.set_target(-100.0);
    let mut min_seen = 0.0_f64;
    for _ in 0..240 {
        s.step(1.0 / 60.0);
        min_seen = min_seen.min(s.value);
    }
    assert!(s.settled());
    assert_eq!(s.value, -100.0);
    assert!(min_seen >= -100.0 - 1e-6, "overshot to {min_seen}");
}

#[test]
fn light_cursor_spring_settles() {
    let mut s = Spring::new(0.0, SpringParams::new(150.0, 15.0, 0.1));
    s.set_target(300.0);
    run(&mut s, 2.0);
    assert!(s.settled());
    assert_eq!(s.value, 300.0);
}

#[test]
fn step_reports_motion_until_settled() {
    let mut s = Spring::new(0.0, SpringParams::new(300.0, 25.0, 1.0));
    s.set_target(1.0);
    assert!(s.step(1.0 / 60.0));
    run(&mut s, 3.0);
    assert!(!s.step(1.0 / 60.0));
}

#[test]
fn huge_frame_gap_is_capped() {
    let mut s = Spring::new(0.0, SpringParams::new(400.0, 90.0, 1.0));
    s.set_target(100.0);
    s.step(10.0);
    assert!(s.value.is_finite());
    assert!(s.value < 100.0);
}

#[test]
fn snap_jumps_to_target() {
    let mut s = Spring::new(0.0, SpringParams::default());
    s.set_target(42.0);
    s.step(1.0 / 60.0);
    s.snap();
    assert_eq!(s.value, 42.0);
    assert_eq!(s.velocity, 0.0);
}

// =============================================================
// Redraw gate
// =============================================================

#[test]
fn settling_frame_is_still_drawn() {
    let mut s = Spring::new(1.0, SpringParams::new(150.0, 15.0, 0.1));
    s.set_target(2.5);
    let mut gate = RedrawGate::default();
    let mut drawn = s.value;
    for _ in 0..2_000 {
        let moving = s.step(0.016);
        if gate.frame(moving) {
            drawn = s.value;
        }
    }
    assert_eq!(s.value, 2.5);
    assert_eq!(drawn, 2.5);
}

#[test]
fn gate_idles_once_settled() {
    let mut gate = RedrawGate::default();
    assert!(gate.frame(false));
    assert!(!gate.is_animating());
    assert!(!gate.frame(false));
    assert!(gate.frame(true));
    assert!(gate.frame(false));
    assert!(!gate.frame(false));
}
