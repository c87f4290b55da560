// Damped spring used for every smoothed value on the page
use crate::config::SpringParams;

/// Longest integration step. Spring parameters are validated against it.
pub const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Large frame gaps (tab switch, debugger pause) are not integrated in full.
const MAX_FRAME: f64 = 0.1;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
    pub params: SpringParams,
}

impl Spring {
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            params,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advances the simulation by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.settled() {
            self.snap();
            return false;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.settled() {
            self.snap();
            return false;
        }
        true
    }

    pub fn settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

/// Decides which animation frames need drawing: every frame something
/// moved, plus the frame it settled on, since springs snap there.
#[derive(Debug, Clone, Copy)]
pub struct RedrawGate {
    animating: bool,
}

impl Default for RedrawGate {
    fn default() -> Self {
        Self { animating: true }
    }
}

impl RedrawGate {
    pub fn frame(&mut self, moving: bool) -> bool {
        let draw = moving || self.animating;
        self.animating = moving;
        draw
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;
