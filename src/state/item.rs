//! Per-item interaction state for a collage item.
//!
//! Pointer enter/leave and drag start/end drive a three-phase machine. The
//! phase decides the stacking order and the pose (scale, rotation) the item
//! springs toward. Dragging wins over hovering: leaving the item mid-drag
//! does not drop it back to idle.

use crate::config::{MotionConfig, PoseConfig, StackingConfig};

use super::drag::DragTracker;
use super::spring::Spring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: f64,
    pub rotation: f64,
}

/// Immutable placement an item is created from and reset to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub z_index: i32,
    pub rotation: f64,
    pub speed: f64,
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            z_index: 10,
            rotation: 0.0,
            speed: 1.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemState {
    pub placement: Placement,
    phase: Phase,
    /// Pointer is over the item, tracked separately so a drag that ends
    /// under the pointer returns to hovering.
    pointer_inside: bool,
    pub drag: DragTracker,
    pub parallax: Spring,
    pub scale: Spring,
    pub rotation: Spring,
    pose: PoseConfig,
    stacking: StackingConfig,
}

impl ItemState {
    /// The baseline z-index is capped below the hover layer so that
    /// dragging > hovering > baseline holds for any placement.
    pub fn new(placement: Placement, config: &MotionConfig) -> Self {
        let placement = Placement {
            z_index: placement.z_index.min(config.max_baseline_z()),
            ..placement
        };
        Self {
            placement,
            phase: Phase::Idle,
            pointer_inside: false,
            drag: DragTracker::new(config.drag),
            parallax: Spring::new(0.0, config.parallax.spring),
            scale: Spring::new(placement.scale, config.pose.spring),
            rotation: Spring::new(placement.rotation, config.pose.spring),
            pose: config.pose,
            stacking: config.stacking,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pointer_enter(&mut self) {
        self.pointer_inside = true;
        if self.phase == Phase::Idle {
            self.set_phase(Phase::Hovering);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        if self.phase == Phase::Hovering {
            self.set_phase(Phase::Idle);
        }
    }

    pub fn drag_start(&mut self) {
        self.set_phase(Phase::Dragging);
    }

    pub fn drag_end(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        let next = if self.pointer_inside {
            Phase::Hovering
        } else {
            Phase::Idle
        };
        self.set_phase(next);
    }

    /// Stacking order: dragging > hovering > baseline.
    pub fn z_index(&self) -> i32 {
        match self.phase {
            Phase::Dragging => self.stacking.dragging,
            Phase::Hovering => self.stacking.hovering,
            Phase::Idle => self.placement.z_index,
        }
    }

    pub fn pose_target(&self) -> Pose {
        let base = self.placement;
        match self.phase {
            Phase::Idle => Pose {
                scale: base.scale,
                rotation: base.rotation,
            },
            Phase::Hovering => Pose {
                scale: base.scale * self.pose.hover_scale,
                rotation: base.rotation + self.pose.hover_rotation_delta,
            },
            Phase::Dragging => Pose {
                scale: base.scale * self.pose.drag_scale,
                rotation: base.rotation,
            },
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            scale: self.scale.value,
            rotation: self.rotation.value,
        }
    }

    /// Feeds the latest parallax target and advances every animation by
    /// `dt_ms`. Returns true while anything is still moving.
    pub fn tick(&mut self, parallax_target: f64, dt_ms: f64) -> bool {
        let dt = dt_ms / 1000.0;
        self.parallax.set_target(parallax_target);
        let mut moving = self.parallax.step(dt);
        moving |= self.scale.step(dt);
        moving |= self.rotation.step(dt);
        if !self.drag.is_dragging() {
            moving |= self.drag.settle(dt_ms);
        }
        moving
    }

    /// Rebuilds everything transient from the immutable placement.
    pub fn reset(&mut self, config: &MotionConfig) {
        *self = Self::new(self.placement, config);
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        let pose = self.pose_target();
        self.scale.set_target(pose.scale);
        self.rotation.set_target(pose.rotation);
    }
}

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;
