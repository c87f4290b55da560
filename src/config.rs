//! Presentation parameters for every animated surface on the page.
//!
//! All literals here were tuned by eye. They can be overridden from the
//! `"motion"` key of the embedded site content; any field left out keeps
//! its default.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::spring::MAX_SUBSTEP;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.stiffness > 0.0) {
            return Err(Error::invalid_motion(format!("{name}.stiffness must be > 0")));
        }
        if !(self.mass > 0.0) {
            return Err(Error::invalid_motion(format!("{name}.mass must be > 0")));
        }
        if !(self.damping >= 0.0) {
            return Err(Error::invalid_motion(format!("{name}.damping must be >= 0")));
        }
        // Semi-implicit Euler at step h is stable while (h·ω)² + 2·h·c/m < 4
        let h = MAX_SUBSTEP;
        let omega = (self.stiffness / self.mass).sqrt();
        let drag = h * self.damping / self.mass;
        if !((h * omega).powi(2) + 2.0 * drag < 4.0) {
            return Err(Error::invalid_motion(format!(
                "{name} is too stiff or too damped for the {}Hz integrator",
                (1.0 / h).round()
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Vertical travel in px for speed 1 across the full scroll range.
    pub distance: f64,
    pub spring: SpringParams,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            distance: 100.0,
            spring: SpringParams::new(400.0, 90.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub spring: SpringParams,
    pub hover_scale: f64,
    /// Indicator diameter in px.
    pub size: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::new(150.0, 15.0, 0.1),
            hover_scale: 2.5,
            size: 32.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Fraction of out-of-bounds travel that is still applied while dragging.
    pub elastic: f64,
    /// Release velocity multiplier for the momentum target.
    pub power: f64,
    pub time_constant_ms: f64,
    /// Pointer travel before a press turns into a drag.
    pub threshold_px: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            elastic: 0.05,
            power: 0.1,
            time_constant_ms: 200.0,
            threshold_px: 3.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    pub hover_scale: f64,
    pub hover_rotation_delta: f64,
    pub drag_scale: f64,
    pub spring: SpringParams,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            hover_scale: 1.02,
            hover_rotation_delta: 2.0,
            drag_scale: 1.05,
            spring: SpringParams::new(300.0, 25.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackingConfig {
    pub dragging: i32,
    pub hovering: i32,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            dragging: 9999,
            hovering: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub duration_s: f64,
    pub distance: f64,
    /// Viewport inset in px an item must cross before it reveals.
    pub margin: f64,
    pub easing: [f64; 4],
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration_s: 1.2,
            distance: 40.0,
            margin: 50.0,
            easing: [0.22, 1.0, 0.36, 1.0],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub parallax: ParallaxConfig,
    pub cursor: CursorConfig,
    pub drag: DragConfig,
    pub pose: PoseConfig,
    pub stacking: StackingConfig,
    pub entrance: EntranceConfig,
}

impl MotionConfig {
    /// Rejects values that would break the stacking order or make the
    /// springs diverge. Baseline z-indices of individual items must stay
    /// below `stacking.hovering`; see [`MotionConfig::max_baseline_z`].
    pub fn validate(&self) -> Result<()> {
        self.parallax.spring.validate("parallax.spring")?;
        self.cursor.spring.validate("cursor.spring")?;
        self.pose.spring.validate("pose.spring")?;
        if self.stacking.hovering == i32::MIN {
            return Err(Error::invalid_motion(
                "stacking.hovering must leave room for a baseline below it",
            ));
        }
        if self.stacking.dragging <= self.stacking.hovering {
            return Err(Error::invalid_motion(
                "stacking.dragging must exceed stacking.hovering",
            ));
        }
        if !(0.0..=1.0).contains(&self.drag.elastic) {
            return Err(Error::invalid_motion("drag.elastic must be within [0, 1]"));
        }
        if !(self.drag.time_constant_ms > 0.0) {
            return Err(Error::invalid_motion("drag.time_constant_ms must be > 0"));
        }
        if self.drag.power < 0.0 || self.drag.threshold_px < 0.0 {
            return Err(Error::invalid_motion(
                "drag.power and drag.threshold_px must be >= 0",
            ));
        }
        if !(self.entrance.duration_s >= 0.0) {
            return Err(Error::invalid_motion("entrance.duration_s must be >= 0"));
        }
        Ok(())
    }

    pub fn max_baseline_z(&self) -> i32 {
        self.stacking.hovering.saturating_sub(1)
    }

    /// Returns the parsed overrides when valid, otherwise the defaults.
    pub fn or_default(candidate: Option<MotionConfig>) -> MotionConfig {
        match candidate {
            None => MotionConfig::default(),
            Some(cfg) => match cfg.validate() {
                Ok(()) => cfg,
                Err(e) => {
                    log::warn!("{e}; falling back to default motion config");
                    MotionConfig::default()
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
