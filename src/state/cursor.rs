// Pointer-follow indicator state
use crate::config::CursorConfig;

use super::spring::Spring;

/// Attribute that marks any element (and its descendants) as interactive.
pub const HOVERABLE_ATTR: &str = "data-hoverable";

#[derive(Debug, Clone)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
    pub follow_x: Spring,
    pub follow_y: Spring,
    pub scale: Spring,
    config: CursorConfig,
}

impl CursorState {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            hovering: false,
            follow_x: Spring::new(0.0, config.spring),
            follow_y: Spring::new(0.0, config.spring),
            scale: Spring::new(1.0, config.spring),
            config,
        }
    }

    /// Latest pointer position wins.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        let half = self.config.size / 2.0;
        self.follow_x.set_target(x - half);
        self.follow_y.set_target(y - half);
    }

    pub fn pointer_over(&mut self, interactive: bool) {
        self.hovering = interactive;
        self.scale.set_target(self.scale_target());
    }

    pub fn scale_target(&self) -> f64 {
        if self.hovering {
            self.config.hover_scale
        } else {
            1.0
        }
    }

    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = dt_ms / 1000.0;
        let mut moving = self.follow_x.step(dt);
        moving |= self.follow_y.step(dt);
        moving |= self.scale.step(dt);
        moving
    }
}

/// Links and buttons always count; anything else needs the hoverable marker
/// on itself or an ancestor.
pub fn is_interactive(tag_name: &str, marked: bool) -> bool {
    tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("button") || marked
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
