// Scroll-linked vertical offset

/// Fraction of the element's pass through the viewport: 0 when its top edge
/// sits on the viewport's bottom edge, 1 when its bottom edge leaves the top.
/// `top` is relative to the viewport, as `getBoundingClientRect` reports it.
pub fn scroll_progress(top: f64, height: f64, viewport_h: f64) -> f64 {
    let travel = viewport_h + height;
    if !(travel > 0.0) || !top.is_finite() {
        return 0.0;
    }
    ((viewport_h - top) / travel).clamp(0.0, 1.0)
}

/// Target translation in px for a given progress. Non-increasing in
/// `progress` for positive `speed`.
pub fn offset(progress: f64, speed: f64, distance: f64) -> f64 {
    -distance * speed * progress.clamp(0.0, 1.0)
}

/// Document-space position of an element whose own box never moves, so
/// its viewport position follows from the scroll offset alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub doc_top: f64,
    pub height: f64,
}

impl Anchor {
    pub fn measure(viewport_top: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            doc_top: viewport_top + scroll_y,
            height: height.max(0.0),
        }
    }

    pub fn viewport_top(&self, scroll_y: f64) -> f64 {
        self.doc_top - scroll_y
    }

    /// True while any part of the element overlaps the viewport.
    pub fn on_screen(&self, scroll_y: f64, viewport_h: f64) -> bool {
        let top = self.viewport_top(scroll_y);
        top < viewport_h && top + self.height > 0.0
    }

    pub fn progress(&self, scroll_y: f64, viewport_h: f64) -> f64 {
        scroll_progress(self.viewport_top(scroll_y), self.height, viewport_h)
    }
}

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;
