//! Pointer drag with elastic constraints and bounded momentum.
//!
//! Coordinates are client px, timestamps are ms from any monotonic clock
//! (`performance.now()` or `Event.timeStamp`). The tracker owns the item's
//! translation; the component only reads [`DragTracker::offset`] each frame.

use std::collections::VecDeque;

use crate::config::DragConfig;

/// Samples older than this are ignored when estimating release velocity.
const VELOCITY_WINDOW_MS: f64 = 100.0;
const SETTLE_EPSILON: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Allowed translation range for a draggable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Keeps `element` inside `container`. `current` is the translation
    /// already applied to `element`, so it is removed to get the layout box.
    pub fn from_rects(container: Rect, element: Rect, current: Point) -> Self {
        let layout_left = element.left - current.x;
        let layout_right = element.right - current.x;
        let layout_top = element.top - current.y;
        let layout_bottom = element.bottom - current.y;
        let (min_x, max_x) = ordered(container.left - layout_left, container.right - layout_right);
        let (min_y, max_y) = ordered(container.top - layout_top, container.bottom - layout_bottom);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.min_x, self.max_x), p.y.clamp(self.min_y, self.max_y))
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    fn elastic(&self, p: Point, elastic: f64) -> Point {
        Point::new(
            elastic_axis(p.x, self.min_x, self.max_x, elastic),
            elastic_axis(p.y, self.min_y, self.max_y, elastic),
        )
    }
}

// An element larger than its container gets an inverted range.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Scales travel past `min`/`max` by `elastic`.
pub fn elastic_axis(value: f64, min: f64, max: f64, elastic: f64) -> f64 {
    if value < min {
        min + (value - min) * elastic
    } else if value > max {
        max + (value - max) * elastic
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// No press in progress.
    Idle,
    /// Pressed but still under the start threshold.
    Pending,
    Started,
    Moved,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Nothing was pressed.
    Ignored,
    /// Press ended without crossing the drag threshold.
    Tap,
    /// Drag ended; the offset now glides to `target`.
    Fling { target: Point },
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Point,
    t: f64,
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    config: DragConfig,
    bounds: Option<Bounds>,
    offset: Point,
    origin_offset: Point,
    press: Option<Point>,
    dragging: bool,
    samples: VecDeque<Sample>,
    target: Option<Point>,
}

impl DragTracker {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            bounds: None,
            offset: Point::ZERO,
            origin_offset: Point::ZERO,
            press: None,
            dragging: false,
            samples: VecDeque::new(),
            target: None,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// `None` lifts all constraints.
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_settling(&self) -> bool {
        self.target.is_some()
    }

    /// Starts a press. Any glide still in progress stops where it is.
    pub fn press(&mut self, x: f64, y: f64, t: f64) {
        self.target = None;
        self.origin_offset = self.offset;
        self.press = Some(Point::new(x, y));
        self.dragging = false;
        self.samples.clear();
        self.samples.push_back(Sample {
            at: Point::new(x, y),
            t,
        });
    }

    pub fn moved(&mut self, x: f64, y: f64, t: f64) -> DragStep {
        let Some(start) = self.press else {
            return DragStep::Idle;
        };
        let pointer = Point::new(x, y);
        let step = if self.dragging {
            DragStep::Moved
        } else if pointer.distance_to(start) >= self.config.threshold_px {
            self.dragging = true;
            DragStep::Started
        } else {
            return DragStep::Pending;
        };
        self.record(pointer, t);
        let raw = Point::new(
            self.origin_offset.x + (x - start.x),
            self.origin_offset.y + (y - start.y),
        );
        self.offset = match self.bounds {
            Some(b) => b.elastic(raw, self.config.elastic),
            None => raw,
        };
        step
    }

    /// Ends the press. `on_item` tells whether the pointer came up over the
    /// pressed element; a short press released elsewhere is not a tap.
    pub fn release(&mut self, t: f64, on_item: bool) -> Release {
        if self.press.take().is_none() {
            return Release::Ignored;
        }
        if !self.dragging {
            self.samples.clear();
            return if on_item { Release::Tap } else { Release::Ignored };
        }
        self.dragging = false;
        let v = self.velocity(t);
        self.samples.clear();
        let ideal = Point::new(
            self.offset.x + v.x * self.config.power,
            self.offset.y + v.y * self.config.power,
        );
        let target = match self.bounds {
            Some(b) => b.clamp(ideal),
            None => ideal,
        };
        self.target = Some(target);
        Release::Fling { target }
    }

    /// Abandons the gesture without a tap or momentum. Returns true when a
    /// drag was in progress; an elastic overshoot then glides back inside
    /// the bounds.
    pub fn cancel(&mut self) -> bool {
        if self.press.take().is_none() {
            return false;
        }
        self.samples.clear();
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        let rest = match self.bounds {
            Some(b) => b.clamp(self.offset),
            None => self.offset,
        };
        if rest != self.offset {
            self.target = Some(rest);
        }
        true
    }

    /// Exponential glide toward the release target. Returns true while moving.
    pub fn settle(&mut self, dt_ms: f64) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let decay = (-dt_ms.max(0.0) / self.config.time_constant_ms).exp();
        self.offset = Point::new(
            target.x + (self.offset.x - target.x) * decay,
            target.y + (self.offset.y - target.y) * decay,
        );
        if self.offset.distance_to(target) < SETTLE_EPSILON {
            self.offset = target;
            self.target = None;
            return false;
        }
        true
    }

    /// Release velocity in px per second.
    fn velocity(&self, now: f64) -> Point {
        let Some(last) = self.samples.back() else {
            return Point::ZERO;
        };
        if now - last.t > VELOCITY_WINDOW_MS {
            return Point::ZERO;
        }
        let Some(first) = self
            .samples
            .iter()
            .find(|s| last.t - s.t <= VELOCITY_WINDOW_MS)
        else {
            return Point::ZERO;
        };
        let dt = (last.t - first.t) / 1000.0;
        if dt <= 0.0 {
            return Point::ZERO;
        }
        Point::new((last.at.x - first.at.x) / dt, (last.at.y - first.at.y) / dt)
    }

    fn record(&mut self, at: Point, t: f64) {
        self.samples.push_back(Sample { at, t });
        while let Some(front) = self.samples.front() {
            if t - front.t > VELOCITY_WINDOW_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;
