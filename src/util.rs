// Small helpers shared by the components
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::state::Rect;
use crate::state::cursor::HOVERABLE_ATTR;

pub const TAPE_COLORS: [&str; 4] = ["#D4C5A5", "#E8C4C4", "#C4E8D5", "#D0D8D8"];

pub fn tape_color(index: usize) -> &'static str {
    TAPE_COLORS[index % TAPE_COLORS.len()]
}

/// Stable tilt in [-2, 2] degrees derived from an id, so a card's tape does
/// not jitter between renders.
pub fn tape_tilt(id: &str) -> f64 {
    let hash = id
        .bytes()
        .fold(2166136261_u32, |h, b| (h ^ b as u32).wrapping_mul(16777619));
    (hash % 401) as f64 / 100.0 - 2.0
}

pub fn cubic_bezier_css(points: [f64; 4]) -> String {
    let [a, b, c, d] = points;
    format!("cubic-bezier({a}, {b}, {c}, {d})")
}

/// `translate(x, y) rotate(r) scale(s)` in px / degrees.
pub fn transform_css(x: f64, y: f64, rotation: f64, scale: f64) -> String {
    format!("translate3d({x:.2}px, {y:.2}px, 0) rotate({rotation:.3}deg) scale({scale:.4})")
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        right: r.right(),
        bottom: r.bottom(),
    }
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// True when `el` or one of its ancestors carries the hoverable marker.
pub fn has_hoverable_ancestor(el: &Element) -> bool {
    el.closest(&format!("[{HOVERABLE_ATTR}=\"true\"]"))
        .ok()
        .flatten()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tape_colors_cycle() {
        assert_eq!(tape_color(0), tape_color(4));
        assert_ne!(tape_color(0), tape_color(1));
    }

    #[test]
    fn tape_tilt_is_stable_and_bounded() {
        for id in ["01", "02", "03", "04", "", "a-much-longer-identifier"] {
            let t = tape_tilt(id);
            assert_eq!(t, tape_tilt(id));
            assert!((-2.0..=2.0).contains(&t), "{id}: {t}");
        }
        assert_ne!(tape_tilt("01"), tape_tilt("02"));
    }

    #[test]
    fn bezier_css_lists_control_points() {
        assert_eq!(
            cubic_bezier_css([0.22, 1.0, 0.36, 1.0]),
            "cubic-bezier(0.22, 1, 0.36, 1)"
        );
    }

    #[test]
    fn transform_css_orders_translate_rotate_scale() {
        assert_eq!(
            transform_css(1.0, -2.5, 8.0, 1.05),
            "translate3d(1.00px, -2.50px, 0) rotate(8.000deg) scale(1.0500)"
        );
    }
}
