// One-shot "in view" latch for entrance animations

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    margin: f64,
    revealed: bool,
}

impl Reveal {
    /// `margin` shrinks the viewport on both ends before an element counts
    /// as visible.
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            revealed: false,
        }
    }

    /// Already revealed, e.g. rebuilt after the flag was stored elsewhere.
    pub fn latched(margin: f64) -> Self {
        Self {
            margin,
            revealed: true,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Scroll and resize only matter until the latch flips.
    pub fn watching(&self) -> bool {
        !self.revealed
    }

    /// Latches once the element intersects the shrunk viewport. Returns
    /// true only on the check that flips it.
    pub fn check(&mut self, top: f64, bottom: f64, viewport_h: f64) -> bool {
        if self.revealed {
            return false;
        }
        let visible = bottom > self.margin && top < viewport_h - self.margin;
        if visible {
            self.revealed = true;
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_fold_stays_hidden() {
        let mut r = Reveal::new(50.0);
        assert!(!r.check(900.0, 1100.0, 800.0));
        assert!(!r.check(760.0, 960.0, 800.0));
        assert!(!r.is_revealed());
    }

    #[test]
    fn crossing_margin_reveals_once() {
        let mut r = Reveal::new(50.0);
        assert!(r.check(700.0, 900.0, 800.0));
        assert!(r.is_revealed());
        assert!(!r.check(700.0, 900.0, 800.0));
    }

    #[test]
    fn scrolling_away_never_hides() {
        let mut r = Reveal::new(50.0);
        r.check(100.0, 300.0, 800.0);
        r.check(-5000.0, -4800.0, 800.0);
        assert!(r.is_revealed());
    }

    #[test]
    fn stops_watching_once_revealed() {
        let mut r = Reveal::new(50.0);
        assert!(r.watching());
        r.check(100.0, 300.0, 800.0);
        assert!(!r.watching());
    }

    #[test]
    fn latched_never_watches_or_flips() {
        let mut r = Reveal::latched(50.0);
        assert!(r.is_revealed());
        assert!(!r.watching());
        assert!(!r.check(100.0, 300.0, 800.0));
    }

    #[test]
    fn above_viewport_stays_hidden() {
        let mut r = Reveal::new(50.0);
        assert!(!r.check(-300.0, 40.0, 800.0));
    }
}
