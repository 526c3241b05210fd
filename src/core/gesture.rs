//! # Swipe Detector
//!
//! Turns a press/release coordinate pair into directional intent. The
//! gesture counts only when it is horizontal-dominant (`|dx| > |dy|`)
//! and longer than the detector's threshold; anything ambiguous or
//! vertical-dominant is left to ordinary scrolling.
//!
//! Two instances run with different thresholds: carousels accept a 50 px
//! drag, whole-page navigation demands a more deliberate 75 px one so a
//! sloppy slide swipe never turns the page. Installation rules (page
//! detector suppressed inside carousel areas and absent on wide
//! viewports) belong to the adapter; this type only classifies deltas.

use log::debug;

/// Directional intent reported by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Drag to the left: advance.
    Next,
    /// Drag to the right: go back.
    Previous,
}

impl Swipe {
    /// The step this gesture applies to a cyclic index.
    pub fn step(&self) -> isize {
        match self {
            Swipe::Next => 1,
            Swipe::Previous => -1,
        }
    }
}

/// Classify a completed gesture from its deltas in logical pixels.
pub fn classify(dx: i32, dy: i32, threshold_px: i32) -> Option<Swipe> {
    if dx.abs() <= dy.abs() || dx.abs() <= threshold_px {
        return None;
    }
    Some(if dx < 0 { Swipe::Next } else { Swipe::Previous })
}

/// Tracks one in-flight gesture: press coordinates until release.
pub struct SwipeDetector {
    threshold_px: i32,
    start: Option<(i32, i32)>,
}

impl SwipeDetector {
    pub fn new(threshold_px: i32) -> Self {
        Self {
            threshold_px,
            start: None,
        }
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Abandon the in-flight gesture (another detector claimed it).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Complete the gesture. Returns the swipe, if any; either way the
    /// detector is ready for the next press.
    pub fn release(&mut self, x: i32, y: i32) -> Option<Swipe> {
        let (sx, sy) = self.start.take()?;
        let (dx, dy) = (x - sx, y - sy);
        let swipe = classify(dx, dy, self.threshold_px);
        debug!("swipe dx={dx} dy={dy} threshold={} -> {swipe:?}", self.threshold_px);
        swipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_threshold_semantics() {
        // dx=-60, dy=5 at threshold 50 advances; dx=40 does nothing.
        assert_eq!(classify(-60, 5, 50), Some(Swipe::Next));
        assert_eq!(classify(40, 5, 50), None);
        assert_eq!(classify(60, -5, 50), Some(Swipe::Previous));
    }

    #[test]
    fn test_vertical_dominant_is_ignored() {
        assert_eq!(classify(-60, 80, 50), None);
        assert_eq!(classify(-60, -60, 50), None); // tie goes to scroll
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(classify(-50, 0, 50), None);
        assert_eq!(classify(-51, 0, 50), Some(Swipe::Next));
    }

    #[test]
    fn test_detector_round_trip() {
        let mut d = SwipeDetector::new(75);
        d.press(200, 40);
        assert_eq!(d.release(120, 40), Some(Swipe::Next));
        // Start was consumed: a release without a press reports nothing.
        assert_eq!(d.release(0, 0), None);
    }

    #[test]
    fn test_cancel_discards_press() {
        let mut d = SwipeDetector::new(50);
        d.press(100, 0);
        d.cancel();
        assert_eq!(d.release(0, 0), None);
    }

    #[test]
    fn test_step_direction() {
        assert_eq!(Swipe::Next.step(), 1);
        assert_eq!(Swipe::Previous.step(), -1);
    }
}
