//! Frame-to-frame window size tracking.

use layout_core::Viewport;

/// Sub-point jitter from fractional scaling is not a resize.
const RESIZE_EPSILON: f32 = 0.5;

#[derive(Debug, Default)]
pub struct ResizeDetector {
    last: Option<Viewport>,
}

impl ResizeDetector {
    /// Returns the viewport when it differs from the last one seen. The first
    /// observation always counts.
    pub fn observe(&mut self, current: Option<Viewport>) -> Option<Viewport> {
        let current = current?;
        if !current.width.is_finite() || !current.height.is_finite() {
            return None;
        }
        let changed = match self.last {
            None => true,
            Some(last) => {
                (last.width - current.width).abs() > RESIZE_EPSILON
                    || (last.height - current.height).abs() > RESIZE_EPSILON
            }
        };
        if changed {
            self.last = Some(current);
            Some(current)
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<Viewport> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_is_reported() {
        let mut detector = ResizeDetector::default();
        let viewport = Viewport::new(1280.0, 800.0);
        assert_eq!(detector.observe(Some(viewport)), Some(viewport));
        assert_eq!(detector.last(), Some(viewport));
    }

    #[test]
    fn unchanged_size_is_ignored() {
        let mut detector = ResizeDetector::default();
        detector.observe(Some(Viewport::new(1280.0, 800.0)));
        assert_eq!(detector.observe(Some(Viewport::new(1280.0, 800.0))), None);
        assert_eq!(detector.observe(Some(Viewport::new(1280.2, 799.9))), None);
    }

    #[test]
    fn changed_size_is_reported() {
        let mut detector = ResizeDetector::default();
        detector.observe(Some(Viewport::new(1280.0, 800.0)));
        let rotated = Viewport::new(800.0, 1280.0);
        assert_eq!(detector.observe(Some(rotated)), Some(rotated));
    }

    #[test]
    fn missing_or_non_finite_sizes_keep_last_viewport() {
        let mut detector = ResizeDetector::default();
        let viewport = Viewport::new(640.0, 480.0);
        detector.observe(Some(viewport));
        assert_eq!(detector.observe(None), None);
        assert_eq!(detector.observe(Some(Viewport::new(f32::NAN, 480.0))), None);
        assert_eq!(detector.last(), Some(viewport));
    }
}
