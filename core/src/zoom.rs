use crate::geometry::normalize_pixel_ratio;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioChange {
    pub from: f64,
    pub to: f64,
}

/// Detects browser zoom by watching the device pixel ratio; browsers expose no
/// zoom event, so this is fed from a polling timer.
#[derive(Clone, Copy, Debug)]
pub struct PixelRatioTracker {
    last: f64,
}

impl PixelRatioTracker {
    pub fn new(initial: f64) -> Self {
        Self {
            last: normalize_pixel_ratio(initial),
        }
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn observe(&mut self, ratio: f64) -> Option<RatioChange> {
        let ratio = normalize_pixel_ratio(ratio);
        if ratio == self.last {
            return None;
        }
        let change = RatioChange {
            from: self.last,
            to: ratio,
        };
        self.last = ratio;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_change_once() {
        let mut tracker = PixelRatioTracker::new(1.0);
        assert_eq!(tracker.observe(1.0), None);
        assert_eq!(
            tracker.observe(1.5),
            Some(RatioChange { from: 1.0, to: 1.5 })
        );
        assert_eq!(tracker.observe(1.5), None);
        assert_eq!(tracker.last(), 1.5);
        assert_eq!(
            tracker.observe(1.0),
            Some(RatioChange { from: 1.5, to: 1.0 })
        );
    }

    #[test]
    fn unreported_ratio_counts_as_one() {
        let mut tracker = PixelRatioTracker::new(0.0);
        assert_eq!(tracker.last(), 1.0);
        assert_eq!(tracker.observe(f64::NAN), None);
    }
}
