/// Discrete reveal state for the intersection-observer strategy.
///
/// Once a panel has entered it stays entered until the owning section is
/// unmounted; scrolling back up does not hide it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Entered,
}

// Observers report ratios that land a hair under the threshold they were
// created with.
const RATIO_TOLERANCE: f64 = 1e-3;

impl RevealLatch {
    pub fn is_entered(self) -> bool {
        self == RevealLatch::Entered
    }

    /// Feeds one observer entry into the latch. Returns `true` only on the
    /// single `Pending -> Entered` transition.
    pub fn observe(&mut self, is_intersecting: bool, visible_ratio: f64, threshold: f64) -> bool {
        if self.is_entered() || !is_intersecting {
            return false;
        }
        if visible_ratio + RATIO_TOLERANCE < threshold {
            return false;
        }
        *self = RevealLatch::Entered;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_once_threshold_is_visible() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(true, 0.1, 0.3));
        assert_eq!(latch, RevealLatch::Pending);
        assert!(latch.observe(true, 0.2999, 0.3));
        assert!(latch.is_entered());
    }

    #[test]
    fn ignores_non_intersecting_entries() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 1.0, 0.3));
        assert_eq!(latch, RevealLatch::Pending);
    }

    #[test]
    fn never_returns_to_pending() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.5, 0.3));
        assert!(!latch.observe(false, 0.0, 0.3));
        assert!(!latch.observe(true, 0.9, 0.3));
        assert_eq!(latch, RevealLatch::Entered);
    }
}
