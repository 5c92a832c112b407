use super::latch::RevealLatch;
use super::progress::Progress;
use super::segments::SegmentLayout;

/// How a section turns scrolling into per-panel local progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRevealStrategy {
    /// Panels follow the container's scroll-through progress continuously,
    /// each inside its own segment.
    Continuous(SegmentLayout),
    /// Panels jump from hidden to shown once `threshold` of their height has
    /// been visible.
    Thresholded { threshold: f64 },
}

impl ScrollRevealStrategy {
    pub fn is_continuous(&self) -> bool {
        matches!(self, ScrollRevealStrategy::Continuous(_))
    }

    pub fn threshold(&self) -> Option<f64> {
        match self {
            ScrollRevealStrategy::Thresholded { threshold } => Some(*threshold),
            ScrollRevealStrategy::Continuous(_) => None,
        }
    }

    /// Local progress per panel. Continuous sections read `global`;
    /// thresholded sections read `latches`, one per panel.
    pub fn local_progress(&self, global: Progress, latches: &[RevealLatch]) -> Vec<Progress> {
        match self {
            ScrollRevealStrategy::Continuous(layout) => layout.allocate(global),
            ScrollRevealStrategy::Thresholded { .. } => latches
                .iter()
                .map(|latch| {
                    if latch.is_entered() {
                        Progress::END
                    } else {
                        Progress::START
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_ignores_latches() {
        let strategy = ScrollRevealStrategy::Continuous(SegmentLayout::equal(2));
        let local = strategy.local_progress(Progress::new(0.75), &[RevealLatch::Pending]);
        assert_eq!(local.len(), 2);
        assert_eq!(local[0], Progress::END);
        assert!((local[1].value() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn thresholded_maps_latches_to_extremes() {
        let strategy = ScrollRevealStrategy::Thresholded { threshold: 0.3 };
        let local = strategy.local_progress(
            Progress::new(0.9),
            &[RevealLatch::Entered, RevealLatch::Pending, RevealLatch::Entered],
        );
        assert_eq!(local, vec![Progress::END, Progress::START, Progress::END]);
        assert_eq!(strategy.threshold(), Some(0.3));
        assert!(!strategy.is_continuous());
    }
}
