use crate::reveal::presentation::{MotionProfile, PanelMotion};
use crate::reveal::segments::SegmentLayout;
use crate::reveal::strategy::ScrollRevealStrategy;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

// Scroll reveal tuning. Every section reads these instead of its own literals.

/// Segment overlap of the stacked service cards. 0 keeps the segments
/// contiguous: one card moves at a time.
pub const SERVICES_STAGGER_OVERLAP: f64 = 0.0;
/// How much a card is shrunk before its segment starts.
pub const CARD_SCALE_AMPLITUDE: f64 = 0.05;
/// Vertical travel of the cards that slide in, in percent of viewport height.
pub const CARD_TRANSLATE_AMPLITUDES: [f64; 2] = [100.0, 110.0];
/// Share of a panel that must be visible before a thresholded reveal fires.
pub const REVEAL_THRESHOLD: f64 = 0.3;
/// Vertical travel of a pending slide or line, in percent of viewport height.
pub const SLIDE_TRANSLATE_AMPLITUDE: f64 = 12.0;
/// Viewport line the features timeline is measured against.
pub const TIMELINE_ANCHOR: f64 = 0.5;

/// Hero marquee speed in pixels per millisecond.
pub const MARQUEE_SPEED: f64 = 0.15;

pub const GREETING_INTERVAL_MS: u32 = 250;
pub const PRELOADER_HOLD_MS: u32 = 200;
/// The contact overlay closes this long after a successful submit.
pub const CONTACT_CLOSE_DELAY_MS: u32 = 2_000;
pub const CLOCK_REFRESH_MS: u32 = 60_000;

pub fn services_strategy(cards: usize) -> ScrollRevealStrategy {
    ScrollRevealStrategy::Continuous(SegmentLayout::new(cards, SERVICES_STAGGER_OVERLAP))
}

/// The first card stays put and the later ones slide over it.
pub fn services_motion() -> MotionProfile {
    let mut panels = vec![PanelMotion::anchored(CARD_SCALE_AMPLITUDE)];
    panels.extend(
        CARD_TRANSLATE_AMPLITUDES
            .iter()
            .map(|amplitude| PanelMotion::sliding(CARD_SCALE_AMPLITUDE, *amplitude)),
    );
    let last = CARD_TRANSLATE_AMPLITUDES[CARD_TRANSLATE_AMPLITUDES.len() - 1];
    MotionProfile::new(panels, PanelMotion::sliding(CARD_SCALE_AMPLITUDE, last))
}

pub fn thresholded_strategy() -> ScrollRevealStrategy {
    ScrollRevealStrategy::Thresholded {
        threshold: REVEAL_THRESHOLD,
    }
}

pub fn slide_motion() -> MotionProfile {
    MotionProfile::uniform(PanelMotion::sliding(0.0, SLIDE_TRANSLATE_AMPLITUDE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::progress::Progress;

    #[test]
    fn first_service_card_is_anchored() {
        let motion = services_motion();
        assert!(motion.motion(0).anchored);
        assert!(!motion.motion(1).anchored);
        assert_eq!(motion.present(Progress::START, 2).translate_y, 110.0);
    }

    #[test]
    fn contact_endpoint_targets_api_route() {
        assert!(contact_endpoint().ends_with("/api/contact"));
    }
}
