use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::reveal::progress::Progress;
use crate::reveal::strategy::ScrollRevealStrategy;

use super::use_reveal_latches::use_reveal_latches;
use super::use_scroll_progress::use_scroll_progress;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealFrame {
    pub global: Progress,
    pub local: Vec<Progress>,
}

/// Per-panel local progress for a section, whichever strategy it picked.
///
/// Both samplers are always called so the hook order stays stable; only
/// the one matching `strategy` subscribes to anything.
#[hook]
pub fn use_scroll_reveal(
    strategy: ScrollRevealStrategy,
    container: NodeRef,
    panels: Vec<NodeRef>,
) -> RevealFrame {
    let continuous = strategy.is_continuous();
    let threshold = strategy.threshold().unwrap_or(REVEAL_THRESHOLD);

    let global = use_scroll_progress(container, None, continuous);
    let latches = use_reveal_latches(panels, threshold, !continuous);

    RevealFrame {
        global,
        local: strategy.local_progress(global, &latches),
    }
}
