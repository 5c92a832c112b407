use yew::prelude::*;

use crate::components::modal::{DetailList, Modal};
use crate::config::{slide_motion, thresholded_strategy, TIMELINE_ANCHOR};
use crate::content::FEATURES;
use crate::hooks::use_scroll_progress::use_scroll_progress;
use crate::hooks::use_scroll_reveal::use_scroll_reveal;

/// Vertical position of the timeline dot next to slide `index`, in percent
/// of the section height. Each dot sits in the middle of its slide.
pub fn timeline_dot_top(index: usize, slides: usize) -> f64 {
    if slides == 0 {
        return 0.0;
    }
    (index as f64 + 0.5) / slides as f64 * 100.0
}

/// Alternating image/text slides along a timeline. Each slide reveals once
/// when enough of it is visible; the timeline fills with anchored progress.
#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section = use_node_ref();
    let slides = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        FEATURES.len(),
    );
    let motion = use_memo(|_| slide_motion(), ());

    let reveal = use_scroll_reveal(thresholded_strategy(), section.clone(), (*slides).clone());
    let timeline = use_scroll_progress(section.clone(), Some(TIMELINE_ANCHOR), true);
    let states = motion.present_all(&reveal.local);

    html! {
        <section ref={section} id="features" class="features-section" style={format!("height: {}vh;", FEATURES.len() * 100)}>
            <div class="timeline-track">
                <div class="timeline-fill" style={format!("height: {:.2}%;", timeline.value() * 100.0)}></div>
            </div>
            { for (0..FEATURES.len()).map(|index| html! {
                <div class="timeline-dot" style={format!("top: {:.2}%;", timeline_dot_top(index, FEATURES.len()))}></div>
            }) }

            { for FEATURES.iter().zip(states).enumerate().map(|(index, (feature, state))| {
                let layout = if feature.reverse { "feature-slide reversed" } else { "feature-slide" };
                html! {
                    <div key={index} ref={slides[index].clone()} class={layout}>
                        <div class="slide-img" style={state.style()}>
                            <img src={feature.image} alt={feature.highlight} loading="lazy" />
                        </div>
                        <div class="slide-divider"></div>
                        <div class="slide-text" style={state.style()}>
                            <h2><span class="highlight">{ feature.highlight }</span></h2>
                            <p>{ feature.text }</p>
                            <Modal
                                title={feature.highlight}
                                trigger={html! {
                                    <span class="details-pill dark">
                                        <span>{"Detail"}</span>
                                        <span aria-hidden="true">{"→"}</span>
                                    </span>
                                }}
                            >
                                <DetailList items={feature.details} />
                            </Modal>
                        </div>
                    </div>
                }
            }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_sit_mid_slide() {
        let tops: Vec<f64> = (0..3).map(|index| timeline_dot_top(index, 3)).collect();
        assert!((tops[0] - 16.6667).abs() < 1e-3);
        assert!((tops[1] - 50.0).abs() < 1e-9);
        assert!((tops[2] - 83.3333).abs() < 1e-3);
        assert_eq!(timeline_dot_top(0, 0), 0.0);
    }
}
