use yew::prelude::*;

use crate::config::{slide_motion, thresholded_strategy};
use crate::content::{ABOUT_HEADLINE, ABOUT_PARAGRAPHS};
use crate::hooks::use_scroll_reveal::use_scroll_reveal;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let container = use_node_ref();
    let blocks = use_memo(
        |count| (0..=*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        ABOUT_PARAGRAPHS.len(),
    );
    let motion = use_memo(|_| slide_motion(), ());

    let reveal = use_scroll_reveal(thresholded_strategy(), container.clone(), (*blocks).clone());
    let states = motion.present_all(&reveal.local);
    let style_of = |index: usize| states.get(index).map(|state| state.style()).unwrap_or_default();

    html! {
        <section ref={container} id="about" class="about-section">
            <h2 ref={blocks[0].clone()} class="about-headline reveal-block" style={style_of(0)}>
                { ABOUT_HEADLINE }
            </h2>
            <div class="about-copy">
                { for ABOUT_PARAGRAPHS.iter().enumerate().map(|(index, paragraph)| html! {
                    <p ref={blocks[index + 1].clone()} class="reveal-block" style={style_of(index + 1)}>
                        { *paragraph }
                    </p>
                }) }
            </div>
        </section>
    }
}
