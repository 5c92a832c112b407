use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew::{Children, Properties};
use yew_hooks::prelude::*;

use super::scroll_lock::{lock_body_scroll, unlock_body_scroll};
use crate::config::{GREETING_INTERVAL_MS, PRELOADER_HOLD_MS};
use crate::content::GREETINGS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Greeting(usize),
    /// Last greeting stays on screen briefly before the page shows.
    Holding,
    Done,
}

impl PreloaderPhase {
    pub fn advance(self, greetings: usize) -> Self {
        match self {
            PreloaderPhase::Greeting(index) if index + 1 < greetings => PreloaderPhase::Greeting(index + 1),
            PreloaderPhase::Greeting(_) => PreloaderPhase::Holding,
            PreloaderPhase::Holding | PreloaderPhase::Done => PreloaderPhase::Done,
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let phase = use_state_eq(|| PreloaderPhase::Greeting(0));

    {
        let phase = phase.clone();
        let millis = match *phase {
            PreloaderPhase::Greeting(_) => GREETING_INTERVAL_MS,
            _ => 0,
        };
        use_interval(move || phase.set(phase.advance(GREETINGS.len())), millis);
    }

    {
        let current = *phase;
        let phase = phase.clone();
        use_effect_with_deps(
            move |current| {
                let hold = match current {
                    PreloaderPhase::Greeting(0) => {
                        lock_body_scroll();
                        scroll_to_top();
                        None
                    }
                    PreloaderPhase::Holding => Some(Timeout::new(PRELOADER_HOLD_MS, move || {
                        phase.set(PreloaderPhase::Done)
                    })),
                    PreloaderPhase::Done => {
                        unlock_body_scroll();
                        scroll_to_top();
                        debug!("preloader finished");
                        None
                    }
                    PreloaderPhase::Greeting(_) => None,
                };
                // Dropping the timeout cancels it.
                move || drop(hold)
            },
            current,
        );
    }

    use_unmount(unlock_body_scroll);

    match *phase {
        PreloaderPhase::Done => html! { <>{ for props.children.iter() }</> },
        PreloaderPhase::Greeting(index) => html! {
            <div class="preloader">
                <div class="preloader-greeting">{ GREETINGS[index] }</div>
            </div>
        },
        PreloaderPhase::Holding => html! {
            <div class="preloader">
                <div class="preloader-greeting">{ GREETINGS[GREETINGS.len() - 1] }</div>
            </div>
        },
    }
}
