use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::MARQUEE_SPEED;
use crate::content::{CONTACT_INFO, OWNER_NAME};

/// Horizontal position of the endlessly scrolling name strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Marquee {
    position: f64,
    last_timestamp: Option<f64>,
}

impl Marquee {
    /// Moves left by `speed` px/ms since the previous frame and jumps back
    /// to the start once `wrap_width` has been covered. The strip repeats
    /// its text, so half its scroll width is one seamless loop.
    pub fn advance(&mut self, timestamp: f64, speed: f64, wrap_width: f64) -> f64 {
        let elapsed = self
            .last_timestamp
            .map_or(0.0, |previous| (timestamp - previous).max(0.0));
        self.last_timestamp = Some(timestamp);
        self.position -= speed * elapsed;
        if wrap_width > 0.0 && self.position.abs() > wrap_width {
            self.position = 0.0;
        }
        self.position
    }
}

#[function_component(NameMarquee)]
fn name_marquee() -> Html {
    let strip_ref = use_node_ref();
    let offset = use_state_eq(|| 0.0_f64);

    {
        let strip_ref = strip_ref.clone();
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let marquee = Rc::new(RefCell::new(Marquee::default()));
                        let handle = Rc::new(Cell::new(None::<i32>));
                        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

                        *frame.borrow_mut() = Some(Closure::new({
                            let window = window.clone();
                            let frame = frame.clone();
                            let handle = handle.clone();
                            move |timestamp: f64| {
                                let wrap_width = strip_ref
                                    .cast::<Element>()
                                    .map_or(0.0, |strip| strip.scroll_width() as f64 / 2.0);
                                offset.set(marquee.borrow_mut().advance(timestamp, MARQUEE_SPEED, wrap_width));
                                if let Some(next) = frame.borrow().as_ref() {
                                    handle.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
                                }
                            }
                        }));

                        if let Some(first) = frame.borrow().as_ref() {
                            handle.set(window.request_animation_frame(first.as_ref().unchecked_ref()).ok());
                        }
                        debug!("hero marquee started");

                        Box::new(move || {
                            if let Some(id) = handle.take() {
                                let _ = window.cancel_animation_frame(id);
                            }
                            // Breaks the closure's reference to itself.
                            frame.borrow_mut().take();
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    let repeated = format!("{OWNER_NAME} — ").repeat(6);

    html! {
        <div class="hero-marquee">
            <div ref={strip_ref} class="hero-marquee-strip" style={format!("transform: translateX({:.2}px);", *offset)}>
                { repeated }
            </div>
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero">
            <a href="#about" class="skip-link">{"Skip to main content"}</a>

            <nav aria-label="Main navigation" class="hero-nav">
                <div class="hero-signature">
                    <span class="signature-short">{"© Code by Fares"}</span>
                    <span class="signature-full">{ format!("© {OWNER_NAME}") }</span>
                </div>
                <div class="hero-nav-links">
                    <a href="#services" class="nav-pill">{"Work"}</a>
                    <a href="#about" class="nav-pill">{"About"}</a>
                    <a href="#contact" class="nav-pill">{"Contact"}</a>
                </div>
            </nav>

            <div class="hero-image">
                <img src="/images/My Pic.jpg" alt={OWNER_NAME} />
                <div class="hero-image-shade"></div>
            </div>

            <div class="hero-location">
                <div class="hero-location-text">
                    <div>{"Located"}</div>
                    <div>{"in"}</div>
                    <div>{ CONTACT_INFO.location }</div>
                </div>
                <div class="hero-globe">{"🌐"}</div>
            </div>

            <div class="hero-tagline">
                <div>{"Remote Virtual Assistant"}</div>
                <div>{"& Data Entry"}</div>
            </div>

            <div class="hero-scroll-hint" aria-hidden="true">{"↓"}</div>

            <NameMarquee />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_records_the_clock() {
        let mut marquee = Marquee::default();
        assert_eq!(marquee.advance(1_000.0, 0.15, 500.0), 0.0);
        assert!((marquee.advance(1_100.0, 0.15, 500.0) + 15.0).abs() < 1e-9);
    }

    #[test]
    fn wraps_after_half_the_strip() {
        let mut marquee = Marquee::default();
        marquee.advance(0.0, 0.15, 100.0);
        assert!((marquee.advance(600.0, 0.15, 100.0) + 90.0).abs() < 1e-9);
        assert_eq!(marquee.advance(700.0, 0.15, 100.0), 0.0);
    }

    #[test]
    fn clock_going_backwards_does_not_reverse() {
        let mut marquee = Marquee::default();
        marquee.advance(500.0, 0.15, 0.0);
        let before = marquee.advance(600.0, 0.15, 0.0);
        assert_eq!(marquee.advance(550.0, 0.15, 0.0), before);
    }
}
