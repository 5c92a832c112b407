use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Window};
use yew::prelude::*;

use crate::reveal::frame::FrameGate;
use crate::reveal::progress::{normalize, Progress, ScrollFrame};

const SAMPLED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Reads the tracked container's geometry. A container that is not mounted
/// yet has no geometry and reads as not started.
fn sample(window: &Window, node: &NodeRef, anchor: Option<f64>) -> Progress {
    let Some(element) = node.cast::<Element>() else {
        return Progress::START;
    };
    let rect = element.get_bounding_client_rect();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);

    let frame = ScrollFrame::new(rect.top(), rect.height(), viewport_height);
    normalize(match anchor {
        Some(fraction) => frame.anchored(fraction),
        None => frame,
    })
}

/// Global scroll-through progress of the element behind `node`.
///
/// Samples synchronously on mount, then on every scroll and resize through
/// passive listeners. Bursts of events are coalesced so the state is set at
/// most once per animation frame. With `enabled == false` nothing is
/// subscribed and the progress stays at 0.
#[hook]
pub fn use_scroll_progress(node: NodeRef, anchor: Option<f64>, enabled: bool) -> Progress {
    let progress = use_state_eq(|| Progress::START);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, anchor, enabled)| {
                let destructor: Box<dyn FnOnce()> = match (*enabled, web_sys::window()) {
                    (true, Some(window)) => {
                        let node = node.clone();
                        let anchor = *anchor;
                        let gate = Rc::new(RefCell::new(FrameGate::default()));

                        let on_frame = Rc::new(Closure::<dyn FnMut(f64)>::new({
                            let window = window.clone();
                            let node = node.clone();
                            let gate = gate.clone();
                            let progress = progress.clone();
                            move |_timestamp: f64| {
                                gate.borrow_mut().begin();
                                progress.set(sample(&window, &node, anchor));
                            }
                        }));

                        let on_event = Closure::<dyn FnMut()>::new({
                            let window = window.clone();
                            let gate = gate.clone();
                            let on_frame = on_frame.clone();
                            move || {
                                if !gate.borrow_mut().request() {
                                    return;
                                }
                                match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                                    Ok(handle) => gate.borrow_mut().scheduled(handle),
                                    Err(_) => {
                                        gate.borrow_mut().abandon();
                                        warn!("requestAnimationFrame refused, sampling skipped");
                                    }
                                }
                            }
                        });

                        // First sample before the browser paints, no deferred timer.
                        progress.set(sample(&window, &node, anchor));

                        let options = AddEventListenerOptions::new();
                        options.set_passive(true);
                        for event in SAMPLED_EVENTS {
                            if window
                                .add_event_listener_with_callback_and_add_event_listener_options(
                                    event,
                                    on_event.as_ref().unchecked_ref(),
                                    &options,
                                )
                                .is_err()
                            {
                                warn!("failed to subscribe to {} events", event);
                            }
                        }
                        debug!("scroll sampler attached");

                        Box::new(move || {
                            for event in SAMPLED_EVENTS {
                                let _ = window.remove_event_listener_with_callback(
                                    event,
                                    on_event.as_ref().unchecked_ref(),
                                );
                            }
                            if let Some(handle) = gate.borrow_mut().cancel() {
                                let _ = window.cancel_animation_frame(handle);
                            }
                            drop(on_frame);
                            debug!("scroll sampler released");
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            (node, anchor, enabled),
        );
    }

    *progress
}
