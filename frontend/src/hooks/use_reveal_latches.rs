use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::latch::RevealLatch;

/// One latch per node, flipped to `Entered` the first time `threshold` of
/// the node is visible. Entered nodes are unobserved straight away and the
/// observer is disconnected on unmount.
#[hook]
pub fn use_reveal_latches(panels: Vec<NodeRef>, threshold: f64, enabled: bool) -> Vec<RevealLatch> {
    let count = panels.len();
    let latches = use_state_eq(|| vec![RevealLatch::Pending; count]);

    {
        let latches = latches.clone();
        use_effect_with_deps(
            move |(panels, threshold, enabled)| {
                let destructor: Box<dyn FnOnce()> = if !*enabled {
                    Box::new(|| ())
                } else {
                    let threshold = *threshold;
                    let panels = panels.clone();
                    let state = Rc::new(RefCell::new(seed_latches(&latches, panels.len())));

                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
                        let panels = panels.clone();
                        let state = state.clone();
                        let latches = latches.clone();
                        move |entries: Array, observer: IntersectionObserver| {
                            let mut changed = false;
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                let target = entry.target();
                                let Some(index) = panels
                                    .iter()
                                    .position(|panel| panel.cast::<Element>().as_ref() == Some(&target))
                                else {
                                    continue;
                                };
                                let mut state = state.borrow_mut();
                                if state[index].observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                                    observer.unobserve(&target);
                                    changed = true;
                                }
                            }
                            if changed {
                                latches.set(state.borrow().clone());
                            }
                        }
                    });

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            for (panel, latch) in panels.iter().zip(state.borrow().iter()) {
                                if latch.is_entered() {
                                    continue;
                                }
                                if let Some(element) = panel.cast::<Element>() {
                                    observer.observe(&element);
                                }
                            }
                            debug!("reveal observer watching {} panels", panels.len());
                            Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                                debug!("reveal observer released");
                            })
                        }
                        Err(_) => {
                            warn!("IntersectionObserver unavailable, revealing panels immediately");
                            latches.set(vec![RevealLatch::Entered; panels.len()]);
                            Box::new(|| ())
                        }
                    }
                };
                move || destructor()
            },
            (panels, threshold, enabled),
        );
    }

    (*latches).clone()
}

/// Latches for a fresh observer: panels that already entered stay entered,
/// panels added since the last run start pending.
fn seed_latches(current: &[RevealLatch], count: usize) -> Vec<RevealLatch> {
    (0..count)
        .map(|index| current.get(index).copied().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rerun_keeps_entered_panels() {
        let current = [RevealLatch::Entered, RevealLatch::Pending, RevealLatch::Entered];
        assert_eq!(seed_latches(&current, 3), current.to_vec());
    }

    #[test]
    fn added_panels_start_pending() {
        let seeded = seed_latches(&[RevealLatch::Entered], 3);
        assert_eq!(seeded, vec![RevealLatch::Entered, RevealLatch::Pending, RevealLatch::Pending]);
    }

    #[test]
    fn removed_panels_are_dropped() {
        let seeded = seed_latches(&[RevealLatch::Pending, RevealLatch::Entered], 1);
        assert_eq!(seeded, vec![RevealLatch::Pending]);
    }
}
