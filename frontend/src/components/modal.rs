use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew::{create_portal, Children, Properties};

use super::scroll_lock::{lock_body_scroll, unlock_body_scroll};

const FOCUSABLE: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Which focusable element Tab should land on to keep focus inside the
/// dialog, or `None` when the browser's own move already stays inside.
pub fn focus_wrap_target(active: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

fn trap_tab(dialog: &Element, event: &KeyboardEvent) {
    let Ok(nodes) = dialog.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusable: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    let active_index = active.as_ref().and_then(|active| {
        focusable
            .iter()
            .position(|element| AsRef::<Element>::as_ref(element) == active)
    });

    if let Some(target) = focus_wrap_target(active_index, focusable.len(), event.shift_key()) {
        event.prevent_default();
        let _ = focusable[target].focus();
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    /// Content of the button that opens the dialog.
    pub trigger: Html,
    #[prop_or_default]
    pub children: Children,
}

/// Details dialog: opens from its trigger, closes on Escape, backdrop click
/// or the close button, keeps Tab inside while open and hands focus back to
/// the trigger afterwards.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let is_open = use_state(|| false);
    let trigger_ref = use_node_ref();
    let dialog_ref = use_node_ref();
    let close_ref = use_node_ref();
    let was_open = use_mut_ref(|| false);

    {
        let trigger_ref = trigger_ref.clone();
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    *was_open.borrow_mut() = true;
                    if let Some(button) = close_ref.cast::<HtmlElement>() {
                        let _ = button.focus();
                    }
                } else if was_open.replace(false) {
                    if let Some(trigger) = trigger_ref.cast::<HtmlElement>() {
                        let _ = trigger.focus();
                    }
                }
                || ()
            },
            *is_open,
        );
    }

    {
        let open_now = *is_open;
        let is_open = is_open.clone();
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = match (*open, web_sys::window().and_then(|w| w.document())) {
                    (true, Some(document)) => {
                        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                            match event.key().as_str() {
                                "Escape" => is_open.set(false),
                                "Tab" => {
                                    if let Some(dialog) = dialog_ref.cast::<Element>() {
                                        trap_tab(&dialog, &event);
                                    }
                                }
                                _ => {}
                            }
                        });
                        if document
                            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("dialog keyboard handling unavailable");
                        }
                        lock_body_scroll();

                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                on_keydown.as_ref().unchecked_ref(),
                            );
                            unlock_body_scroll();
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            open_now,
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    // Rendered under <body> so transformed ancestors cannot trap the fixed overlay.
    let dialog = if *is_open {
        let overlay = html! {
            <>
                <div class="modal-backdrop" aria-hidden="true"></div>
                <div
                    ref={dialog_ref}
                    class="modal-frame"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="modal-title"
                    onclick={close.clone()}
                >
                    <div class="modal-panel" onclick={keep_open}>
                        <button ref={close_ref} class="modal-close" onclick={close} aria-label="Close dialog">
                            {"✕"}
                        </button>
                        <div class="modal-body">
                            <h2 id="modal-title">{ props.title.clone() }</h2>
                            <div class="modal-rule"></div>
                            { for props.children.iter() }
                        </div>
                    </div>
                </div>
            </>
        };
        match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            Some(body) => create_portal(overlay, body.into()),
            None => overlay,
        }
    } else {
        html! {}
    };

    html! {
        <>
            <button
                ref={trigger_ref}
                class="modal-trigger"
                onclick={open}
                aria-haspopup="dialog"
                aria-label={format!("View details about {}", props.title)}
            >
                { props.trigger.clone() }
            </button>
            { dialog }
        </>
    }
}

/// Bulleted list used inside the details dialogs.
#[derive(Properties, PartialEq)]
pub struct DetailListProps {
    pub items: &'static [&'static str],
}

#[function_component(DetailList)]
pub fn detail_list(props: &DetailListProps) -> Html {
    html! {
        <ul class="detail-list">
            { for props.items.iter().map(|item| html! {
                <li>
                    <span class="detail-bullet">{"•"}</span>
                    <p>{ *item }</p>
                </li>
            }) }
        </ul>
    }
}
