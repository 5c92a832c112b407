use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{submit_contact, ContactRequest, SubmitOutcome};
use crate::components::scroll_lock::{lock_body_scroll, unlock_body_scroll};
use crate::config::{CONTACT_CLOSE_DELAY_MS, REVEAL_THRESHOLD};
use crate::content::{CONTACT_INFO, OWNER_NAME};
use crate::hooks::use_current_time::use_current_time;
use crate::hooks::use_reveal_latches::use_reveal_latches;

const SENT_FALLBACK: &str = "Message sent successfully!";
const REJECTED_FALLBACK: &str = "Failed to send your message.";
const FAILED_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormStatus {
    pub kind: Option<StatusKind>,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub enum ContactAction {
    Open,
    Close,
    Edit(Field, String),
    Submit,
    Finished(SubmitOutcome),
}

/// Everything the contact overlay shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactRequest,
    pub status: FormStatus,
    pub submitting: bool,
    pub open: bool,
}

impl ContactForm {
    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Open => self.open = true,
            ContactAction::Close => self.open = false,
            ContactAction::Edit(field, value) => match field {
                Field::Name => self.fields.name = value,
                Field::Email => self.fields.email = value,
                Field::Message => self.fields.message = value,
            },
            ContactAction::Submit => self.submitting = true,
            ContactAction::Finished(outcome) => {
                self.submitting = false;
                self.status = match outcome {
                    SubmitOutcome::Sent(message) => {
                        // Only a delivered message clears what the visitor typed.
                        self.fields = ContactRequest::default();
                        FormStatus {
                            kind: Some(StatusKind::Success),
                            message: message.unwrap_or_else(|| SENT_FALLBACK.to_string()),
                        }
                    }
                    SubmitOutcome::Rejected(error) => FormStatus {
                        kind: Some(StatusKind::Error),
                        message: error.unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
                    },
                    SubmitOutcome::Failed => FormStatus {
                        kind: Some(StatusKind::Error),
                        message: FAILED_MESSAGE.to_string(),
                    },
                };
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Offset of the "Get in touch" button toward the pointer, given the
/// pointer's distance from the button centre.
pub fn magnetic_offset(dx: f64, dy: f64) -> (f64, f64) {
    (dx.clamp(-40.0, 40.0) * 0.8, dy.clamp(-10.0, 10.0) * 0.5)
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);
    let section_ref = use_node_ref();
    let button_ref = use_node_ref();
    let button_offset = use_state_eq(|| (0.0_f64, 0.0_f64));
    let current_time = use_current_time();

    let line_revealed = use_reveal_latches(vec![section_ref.clone()], REVEAL_THRESHOLD, true)
        .first()
        .map_or(false, |latch| latch.is_entered());

    {
        use_effect_with_deps(
            move |open| {
                if *open {
                    lock_body_scroll();
                }
                let open = *open;
                move || {
                    if open {
                        unlock_body_scroll();
                    }
                }
            },
            form.open,
        );
    }

    let open_form = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactAction::Open))
    };
    let close_form = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactAction::Close))
    };

    let on_button_move = {
        let button_ref = button_ref.clone();
        let button_offset = button_offset.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(button) = button_ref.cast::<Element>() else {
                return;
            };
            let rect = button.get_bounding_client_rect();
            let dx = e.client_x() as f64 - rect.left() - rect.width() / 2.0;
            let dy = e.client_y() as f64 - rect.top() - rect.height() / 2.0;
            button_offset.set(magnetic_offset(dx, dy));
        })
    };
    let on_button_leave = {
        let button_offset = button_offset.clone();
        Callback::from(move |_: MouseEvent| button_offset.set((0.0, 0.0)))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting {
                return;
            }
            let request = form.fields.clone();
            form.dispatch(ContactAction::Submit);

            let form = form.clone();
            spawn_local(async move {
                let outcome = submit_contact(&request).await;
                let delivered = matches!(outcome, SubmitOutcome::Sent(_));
                info!("contact form finished, delivered: {}", delivered);
                form.dispatch(ContactAction::Finished(outcome));
                if delivered {
                    Timeout::new(CONTACT_CLOSE_DELAY_MS, move || form.dispatch(ContactAction::Close)).forget();
                }
            });
        })
    };

    let edit_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };
    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let (offset_x, offset_y) = *button_offset;
    let button_style = format!("transform: translate({offset_x}px, {offset_y}px) translateY(-50%);");

    let status = match form.status.kind {
        Some(StatusKind::Success) => html! { <div class="form-status success">{ form.status.message.clone() }</div> },
        Some(StatusKind::Error) => html! { <div class="form-status error">{ form.status.message.clone() }</div> },
        None => html! {},
    };

    html! {
        <>
            <section id="contact" class="contact-section" ref={section_ref}>
                <div class="contact-inner">
                    <div class="contact-heading">
                        <div class="contact-heading-row">
                            <img class="contact-avatar" src="/images/Profiel-pic.jpg" alt={OWNER_NAME} width="150" height="150" />
                            <h1>{"Let's work"}</h1>
                        </div>
                        <h1>{"together"}</h1>
                    </div>

                    <div class="contact-divider">
                        <div class={classes!("contact-line", line_revealed.then(|| "revealed"))}></div>
                        <div class="magnetic-slot">
                            <button
                                ref={button_ref}
                                class="magnetic-button"
                                style={button_style}
                                onclick={open_form.clone()}
                                onmousemove={on_button_move}
                                onmouseleave={on_button_leave}
                            >
                                <span>{"Get in touch"}</span>
                            </button>
                        </div>
                    </div>

                    <div class="contact-links">
                        <a class="pill-link" href={format!("mailto:{}", CONTACT_INFO.email)}>
                            <span>{ CONTACT_INFO.email }</span>
                        </a>
                        <a class="pill-link" href={format!("tel:{}", CONTACT_INFO.phone)}>
                            <span>{ CONTACT_INFO.phone }</span>
                        </a>
                        <button class="magnetic-button compact" onclick={open_form}>{"Get in touch"}</button>
                    </div>

                    <footer class="contact-footer">
                        <div class="footer-meta">
                            <div>
                                <h4>{"Version"}</h4>
                                <p>{"2026 © Edition"}</p>
                            </div>
                            <div>
                                <h4>{"Local time"}</h4>
                                <p>{ format!("{} GMT+1", current_time) }</p>
                            </div>
                        </div>
                        <div>
                            <h4>{"Socials"}</h4>
                            <div class="footer-socials">
                                <a href={CONTACT_INFO.instagram} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                                <a href={CONTACT_INFO.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            </div>
                        </div>
                    </footer>
                </div>
            </section>

            if form.open {
                <div class="contact-overlay">
                    <button class="contact-overlay-close" onclick={close_form} aria-label="Close contact form">{"×"}</button>
                    <div class="contact-overlay-inner">
                        <h3>{"Get in touch"}</h3>
                        <form onsubmit={on_submit}>
                            <div class="form-field">
                                <label for="name">{"Name"}</label>
                                <input type="text" id="name" name="name" required=true placeholder="Your name"
                                    value={form.fields.name.clone()} oninput={edit_input(Field::Name)} />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input type="email" id="email" name="email" required=true placeholder="your@email.com"
                                    value={form.fields.email.clone()} oninput={edit_input(Field::Email)} />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea id="message" name="message" required=true rows="5" placeholder="Your message..."
                                    value={form.fields.message.clone()} oninput={edit_message} />
                            </div>
                            <div class="form-actions">
                                { status }
                                <button type="submit" class="form-submit" disabled={form.submitting}>
                                    { if form.submitting { "Sending..." } else { "Send Message" } }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Open);
        form.apply(ContactAction::Edit(Field::Name, "Ada".into()));
        form.apply(ContactAction::Edit(Field::Email, "ada@example.com".into()));
        form.apply(ContactAction::Edit(Field::Message, "Need help with invoices".into()));
        form
    }

    #[test]
    fn network_failure_keeps_fields_and_reenables_submit() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        assert!(form.submitting);

        form.apply(ContactAction::Finished(SubmitOutcome::Failed));
        assert!(!form.submitting);
        assert!(form.open);
        assert_eq!(form.status.kind, Some(StatusKind::Error));
        assert_eq!(form.status.message, "An unexpected error occurred.");
        assert_eq!(form.fields.name, "Ada");
        assert_eq!(form.fields.email, "ada@example.com");
        assert_eq!(form.fields.message, "Need help with invoices");
    }

    #[test]
    fn rejection_shows_server_error_or_fallback() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::Finished(SubmitOutcome::Rejected(Some("Invalid email address".into()))));
        assert_eq!(form.status.message, "Invalid email address");
        assert_eq!(form.fields.name, "Ada");

        form.apply(ContactAction::Finished(SubmitOutcome::Rejected(None)));
        assert_eq!(form.status.message, "Failed to send your message.");
        assert_eq!(form.status.kind, Some(StatusKind::Error));
    }

    #[test]
    fn delivery_clears_fields_and_reports_success() {
        let mut form = filled();
        form.apply(ContactAction::Submit);
        form.apply(ContactAction::Finished(SubmitOutcome::Sent(None)));
        assert!(!form.submitting);
        assert_eq!(form.status.kind, Some(StatusKind::Success));
        assert_eq!(form.status.message, "Message sent successfully!");
        assert_eq!(form.fields, ContactRequest::default());
    }

    #[test]
    fn magnetic_offset_is_clamped_and_scaled() {
        assert_eq!(magnetic_offset(10.0, 4.0), (8.0, 2.0));
        assert_eq!(magnetic_offset(500.0, -300.0), (32.0, -5.0));
        assert_eq!(magnetic_offset(-41.0, 10.5), (-32.0, 5.0));
    }
}
