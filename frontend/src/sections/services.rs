use yew::prelude::*;

use crate::components::modal::{DetailList, Modal};
use crate::config::{services_motion, services_strategy};
use crate::content::SERVICES;
use crate::hooks::use_scroll_reveal::use_scroll_reveal;

/// Stacked service cards inside a tall sticky container. Scrolling through
/// the container drives each card through its own segment.
#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let container = use_node_ref();
    let strategy = use_memo(|count| services_strategy(*count), SERVICES.len());
    let motion = use_memo(|_| services_motion(), ());

    let reveal = use_scroll_reveal(*strategy, container.clone(), Vec::new());
    let states = motion.present_all(&reveal.local);

    html! {
        <div ref={container} id="services" class="services-section" style={format!("height: {}vh;", (SERVICES.len() + 1) * 100)}>
            <div class="services-sticky">
                <div class="services-stage">
                    { for SERVICES.iter().zip(states).enumerate().map(|(index, (service, state))| html! {
                        <div
                            key={service.id}
                            class="service-card"
                            style={format!(
                                "background: {}; z-index: {}; {}",
                                service.background,
                                index + 1,
                                state.style()
                            )}
                        >
                            <div class="service-card-inner">
                                <div class="service-copy">
                                    <h2>{ service.title }</h2>
                                    <p>{ service.description }</p>
                                    <Modal
                                        title={service.title}
                                        trigger={html! {
                                            <span class="details-pill">
                                                <span>{"View Details"}</span>
                                                <span aria-hidden="true">{"→"}</span>
                                            </span>
                                        }}
                                    >
                                        <DetailList items={service.details} />
                                    </Modal>
                                </div>
                                <div class="service-visual">
                                    <img
                                        src={service.image}
                                        alt={service.title}
                                        loading={if index == 0 { "eager" } else { "lazy" }}
                                    />
                                    <div class="service-number">{ format!("0{}", service.id) }</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
