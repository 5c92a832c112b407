use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod api;
mod styles;
mod reveal {
    pub mod progress;
    pub mod segments;
    pub mod presentation;
    pub mod latch;
    pub mod frame;
    pub mod strategy;
}
mod hooks {
    pub mod use_scroll_progress;
    pub mod use_reveal_latches;
    pub mod use_scroll_reveal;
    pub mod use_current_time;
}
mod components {
    pub mod modal;
    pub mod preloader;
    pub mod scroll_lock;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod features;
    pub mod contact;
}

use components::preloader::Preloader;
use sections::{
    about::AboutSection,
    contact::ContactSection,
    features::FeaturesSection,
    hero::HeroSection,
    services::ServicesSection,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <main class="page">
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <FeaturesSection />
            <ContactSection />
        </main>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <Preloader>
                    <Home />
                </Preloader>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
                </main>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{ styles::PAGE_STYLES }</style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
