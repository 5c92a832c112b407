use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, error, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
}
mod api {
    pub mod mailer;
}
mod jobs {
    pub mod scheduler;
}

use api::mailer::{Mailer, SmtpMailer};
use config::Config;
use handlers::contact_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
    /// Contact submissions per client key.
    contact_limiter: DefaultKeyedRateLimiter<String>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, rate_per_minute: NonZeroU32) -> Self {
        Self {
            mailer,
            contact_limiter: RateLimiter::keyed(Quota::per_minute(rate_per_minute)),
        }
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact));

    // Anything else falls through to the built frontend, if one is served.
    if let Some(dir) = static_dir {
        app = app.fallback_service(
            ServeDir::new(dir).not_found_service(ServeFile::new(dir.join("index.html"))),
        );
    }

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let mailer = SmtpMailer::new(&config)?;
    let state = Arc::new(AppState::new(Arc::new(mailer), config.rate_per_minute));

    if let Some(dir) = &config.static_dir {
        info!("Serving frontend from {}", dir.display());
    }
    let app = build_router(state.clone(), config.static_dir.as_deref());

    // Start the scheduler
    let state_for_scheduler = state.clone();
    tokio::spawn(async move {
        if let Err(e) = jobs::scheduler::start_scheduler(state_for_scheduler).await {
            error!("Scheduler failed: {:?}", e);
        }
    });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
