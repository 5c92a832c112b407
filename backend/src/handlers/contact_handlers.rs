use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, FromRequestParts, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::Future;
use lettre::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::mailer::{ContactEmail, MailError};
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::AppState;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const MESSAGE_MAX_CHARS: usize = 5000;

const RETRY_AFTER_SECS: u64 = 60;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid request body.")]
    InvalidBody(#[source] JsonRejection),
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("{field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },
    #[error("Too many requests. Please try again in a minute.")]
    RateLimited,
    #[error("Failed to send your message.")]
    Delivery(#[source] MailError),
}

impl ContactError {
    fn status(&self) -> StatusCode {
        match self {
            ContactError::InvalidBody(_)
            | ContactError::MissingField(_)
            | ContactError::InvalidEmail
            | ContactError::TooLong { .. } => StatusCode::BAD_REQUEST,
            ContactError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        match self {
            ContactError::RateLimited => (
                status,
                [(header::RETRY_AFTER, RETRY_AFTER_SECS.to_string())],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}

/// Identifies the client a request is rate limited under: the peer address
/// when the server knows it, otherwise the first `X-Forwarded-For` hop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let key = client_key(parts);
        async move { Ok(ClientKey(key)) }
    }
}

fn client_key(parts: &Parts) -> String {
    if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
        return format!("ip:{}", addr.ip());
    }

    parts
        .headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(|ip| format!("ip:{}", ip))
        .unwrap_or_else(|| "unknown".to_string())
}

fn require(value: &str, field: &'static str, max: usize) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    if value.chars().count() > max {
        return Err(ContactError::TooLong { field, max });
    }
    Ok(value.to_string())
}

/// Trims every field and checks it against the form's limits.
pub fn validate(request: &ContactRequest) -> Result<ContactEmail, ContactError> {
    let name = require(&request.name, "Name", NAME_MAX_CHARS)?;
    let email = require(&request.email, "Email", EMAIL_MAX_CHARS)?;
    let message = require(&request.message, "Message", MESSAGE_MAX_CHARS)?;

    // The mailer puts the address in Reply-To, so it has to parse there too.
    if !EMAIL_RE.is_match(&email) || email.parse::<Address>().is_err() {
        return Err(ContactError::InvalidEmail);
    }

    Ok(ContactEmail { name, email, message })
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ClientKey(client): ClientKey,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    if state.contact_limiter.check_key(&client).is_err() {
        warn!(client = %client, "contact form rate limit exceeded");
        return Err(ContactError::RateLimited);
    }

    let Json(request) = payload.map_err(|rejection| {
        warn!(client = %client, "unreadable contact request: {}", rejection);
        ContactError::InvalidBody(rejection)
    })?;

    let email = validate(&request).map_err(|e| {
        info!(client = %client, "contact request rejected: {}", e);
        e
    })?;

    if let Err(e) = state.mailer.send(email).await {
        error!(client = %client, "failed to deliver contact message: {}", e);
        return Err(ContactError::Delivery(e));
    }

    info!(client = %client, "contact message delivered");
    Ok(Json(ContactResponse {
        message: "Message sent successfully!".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Method, Request};
    use futures::future::BoxFuture;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::mailer::Mailer;
    use crate::build_router;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<ContactEmail>>,
        fail: bool,
    }

    impl Mailer for RecordingMailer {
        fn send(&self, email: ContactEmail) -> BoxFuture<'_, Result<(), MailError>> {
            Box::pin(async move {
                if self.fail {
                    let err = "not an address".parse::<Address>().unwrap_err();
                    return Err(MailError::Address(err));
                }
                self.sent.lock().unwrap().push(email);
                Ok(())
            })
        }
    }

    fn app_with(mailer: Arc<RecordingMailer>, rate: u32) -> axum::Router {
        let state = Arc::new(AppState::new(mailer, NonZeroU32::new(rate).unwrap()));
        build_router(state, None)
    }

    fn contact_request(body: &str, client: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", client)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const VALID: &str = r#"{"name":"  Ada Lovelace ","email":"ada@example.com","message":"Could you help with my calendar?"}"#;

    #[tokio::test]
    async fn valid_submission_is_mailed_trimmed() {
        let mailer = Arc::new(RecordingMailer::default());
        let response = app_with(mailer.clone(), 5)
            .oneshot(contact_request(VALID, "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["message"], "Message sent successfully!");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada Lovelace");
        assert_eq!(sent[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn blank_field_is_a_bad_request() {
        let mailer = Arc::new(RecordingMailer::default());
        let body = r#"{"name":"Ada","email":"ada@example.com","message":"   "}"#;
        let response = app_with(mailer.clone(), 5)
            .oneshot(contact_request(body, "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Message is required.");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let response = app_with(Arc::new(RecordingMailer::default()), 5)
            .oneshot(contact_request("{\"name\":", "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Invalid request body.");
    }

    #[tokio::test]
    async fn address_the_mailer_cannot_use_is_a_bad_request() {
        let mailer = Arc::new(RecordingMailer::default());
        let body = r#"{"name":"Ada","email":"a(b@example.com","message":"Hi"}"#;
        let response = app_with(mailer.clone(), 5)
            .oneshot(contact_request(body, "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["error"], "Please enter a valid email address.");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_bad_gateway() {
        let mailer = Arc::new(RecordingMailer {
            fail: true,
            ..Default::default()
        });
        let response = app_with(mailer, 5)
            .oneshot(contact_request(VALID, "203.0.113.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(read_json(response).await["error"], "Failed to send your message.");
    }

    #[tokio::test]
    async fn rate_limit_is_per_client() {
        let app = app_with(Arc::new(RecordingMailer::default()), 2);

        for _ in 0..2 {
            let response = app.clone().oneshot(contact_request(VALID, "198.51.100.1")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let limited = app.clone().oneshot(contact_request(VALID, "198.51.100.1")).await.unwrap();
        assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(limited.headers()[header::RETRY_AFTER], "60");

        let other = app.oneshot(contact_request(VALID, "198.51.100.2")).await.unwrap();
        assert_eq!(other.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let response = app_with(Arc::new(RecordingMailer::default()), 5)
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "ada",
            "ada@",
            "ada@example",
            "a da@example.com",
            "a(b@example.com",
            "ada..x@example.com",
            "a\"b@example.com",
        ] {
            assert!(
                matches!(validate(&request("Ada", email, "Hi")), Err(ContactError::InvalidEmail)),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn length_caps_count_characters() {
        let name = "é".repeat(NAME_MAX_CHARS);
        assert!(validate(&request(&name, "ada@example.com", "Hi")).is_ok());

        let too_long = "é".repeat(NAME_MAX_CHARS + 1);
        let err = validate(&request(&too_long, "ada@example.com", "Hi")).unwrap_err();
        assert_eq!(err.to_string(), "Name must be at most 100 characters.");
    }

    #[test]
    fn forwarded_for_uses_first_hop() {
        let (mut parts, _) = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(client_key(&parts), "ip:203.0.113.9");

        parts
            .extensions
            .insert(ConnectInfo("192.0.2.4:5000".parse::<SocketAddr>().unwrap()));
        assert_eq!(client_key(&parts), "ip:192.0.2.4");
    }
}
