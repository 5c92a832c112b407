use std::fmt;

use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ContactReply {
    message: Option<String>,
    error: Option<String>,
}

/// How a contact submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx, carrying the server's `message` if it sent one.
    Sent(Option<String>),
    /// Non-2xx, carrying the server's `error` if it sent one.
    Rejected(Option<String>),
    /// Network failure or an unreadable reply.
    Failed,
}

pub async fn submit_contact(request: &ContactRequest) -> SubmitOutcome {
    let pending = match Request::post(&config::contact_endpoint()).json(request) {
        Ok(pending) => pending,
        Err(e) => {
            warn!("could not encode contact request: {}", e);
            return SubmitOutcome::Failed;
        }
    };

    let response = match pending.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("contact request failed: {}", e);
            return SubmitOutcome::Failed;
        }
    };

    let ok = response.ok();
    let status = response.status();
    classify(ok, status, response.json::<ContactReply>().await)
}

/// Maps the status and decoded body of a contact reply to an outcome.
fn classify<E: fmt::Display>(ok: bool, status: u16, reply: Result<ContactReply, E>) -> SubmitOutcome {
    match reply {
        Ok(reply) if ok => {
            info!("contact message accepted");
            SubmitOutcome::Sent(reply.message)
        }
        Ok(reply) => {
            warn!("contact message rejected with status {}", status);
            SubmitOutcome::Rejected(reply.error)
        }
        Err(e) => {
            warn!("unreadable contact reply (status {}): {}", status, e);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(message: Option<&str>, error: Option<&str>) -> Result<ContactReply, &'static str> {
        Ok(ContactReply {
            message: message.map(str::to_string),
            error: error.map(str::to_string),
        })
    }

    #[test]
    fn success_carries_server_message() {
        let outcome = classify(true, 200, reply(Some("Message sent successfully!"), None));
        assert_eq!(outcome, SubmitOutcome::Sent(Some("Message sent successfully!".to_string())));
    }

    #[test]
    fn rejection_carries_server_error() {
        let error = "Too many requests. Please try again in a minute.";
        let outcome = classify(false, 429, reply(None, Some(error)));
        assert_eq!(outcome, SubmitOutcome::Rejected(Some(error.to_string())));
    }

    #[test]
    fn unreadable_error_body_is_a_failure() {
        assert_eq!(classify::<&str>(false, 502, Err("expected value at line 1 column 1")), SubmitOutcome::Failed);
    }

    #[test]
    fn unreadable_success_body_is_a_failure() {
        assert_eq!(classify::<&str>(true, 200, Err("EOF while parsing a value")), SubmitOutcome::Failed);
    }
}
