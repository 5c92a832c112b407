use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    Address(#[from] AddressError),
    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// A validated contact form submission on its way to the site owner.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactEmail {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactEmail {
    pub fn subject(&self) -> String {
        format!("New contact message from {}", self.name)
    }

    pub fn body(&self, received_at: DateTime<Utc>) -> String {
        format!(
            "Name: {}\nEmail: {}\nReceived: {}\n\n{}\n",
            self.name,
            self.email,
            received_at.to_rfc2822(),
            self.message
        )
    }
}

/// Delivers contact messages. The HTTP layer only sees this trait so tests
/// can swap in a recording implementation.
pub trait Mailer: Send + Sync {
    fn send(&self, email: ContactEmail) -> BoxFuture<'_, Result<(), MailError>>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let credentials = Credentials::new(config.smtp.username.clone(), config.smtp.password.clone());
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp.host)?.credentials(credentials);
        if let Some(port) = config.smtp.port {
            builder = builder.port(port);
        }

        let from = config.contact_from.parse::<Address>()?;
        let to = config.contact_recipient.parse::<Address>()?;
        info!("SMTP mailer ready for relay {}", config.smtp.host);

        Ok(Self {
            transport: builder.build(),
            from: Mailbox::new(Some("Portfolio contact form".to_string()), from),
            to: Mailbox::new(None, to),
        })
    }

    fn compose(&self, email: &ContactEmail) -> Result<Message, MailError> {
        let reply_to = Mailbox::new(Some(email.name.clone()), email.email.parse::<Address>()?);
        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(email.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body(Utc::now()))?;
        Ok(message)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: ContactEmail) -> BoxFuture<'_, Result<(), MailError>> {
        Box::pin(async move {
            let message = self.compose(&email)?;
            let response = self.transport.send(message).await?;
            info!(code = %response.code(), "contact message relayed");
            Ok(())
        })
    }
}
