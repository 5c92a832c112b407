use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use nonzero_ext::nonzero;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_RATE_PER_MINUTE: NonZeroU32 = nonzero!(5u32);

#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    /// `None` keeps the relay's default submission port.
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub smtp: SmtpSettings,
    /// Sender address of the notification mails.
    pub contact_from: String,
    /// Where contact form messages are delivered.
    pub contact_recipient: String,
    pub rate_per_minute: NonZeroU32,
    /// Built frontend to serve next to the API, if any.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |key: &str| optional(key).ok_or_else(|| anyhow!("{} must be set", key));

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?;

        let port = optional("SMTP_PORT")
            .map(|port| port.parse::<u16>())
            .transpose()
            .context("SMTP_PORT must be a port number")?;

        let username = required("SMTP_USERNAME")?;
        let smtp = SmtpSettings {
            host: required("SMTP_HOST")?,
            port,
            username: username.clone(),
            password: required("SMTP_PASSWORD")?,
        };

        let rate_per_minute = match optional("CONTACT_RATE_PER_MINUTE") {
            Some(rate) => rate
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| anyhow!("CONTACT_RATE_PER_MINUTE must be a positive integer"))?,
            None => DEFAULT_RATE_PER_MINUTE,
        };

        Ok(Self {
            bind_addr,
            smtp,
            contact_from: optional("CONTACT_FROM").unwrap_or(username),
            contact_recipient: required("CONTACT_RECIPIENT")?,
            rate_per_minute,
            static_dir: optional("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_USERNAME", "mailer@example.com"),
        ("SMTP_PASSWORD", "secret"),
        ("CONTACT_RECIPIENT", "owner@example.com"),
    ];

    #[test]
    fn defaults_fill_optional_values() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.smtp.port, None);
        assert_eq!(config.contact_from, "mailer@example.com");
        assert_eq!(config.rate_per_minute.get(), 5);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn missing_required_value_is_named() {
        let err = Config::from_lookup(lookup(&REQUIRED[..3])).unwrap_err();
        assert!(err.to_string().contains("CONTACT_RECIPIENT"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[0] = ("SMTP_HOST", "   ");
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("SMTP_HOST"));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("SMTP_PORT", "2525"),
            ("CONTACT_FROM", "site@example.com"),
            ("CONTACT_RATE_PER_MINUTE", "12"),
            ("STATIC_DIR", "dist"),
        ]);
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.smtp.port, Some(2525));
        assert_eq!(config.contact_from, "site@example.com");
        assert_eq!(config.rate_per_minute.get(), 12);
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn zero_rate_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("CONTACT_RATE_PER_MINUTE", "0"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());
    }
}
