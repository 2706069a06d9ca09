use std::num::NonZeroU32;
use std::path::PathBuf;

use nonzero_ext::nonzero;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub inbox: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub frontend_url: String,
    pub contact_rate_per_minute: NonZeroU32,
    /// Submissions are only logged when this is `None`.
    pub smtp: Option<SmtpSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            contact_rate_per_minute: nonzero!(5u32),
            smtp: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => defaults.port,
        };
        let contact_rate_per_minute = match var("CONTACT_RATE_PER_MINUTE") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "CONTACT_RATE_PER_MINUTE", value })?,
            None => defaults.contact_rate_per_minute,
        };

        let smtp = match (
            var("SMTP_HOST"),
            var("SMTP_USERNAME"),
            var("SMTP_PASSWORD"),
            var("CONTACT_INBOX"),
        ) {
            (Some(host), Some(username), Some(password), Some(inbox)) => Some(SmtpSettings {
                host,
                username,
                password,
                inbox,
            }),
            _ => None,
        };

        Ok(Self {
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            frontend_url: var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            contact_rate_per_minute,
            smtp,
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
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.contact_rate_per_minute.get(), 5);
    }

    #[test]
    fn smtp_needs_every_setting() {
        let partial = AppConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "bot@example.com"),
        ]))
        .expect("parses");
        assert_eq!(partial.smtp, None);

        let full = AppConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "bot@example.com"),
            ("SMTP_PASSWORD", "secret"),
            ("CONTACT_INBOX", "editors@example.com"),
            ("PORT", "8081"),
        ]))
        .expect("parses");
        assert_eq!(full.port, 8081);
        assert_eq!(full.smtp.map(|s| s.inbox), Some("editors@example.com".to_string()));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("PORT", "eighty")])),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(AppConfig::from_lookup(lookup(&[("CONTACT_RATE_PER_MINUTE", "0")])).is_err());
    }
}
