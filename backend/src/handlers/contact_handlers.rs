use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 5000;
pub const ANONYMOUS_CLIENT: &str = "anonymous";

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    /// Honeypot. Hidden from people, filled in by form bots.
    #[serde(default)]
    pub website: Option<String>,
}

/// A validated, trimmed submission ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactRequest {
    pub fn is_bot(&self) -> bool {
        self.website
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn validate(self) -> Result<ContactSubmission, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ApiError::Validation(format!(
                "Name must be at most {} characters",
                NAME_MAX_CHARS
            )));
        }
        let email = self.email.trim();
        let email_ok = EMAIL_RE
            .as_ref()
            .map(|re| re.is_match(email))
            .unwrap_or(false);
        if !email_ok {
            return Err(ApiError::Validation("A valid email address is required".to_string()));
        }
        let message = self.message.trim();
        let length = message.chars().count();
        if length < MESSAGE_MIN_CHARS {
            return Err(ApiError::Validation(format!(
                "Message must be at least {} characters",
                MESSAGE_MIN_CHARS
            )));
        }
        if length > MESSAGE_MAX_CHARS {
            return Err(ApiError::Validation(format!(
                "Message must be at most {} characters",
                MESSAGE_MAX_CHARS
            )));
        }

        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            company: self
                .company
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            message: message.to_string(),
            received_at: Utc::now(),
        })
    }
}

/// First address of `X-Forwarded-For`, as set by the fronting proxy.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

fn received(id: Uuid) -> (StatusCode, Json<Value>) {
    (
        StatusCode::ACCEPTED,
        Json(json!({ "status": "received", "id": id })),
    )
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let limiter_key = client_key(&headers);
    if state.contact_limiter.check_key(&limiter_key).is_err() {
        tracing::warn!("contact rate limit exceeded for {}", limiter_key);
        return Err(ApiError::RateLimited);
    }

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected contact payload: {}", rejection);
        ApiError::Validation(rejection.body_text())
    })?;

    if request.is_bot() {
        let id = Uuid::new_v4();
        tracing::info!("dropping honeypot submission {} from {}", id, limiter_key);
        return Ok(received(id));
    }

    let submission = request.validate()?;
    let id = submission.id;
    tracing::debug!("contact {} from {} passed validation", id, limiter_key);

    let mailer = Arc::clone(&state.mailer);
    tokio::task::spawn_blocking(move || mailer.deliver(&submission))
        .await
        .map_err(|e| ApiError::Delivery(e.to_string()))?
        .map_err(|e| ApiError::Delivery(e.to_string()))?;

    Ok(received(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            company: Some("  ".to_string()),
            message: message.to_string(),
            website: None,
        }
    }

    #[test]
    fn trims_and_accepts_a_valid_request() {
        let submission = request("  Ada Lovelace ", "ada@example.com ", "Booth tour on Thursday?")
            .validate()
            .expect("valid");
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.company, None);
    }

    #[test]
    fn rejects_each_rule() {
        let long_name = "n".repeat(NAME_MAX_CHARS + 1);
        let long_message = "m".repeat(MESSAGE_MAX_CHARS + 1);
        let cases = [
            request("", "ada@example.com", "Booth tour on Thursday?"),
            request(&long_name, "ada@example.com", "Booth tour on Thursday?"),
            request("Ada", "ada@example", "Booth tour on Thursday?"),
            request("Ada", "ada@example.com", "too short"),
            request("Ada", "ada@example.com", &long_message),
        ];
        for case in cases {
            assert!(matches!(case.validate(), Err(ApiError::Validation(_))));
        }
    }

    #[test]
    fn honeypot_marks_bots() {
        let mut bot = request("Ada", "ada@example.com", "Booth tour on Thursday?");
        assert!(!bot.is_bot());
        bot.website = Some("http://spam.example".to_string());
        assert!(bot.is_bot());
    }

    #[test]
    fn client_key_uses_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_key(&headers), ANONYMOUS_CLIENT);
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        assert_eq!(client_key(&headers), "203.0.113.7");
    }
}
