use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpSettings;
use crate::handlers::contact_handlers::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(String),
    #[error("could not build message: {0}")]
    Build(String),
    #[error("smtp: {0}")]
    Smtp(String),
}

/// Hands a contact submission to whoever reads the inbox. Blocking; callers
/// run it off the async runtime.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), MailError>;
}

pub fn subject_line(submission: &ContactSubmission) -> String {
    match &submission.company {
        Some(company) => format!("Showfloor contact: {} ({})", submission.name, company),
        None => format!("Showfloor contact: {}", submission.name),
    }
}

pub fn body_text(submission: &ContactSubmission) -> String {
    format!(
        "From: {} <{}>\nCompany: {}\nReceived: {}\nReference: {}\n\n{}",
        submission.name,
        submission.email,
        submission.company.as_deref().unwrap_or("-"),
        submission.received_at.to_rfc3339(),
        submission.id,
        submission.message,
    )
}

pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    inbox: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", settings.username, e)))?;
        let inbox: Mailbox = settings
            .inbox
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", settings.inbox, e)))?;
        let transport = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(587)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();
        Ok(Self {
            transport,
            from,
            inbox,
        })
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let reply_to: Mailbox = submission
            .email
            .parse()
            .map_err(|e| MailError::Address(format!("{}: {}", submission.email, e)))?;
        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.inbox.clone())
            .subject(subject_line(submission))
            .body(body_text(submission))
            .map_err(|e| MailError::Build(e.to_string()))?;
        self.transport
            .send(&message)
            .map_err(|e| MailError::Smtp(e.to_string()))?;
        tracing::info!("contact {} delivered to inbox", submission.id);
        Ok(())
    }
}

/// Used when SMTP is not configured: the submission only reaches the logs.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn deliver(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        tracing::info!(
            id = %submission.id,
            from = %submission.email,
            "contact submission (smtp not configured)\n{}",
            body_text(submission)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn submission(company: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            id: Uuid::nil(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: company.map(str::to_string),
            message: "Could we book a booth tour?".to_string(),
            received_at: Utc.with_ymd_and_hms(2026, 1, 8, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn subject_names_sender_and_company() {
        assert_eq!(subject_line(&submission(None)), "Showfloor contact: Ada Lovelace");
        assert_eq!(
            subject_line(&submission(Some("Analytical Engines"))),
            "Showfloor contact: Ada Lovelace (Analytical Engines)"
        );
    }

    #[test]
    fn body_carries_reply_details() {
        let body = body_text(&submission(None));
        assert!(body.starts_with("From: Ada Lovelace <ada@example.com>\nCompany: -\n"));
        assert!(body.contains("Received: 2026-01-08T09:30:00+00:00"));
        assert!(body.ends_with("Could we book a booth tour?"));
    }

    #[test]
    fn log_mailer_always_succeeds() {
        assert!(LogMailer.deliver(&submission(Some("Acme"))).is_ok());
    }

    #[test]
    fn smtp_mailer_rejects_bad_addresses() {
        let settings = SmtpSettings {
            host: "smtp.example.com".to_string(),
            username: "not an address".to_string(),
            password: "secret".to_string(),
            inbox: "editors@example.com".to_string(),
        };
        assert!(matches!(SmtpMailer::new(&settings), Err(MailError::Address(_))));
    }
}
