//! Email Gateway: best-effort delivery with an observable success/failure.
//!
//! The plaintext-password-in-email model is a fixed external requirement of
//! the generated-credential scheme; it stays isolated behind [`EmailSender`]
//! so a future reset-link flow only touches the orchestration. Message bodies
//! carry plaintext credentials and are therefore never logged.

use crate::cli::globals::SmtpSettings;
use anyhow::{Context, Result};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use secrecy::ExposeSecret;
use tracing::info;

#[derive(Clone, Debug)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Attempts delivery of one message and reports the outcome. No retries:
/// a failure surfaces immediately to the calling flow.
pub trait EmailSender: Send + Sync {
    /// # Errors
    /// Returns an error when the message could not be handed to the relay.
    fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// Development fallback: log the envelope (never the body) instead of
/// delivering.
#[derive(Clone, Debug)]
pub struct LogEmailSender;

impl EmailSender for LogEmailSender {
    fn send(&self, message: &EmailMessage) -> Result<()> {
        info!(
            to = %message.to,
            subject = %message.subject,
            "email delivery stub"
        );
        Ok(())
    }
}

/// SMTP-backed sender over a STARTTLS relay.
pub struct SmtpEmailSender {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpEmailSender {
    /// # Errors
    /// Returns an error for an unresolvable relay host or an invalid from
    /// address.
    pub fn new(settings: &SmtpSettings, from: &str) -> Result<Self> {
        let mut builder = SmtpTransport::starttls_relay(&settings.host)
            .context("failed to configure SMTP relay")?
            .port(settings.port);

        if let Some(username) = &settings.username {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                settings.password.expose_secret().to_string(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from: from.parse().context("invalid SMTP from address")?,
        })
    }
}

impl EmailSender for SmtpEmailSender {
    fn send(&self, message: &EmailMessage) -> Result<()> {
        let mail = Message::builder()
            .from(self.from.clone())
            .to(message
                .to
                .parse()
                .context("invalid recipient email address")?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .context("failed to build email")?;

        self.transport
            .send(&mail)
            .context("SMTP delivery failed")?;

        Ok(())
    }
}

/// Account-details message sent during registration. Carries the only copy of
/// the generated plaintext that will ever exist outside the request.
#[must_use]
pub fn account_details(to: &str, first_name: &str, last_name: &str, plain: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: "Your Retailer Account Details".to_string(),
        html: format!(
            "<h2>Welcome to Retailer Dashboard</h2>\n\
             <p>Dear {first_name} {last_name},</p>\n\
             <p>Your account has been successfully created.</p>\n\
             <p><strong>Login Details:</strong></p>\n\
             <p>Email: {to}</p>\n\
             <p>Password: {plain}</p>\n\
             <p>Please change your password after logging in.</p>"
        ),
    }
}

/// Replacement-password message sent by the forgot-password flow.
#[must_use]
pub fn password_reset(to: &str, first_name: &str, last_name: &str, plain: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: "Your new retailer account password".to_string(),
        html: format!(
            "<h2>Password Reset</h2>\n\
             <p>Dear {first_name} {last_name},</p>\n\
             <p>Your retailer account password has been reset.</p>\n\
             <p><strong>New password:</strong> {plain}</p>\n\
             <p>Please log in with this password and change it after logging in.</p>"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_details_template() {
        let message = account_details("alice@x.com", "Alice", "Doe", "c0ffee");
        assert_eq!(message.to, "alice@x.com");
        assert_eq!(message.subject, "Your Retailer Account Details");
        assert!(message.html.contains("Dear Alice Doe"));
        assert!(message.html.contains("Email: alice@x.com"));
        assert!(message.html.contains("Password: c0ffee"));
    }

    #[test]
    fn test_password_reset_template() {
        let message = password_reset("alice@x.com", "Alice", "Doe", "deadbeef");
        assert_eq!(message.subject, "Your new retailer account password");
        assert!(message.html.contains("deadbeef"));
        assert!(message.html.contains("change it after logging in"));
    }

    #[test]
    fn test_log_sender_reports_success() {
        let message = account_details("alice@x.com", "Alice", "Doe", "c0ffee");
        assert!(LogEmailSender.send(&message).is_ok());
    }
}
