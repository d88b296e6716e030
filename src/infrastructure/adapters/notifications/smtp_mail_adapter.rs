/*
SMTP Mail Adapter

This adapter implements the mail transport port over SMTP for hosts that do
not bring their own mailer. It follows the same shape as the rest of the
infrastructure layer: a config struct, a constructor that validates it, and
a thin port implementation.

Features:
- SMTP delivery with TLS relay or a plain builder for local relays
- Plain-text bodies (the notification templates are plain text)
- Cc headers taken from the envelope's raw header lines

lettre's SMTP transport is blocking, so the actual send is moved onto a
blocking task.
*/

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};
use serde::{Deserialize, Serialize};

use crate::application::ports::output::{MailTransportError, MailTransportPort};
use crate::domain::entities::EmailEnvelope;

/// SMTP delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpAdapterConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password
    pub password: String,
    /// From email address
    pub from_address: String,
    /// From name (optional)
    pub from_name: Option<String>,
    /// Use TLS encryption
    pub use_tls: bool,
}

impl Default for SmtpAdapterConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@example.com".to_string(),
            from_name: Some("Login Sentry".to_string()),
            use_tls: true,
        }
    }
}

/// SMTP mail adapter
pub struct SmtpMailAdapter {
    config: SmtpAdapterConfig,
    smtp_transport: SmtpTransport,
}

impl SmtpMailAdapter {
    /// Create a new SMTP mail adapter
    pub fn new(config: SmtpAdapterConfig) -> Result<Self, MailTransportError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let smtp_transport = if config.use_tls {
            SmtpTransport::relay(&config.smtp_host)
                .map_err(|e| {
                    MailTransportError::Connection(format!("SMTP relay configuration error: {}", e))
                })?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        } else {
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        Ok(Self {
            config,
            smtp_transport,
        })
    }

    fn from_mailbox(&self) -> Result<Mailbox, MailTransportError> {
        let from_address = if let Some(ref name) = self.config.from_name {
            format!("{} <{}>", name, self.config.from_address)
        } else {
            self.config.from_address.clone()
        };
        from_address.parse().map_err(|e| {
            MailTransportError::Connection(format!("Invalid from address: {}", e))
        })
    }

    /// Build a lettre message from the envelope
    fn build_message(&self, envelope: &EmailEnvelope) -> Result<Message, MailTransportError> {
        let to: Mailbox = envelope.to.parse().map_err(|e| {
            MailTransportError::InvalidEnvelope(format!("Invalid recipient address: {}", e))
        })?;

        let mut builder = Message::builder()
            .from(self.from_mailbox()?)
            .to(to)
            .subject(envelope.subject.clone());

        for cc in envelope.cc_addresses() {
            let mailbox: Mailbox = cc.parse().map_err(|e| {
                MailTransportError::InvalidEnvelope(format!("Invalid Cc address '{}': {}", cc, e))
            })?;
            builder = builder.cc(mailbox);
        }

        builder
            .header(ContentType::TEXT_PLAIN)
            .body(envelope.message.clone())
            .map_err(|e| MailTransportError::InvalidEnvelope(format!("Failed to build body: {}", e)))
    }
}

#[async_trait]
impl MailTransportPort for SmtpMailAdapter {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), MailTransportError> {
        let message = self.build_message(envelope)?;

        let result = tokio::task::spawn_blocking({
            let transport = self.smtp_transport.clone();
            move || transport.send(&message)
        })
        .await;

        match result {
            Ok(Ok(_response)) => Ok(()),
            Ok(Err(e)) => Err(MailTransportError::Rejected(format!(
                "SMTP delivery failed: {}",
                e
            ))),
            Err(e) => Err(MailTransportError::Connection(format!(
                "Task execution failed: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> SmtpAdapterConfig {
        SmtpAdapterConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "test@example.com".to_string(),
            password: "password123".to_string(),
            from_address: "noreply@example.com".to_string(),
            from_name: Some("Test Service".to_string()),
            use_tls: true,
        }
    }

    fn create_test_envelope() -> EmailEnvelope {
        EmailEnvelope::new(
            "alice@example.com".to_string(),
            "Test Subject".to_string(),
            "Test body".to_string(),
        )
    }

    #[test]
    fn test_adapter_creation() {
        let adapter = SmtpMailAdapter::new(create_test_config());
        assert!(adapter.is_ok());
    }

    #[test]
    fn test_build_message_from_envelope() {
        let adapter = SmtpMailAdapter::new(create_test_config()).unwrap();
        let mut envelope = create_test_envelope();
        envelope.push_cc("admin@example.com");

        let message = adapter.build_message(&envelope);
        assert!(message.is_ok());
    }

    #[test]
    fn test_invalid_recipient_is_rejected() {
        let adapter = SmtpMailAdapter::new(create_test_config()).unwrap();
        let mut envelope = create_test_envelope();
        envelope.to = "not-an-address".to_string();

        let result = adapter.build_message(&envelope);
        assert!(matches!(result, Err(MailTransportError::InvalidEnvelope(_))));
    }

    #[test]
    fn test_invalid_cc_is_rejected() {
        let adapter = SmtpMailAdapter::new(create_test_config()).unwrap();
        let mut envelope = create_test_envelope();
        envelope.push_cc("broken cc");

        let result = adapter.build_message(&envelope);
        assert!(matches!(result, Err(MailTransportError::InvalidEnvelope(_))));
    }
}
