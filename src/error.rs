// src/error.rs
use thiserror::Error;

use crate::application::ports::output::mail_port::MailTransportError;
use crate::application::ports::output::session_store_port::SessionStoreError;

/// Crate-level error for hosts that want a single error type at the seam.
///
/// The login-notification flow itself never returns this: `notify_login` is
/// infallible by contract and reports delivery problems through the receipt.
#[derive(Error, Debug)]
pub enum SentryError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("Mail transport error: {0}")]
    MailTransport(#[from] MailTransportError),
}
