/*
Mail Transport Port

This port defines the contract for handing a fully formed notification email
to the host's mail transport. Success means the transport accepted the message
for delivery, not that it was delivered.

The application layer treats this port as best effort: a failed send is
logged and recorded in the notification receipt, never propagated back into
the login flow.
*/

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::EmailEnvelope;

#[derive(Debug, Clone, Error)]
pub enum MailTransportError {
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Message rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait MailTransportPort: Send + Sync {
    /// Attempt delivery of the envelope. `Ok(())` means accepted for
    /// delivery.
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), MailTransportError>;
}
