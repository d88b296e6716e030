/*
Recording Mail Adapter

An in-memory implementation of the mail transport port. Every envelope is
accepted and stored instead of being delivered, which makes it the transport
of choice for tests and for hosts running in a dry-run mode.

Storage is bounded: once the cap is reached the oldest envelopes are
dropped first.
*/

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::application::ports::output::{MailTransportError, MailTransportPort};
use crate::domain::entities::EmailEnvelope;

/// Recording adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingAdapterConfig {
    /// Maximum number of envelopes to keep in memory
    pub max_stored_envelopes: usize,
}

impl Default for RecordingAdapterConfig {
    fn default() -> Self {
        Self {
            max_stored_envelopes: 1000,
        }
    }
}

/// Recording mail adapter
#[derive(Debug, Default)]
pub struct RecordingMailAdapter {
    config: RecordingAdapterConfig,
    envelopes: Arc<RwLock<Vec<EmailEnvelope>>>,
}

impl RecordingMailAdapter {
    /// Create a new recording mail adapter
    pub fn new(config: RecordingAdapterConfig) -> Self {
        Self {
            config,
            envelopes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All envelopes handed to this transport so far, oldest first.
    pub fn sent(&self) -> Result<Vec<EmailEnvelope>, MailTransportError> {
        let envelopes = self.envelopes.read().map_err(|_| {
            MailTransportError::Connection("Envelope storage unavailable".to_string())
        })?;
        Ok(envelopes.clone())
    }

    /// Envelopes addressed to a specific recipient.
    pub fn sent_to(&self, recipient: &str) -> Result<Vec<EmailEnvelope>, MailTransportError> {
        let envelopes = self.envelopes.read().map_err(|_| {
            MailTransportError::Connection("Envelope storage unavailable".to_string())
        })?;
        Ok(envelopes
            .iter()
            .filter(|e| e.to == recipient)
            .cloned()
            .collect())
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) -> Result<(), MailTransportError> {
        let mut envelopes = self.envelopes.write().map_err(|_| {
            MailTransportError::Connection("Envelope storage unavailable".to_string())
        })?;
        envelopes.clear();
        Ok(())
    }
}

#[async_trait]
impl MailTransportPort for RecordingMailAdapter {
    async fn send(&self, envelope: &EmailEnvelope) -> Result<(), MailTransportError> {
        let mut envelopes = self.envelopes.write().map_err(|_| {
            MailTransportError::Connection("Envelope storage unavailable".to_string())
        })?;

        envelopes.push(envelope.clone());

        // Oldest envelopes go first when the cap is hit.
        if envelopes.len() > self.config.max_stored_envelopes {
            let excess = envelopes.len() - self.config.max_stored_envelopes;
            envelopes.drain(0..excess);
        }

        Ok(())
    }
}
