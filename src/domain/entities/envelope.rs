// src/domain/entities/envelope.rs
use serde::{Deserialize, Serialize};

/// A fully addressed notification email, constructed per send and discarded
/// after hand-off to the mail transport.
///
/// Headers are carried as raw `Name: value` lines so override hooks can add
/// or rewrite them without this crate committing to a header model the host
/// doesn't share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailEnvelope {
    pub to: String,
    pub subject: String,
    pub message: String,
    pub headers: Vec<String>,
}

impl EmailEnvelope {
    pub fn new(to: String, subject: String, message: String) -> Self {
        Self {
            to,
            subject,
            message,
            headers: Vec::new(),
        }
    }

    /// Add a carbon-copy recipient as a `Cc:` header line.
    pub fn push_cc(&mut self, address: &str) {
        self.headers.push(format!("Cc: {}", address));
    }

    /// All addresses carried in `Cc:` header lines.
    pub fn cc_addresses(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter_map(|h| h.strip_prefix("Cc:"))
            .map(str::trim)
            .collect()
    }
}
