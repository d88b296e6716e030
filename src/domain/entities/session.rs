// src/domain/entities/session.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One active browser session for a user, as recorded by the host's session
/// token store. Immutable once created; the host owns its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub ip: String,
    pub user_agent: String,
    pub login_time: DateTime<Utc>,
    pub expiry_time: DateTime<Utc>,
}

impl Session {
    pub fn new(
        ip: String,
        user_agent: String,
        login_time: DateTime<Utc>,
        expiry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            ip,
            user_agent,
            login_time,
            expiry_time,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.expiry_time < Utc::now()
    }

    /// Exact match on the client fingerprint (string equality on both fields).
    pub fn matches_client(&self, ip: &str, user_agent: &str) -> bool {
        self.ip == ip && self.user_agent == user_agent
    }
}
