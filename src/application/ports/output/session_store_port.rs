/*
Session Store Port

This port defines the contract for reading a user's active sessions from the
host platform's session-token store. The store is owned and serialized by the
host; this crate only enumerates it and never mutates session state.

Typical implementations translate a host API (an option-backed token table, a
database, an HTTP call into the platform) into the `Session` records the
application layer works with.
*/

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::Session;

#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Session backend unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown user: {0}")]
    UnknownUser(Uuid),
}

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// List the user's active sessions, in whatever order the store yields
    /// them. No ordering is applied downstream.
    async fn list_sessions(&self, user_id: Uuid) -> Result<Vec<Session>, SessionStoreError>;
}
