// src/domain/services/sessions.rs
use crate::domain::entities::Session;

/// Whether any existing session matches the current client fingerprint.
///
/// Linear scan over whatever the store yielded, exact string equality on IP
/// and user-agent, short-circuiting on the first match. An empty list never
/// matches.
pub fn has_matching_session(sessions: &[Session], ip: &str, user_agent: &str) -> bool {
    sessions
        .iter()
        .any(|session| session.matches_client(ip, user_agent))
}
