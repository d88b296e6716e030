/*
Session Table Application Service

Produces the rows for the "current sessions" table on a user's profile page.
Rows come back in the store's enumeration order with timestamps already
formatted for display; all HTML rendering stays with the host. Read-only —
this path shares nothing with the notification flow beyond the device
parser.
*/

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::output::{DeviceParserPort, SessionStoreError, SessionStorePort};
use crate::config::NotifySettings;
use crate::domain::entities::User;
use crate::domain::services::template;

/// Text shown when a user has no active sessions.
pub const NO_SESSIONS_PLACEHOLDER: &str = "No current sessions";

/// One display row of the sessions table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub login_time: String,
    pub ip: String,
    pub browser: String,
    pub os: String,
    pub expiry_time: String,
}

impl SessionRow {
    /// The single row shown when the user has no active sessions.
    pub fn placeholder() -> Self {
        Self {
            login_time: NO_SESSIONS_PLACEHOLDER.to_string(),
            ip: String::new(),
            browser: String::new(),
            os: String::new(),
            expiry_time: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.login_time == NO_SESSIONS_PLACEHOLDER && self.ip.is_empty()
    }
}

pub struct SessionTableService {
    settings: NotifySettings,
    session_store: Arc<dyn SessionStorePort>,
    device_parser: Arc<dyn DeviceParserPort>,
}

impl SessionTableService {
    pub fn new(
        settings: NotifySettings,
        session_store: Arc<dyn SessionStorePort>,
        device_parser: Arc<dyn DeviceParserPort>,
    ) -> Self {
        Self {
            settings,
            session_store,
            device_parser,
        }
    }

    /// One row per active session, in store order; a lone placeholder row
    /// when there are none.
    pub async fn render_sessions(&self, user: &User) -> Result<Vec<SessionRow>, SessionStoreError> {
        let all_sessions = self.session_store.list_sessions(user.id).await?;
        if all_sessions.is_empty() {
            return Ok(vec![SessionRow::placeholder()]);
        }

        let rows = all_sessions
            .into_iter()
            .map(|session| {
                let device = self.device_parser.parse(&session.user_agent);
                SessionRow {
                    login_time: template::format_host_time(
                        session.login_time,
                        &self.settings.date_format,
                        &self.settings.time_format,
                    ),
                    ip: session.ip,
                    browser: device.browser,
                    os: device.os,
                    expiry_time: template::format_host_time(
                        session.expiry_time,
                        &self.settings.date_format,
                        &self.settings.time_format,
                    ),
                }
            })
            .collect();

        Ok(rows)
    }
}
