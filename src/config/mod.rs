// src/config/mod.rs
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::SentryError;

/// How repeat logins from an already-known device are handled.
///
/// The host persists this option as a string: `"2"` requests suppression of
/// repeat notifications, any other value (including a missing key) means a
/// notice is sent on every login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepeatPolicy {
    Always,
    SkipKnownDevice,
}

impl From<String> for RepeatPolicy {
    fn from(value: String) -> Self {
        match value.trim() {
            "2" | "skip_known_device" => RepeatPolicy::SkipKnownDevice,
            _ => RepeatPolicy::Always,
        }
    }
}

impl From<RepeatPolicy> for String {
    fn from(value: RepeatPolicy) -> Self {
        match value {
            RepeatPolicy::Always => "1".to_string(),
            RepeatPolicy::SkipKnownDevice => "2".to_string(),
        }
    }
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        RepeatPolicy::Always
    }
}

/// Settings for the login-notification subsystem.
///
/// The host owns and persists these options; this crate only reads them.
/// Services take a loaded `NotifySettings` at construction and treat it as
/// immutable for the rest of the request. Missing or malformed keys fall back
/// to defaults rather than failing.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotifySettings {
    /// Site display name, prefixed to every notification subject.
    pub site_name: String,
    /// Value substituted for the `{homeurl}` token.
    pub home_url: String,
    /// Value substituted for the `{profile_url}` token.
    pub profile_url: String,
    /// chrono format string for the date half of displayed timestamps.
    pub date_format: String,
    /// chrono format string for the time half of displayed timestamps.
    pub time_format: String,
    /// Role allow-list. `None` means no restriction; an empty list restricts
    /// notification to super-administrators.
    pub notify_roles: Option<Vec<String>>,
    pub notify_repeat: RepeatPolicy,
    /// Body template override. `None` falls back to the built-in template.
    pub email_body: Option<String>,
    /// Subject template override. `None` falls back to the built-in subject.
    pub email_subject: Option<String>,
    /// Comma-separated list of addresses copied on every notification.
    pub cc_addresses: Option<String>,
    /// Name of the geolocation service to use for `{country}`/`{flag}`.
    /// Absent or unrecognized disables geolocation.
    pub geo_service: Option<String>,
}

impl NotifySettings {
    /// Load settings from a `sentry` config file plus `SENTRY_*` environment
    /// overrides.
    pub fn new() -> Result<Self, SentryError> {
        let builder = Config::builder()
            .add_source(File::with_name("sentry").required(false))
            .add_source(Environment::with_prefix("SENTRY"));

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn load_from_file(filename: &str) -> Result<Self, SentryError> {
        let content = fs::read_to_string(filename)?;
        let settings: NotifySettings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// CC addresses as a cleaned list, one entry per address.
    pub fn cc_list(&self) -> Vec<String> {
        self.cc_addresses
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether a geolocation service has been configured at all.
    pub fn geo_enabled(&self) -> bool {
        self.geo_service
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            site_name: "Example Site".to_string(),
            home_url: "https://example.com".to_string(),
            profile_url: "https://example.com/profile".to_string(),
            date_format: "%B %-d, %Y".to_string(),
            time_format: "%-I:%M %P".to_string(),
            notify_roles: None,
            notify_repeat: RepeatPolicy::Always,
            email_body: None,
            email_subject: None,
            cc_addresses: None,
            geo_service: None,
        }
    }
}
