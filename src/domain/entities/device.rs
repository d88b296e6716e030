// src/domain/entities/device.rs
use serde::{Deserialize, Serialize};

/// Browser and OS names derived from a raw user-agent string.
///
/// Produced by the device-parser port; the IP is attached separately because
/// it comes from the originating request (current login) or from the stored
/// session record (table view), never from the user-agent itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDevice {
    pub browser: String,
    pub os: String,
}

/// Ephemeral device description for one request. Recomputed each call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub ip: String,
    pub browser: String,
    pub os: String,
}

impl DeviceInfo {
    pub fn from_parsed(parsed: ParsedDevice, ip: String) -> Self {
        Self {
            ip,
            browser: parsed.browser,
            os: parsed.os,
        }
    }
}
