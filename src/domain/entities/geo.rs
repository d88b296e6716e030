// src/domain/entities/geo.rs
use serde::{Deserialize, Serialize};

/// Country resolution for an IP address, as returned by the geolocation port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCountry {
    /// Human-readable country name, e.g. "Iceland".
    pub country: String,
    /// ISO 3166-1 alpha-2 code, e.g. "IS".
    pub code: String,
}

impl GeoCountry {
    pub fn new(country: String, code: String) -> Self {
        Self { country, code }
    }

    /// The country's flag as a regional-indicator emoji pair.
    ///
    /// Returns an empty string when the stored code is not a two-letter
    /// ASCII code, so a bad upstream response degrades to "no flag".
    pub fn emoji_flag(&self) -> String {
        let code = self.code.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return String::new();
        }
        code.chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}
