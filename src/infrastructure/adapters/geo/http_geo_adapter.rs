/*
HTTP Geolocation Adapter

Implements the geolocation port against the public IP-to-country services a
host can select through the `geo_service` setting. The adapter is strictly
best effort: any failure (unknown provider, request error, unexpected
response shape) resolves to `None`, which downstream renders as empty
`{country}`/`{flag}` tokens.
*/

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use url::Url;

use crate::application::ports::output::GeoLookupPort;
use crate::config::NotifySettings;
use crate::domain::entities::GeoCountry;

/// Supported IP-to-country services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoProvider {
    IpApi,
    GeoJs,
}

impl GeoProvider {
    /// Resolve a provider from the settings value. Unknown names disable
    /// geolocation rather than failing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ip-api" | "ipapi" => Some(GeoProvider::IpApi),
            "geojs" => Some(GeoProvider::GeoJs),
            _ => None,
        }
    }

    fn endpoint(&self, ip: &str) -> Result<Url, url::ParseError> {
        match self {
            GeoProvider::IpApi => Url::parse(&format!(
                "http://ip-api.com/json/{}?fields=country,countryCode",
                ip
            )),
            GeoProvider::GeoJs => Url::parse(&format!(
                "https://get.geojs.io/v1/ip/country/{}.json",
                ip
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

impl IpApiResponse {
    fn into_country(self) -> Option<GeoCountry> {
        Some(GeoCountry::new(self.country?, self.country_code?))
    }
}

#[derive(Debug, Deserialize)]
struct GeoJsResponse {
    name: Option<String>,
    country: Option<String>,
}

impl GeoJsResponse {
    fn into_country(self) -> Option<GeoCountry> {
        Some(GeoCountry::new(self.name?, self.country?))
    }
}

/// HTTP geolocation adapter
pub struct HttpGeoAdapter {
    provider: GeoProvider,
    client: reqwest::Client,
}

impl HttpGeoAdapter {
    pub fn new(provider: GeoProvider) -> Self {
        Self {
            provider,
            client: reqwest::Client::new(),
        }
    }

    /// Build an adapter from the configured service name, or `None` when
    /// geolocation is not configured (or the name is unrecognized).
    pub fn from_settings(settings: &NotifySettings) -> Option<Self> {
        settings
            .geo_service
            .as_deref()
            .and_then(GeoProvider::from_name)
            .map(Self::new)
    }
}

#[async_trait]
impl GeoLookupPort for HttpGeoAdapter {
    async fn lookup(&self, ip: &str) -> Option<GeoCountry> {
        let url = match self.provider.endpoint(ip) {
            Ok(url) => url,
            Err(e) => {
                debug!("geo endpoint for {} did not parse: {}", ip, e);
                return None;
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("geo lookup for {} failed: {}", ip, e);
                return None;
            }
        };

        match self.provider {
            GeoProvider::IpApi => response
                .json::<IpApiResponse>()
                .await
                .ok()
                .and_then(IpApiResponse::into_country),
            GeoProvider::GeoJs => response
                .json::<GeoJsResponse>()
                .await
                .ok()
                .and_then(GeoJsResponse::into_country),
        }
    }
}
