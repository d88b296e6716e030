/*
Geolocation Port

This port resolves an IP address to a country for the `{country}` and
`{flag}` tokens. Lookups are strictly optional decoration: an absent result
(service not configured, network failure, unknown IP) renders both tokens as
empty strings, and no failure ever propagates to the caller.
*/

use async_trait::async_trait;

use crate::domain::entities::GeoCountry;

#[async_trait]
pub trait GeoLookupPort: Send + Sync {
    /// Resolve `ip` to a country, or `None` when the lookup does not
    /// produce one for any reason.
    async fn lookup(&self, ip: &str) -> Option<GeoCountry>;
}
