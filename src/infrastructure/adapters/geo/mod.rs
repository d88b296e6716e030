pub mod http_geo_adapter;

pub use http_geo_adapter::{GeoProvider, HttpGeoAdapter};
