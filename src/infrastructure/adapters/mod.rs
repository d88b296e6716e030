pub mod device;
pub mod geo;
pub mod notifications;
