pub mod device;
pub mod envelope;
pub mod geo;
pub mod session;
pub mod user;

pub use device::{DeviceInfo, ParsedDevice};
pub use envelope::EmailEnvelope;
pub use geo::GeoCountry;
pub use session::Session;
pub use user::{Email, User, UserError};
