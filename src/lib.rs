// src/lib.rs
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use self::config::*;
pub use error::SentryError;
pub use infrastructure::*;
