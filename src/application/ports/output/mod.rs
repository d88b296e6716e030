pub mod device_port;
pub mod geo_port;
pub mod hook_port;
pub mod mail_port;
pub mod session_store_port;

// Re-export the port surface for convenience
pub use device_port::DeviceParserPort;
pub use geo_port::GeoLookupPort;
pub use hook_port::{
    DecisionHook, EnvelopeHook, HookRegistry, HookStage, NotifyDecision, SuppressReason,
    TemplateHook,
};
pub use mail_port::{MailTransportError, MailTransportPort};
pub use session_store_port::{SessionStoreError, SessionStorePort};
