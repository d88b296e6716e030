pub mod recording_mail_adapter;
pub mod smtp_mail_adapter;

// Re-export main adapters for convenience
pub use recording_mail_adapter::{RecordingAdapterConfig, RecordingMailAdapter};
pub use smtp_mail_adapter::{SmtpAdapterConfig, SmtpMailAdapter};
