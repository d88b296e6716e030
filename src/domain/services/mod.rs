pub mod sessions;
pub mod template;
