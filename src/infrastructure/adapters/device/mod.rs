pub mod pattern_device_parser;

pub use pattern_device_parser::PatternDeviceParser;
