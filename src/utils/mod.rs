/// Module containing environment-variable helpers used by the configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing ISO-8601 validation and URL encoding helpers
pub mod parsing;

pub use config::*;
pub use logger::*;
pub use parsing::*;
