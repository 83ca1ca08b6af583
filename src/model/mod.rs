/// Module containing wire-format enums shared between getters and the API
pub mod types;

pub use types::*;
