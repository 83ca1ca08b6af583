/// Module containing the authenticated HTTP client
pub mod http_client;

pub use http_client::{TdHttpClient, TdHttpClientImpl};
