//! # TDA Client
//!
//! A Rust client for the TD Ameritrade REST API, built around a family of
//! typed request builders ("getters"). Each getter owns its query
//! parameters, validates every input at the point it is supplied, and keeps
//! a fully encoded target URL in sync with its current field values. The
//! HTTP transport is a thin layer on top of the getters: by the time a
//! request is issued, the URL is already correct for the parameter state.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use tda_client::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), AppError> {
//! let config = Config::new();
//! let credentials = config.shared_credentials();
//! let client = TdHttpClientImpl::new(&config)?;
//!
//! let getter = AccountInfoGetter::new(credentials, "123456789", true, false)?;
//! let body = client.get(&getter).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`getters`] - the typed request builders and the `ApiGetter` /
//!   `AccountGetter` capability traits
//! - [`transport`] - the authenticated HTTP layer (`TdHttpClient`)
//! - [`model`] - enums shared with the wire format (`TransactionType`,
//!   `OrderStatusType`)
//! - [`config`] - environment-driven configuration and credentials
//! - [`error`] - the crate-wide [`error::AppError`] type

/// Environment-driven configuration and API credentials
pub mod config;
/// API endpoint roots and crate-wide defaults
pub mod constants;
/// Crate-wide error type
pub mod error;
/// Typed request builders for the account API
pub mod getters;
/// Wire-format enums
pub mod model;
/// Convenient re-exports of the most commonly used items
pub mod prelude;
/// Authenticated HTTP transport
pub mod transport;
/// Parsing, logging and environment helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version as a static string
pub fn version() -> &'static str {
    VERSION
}
