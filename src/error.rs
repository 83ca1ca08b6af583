use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// A supplied parameter failed validation; the message names the
    /// offending value
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A network-level failure from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("unexpected status {status}: {body}")]
    HttpStatus {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body, useful for diagnostics
        body: String,
    },

    /// A response body could not be parsed as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The client configuration is incomplete or inconsistent
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate
pub type TdaResult<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Builds an [`AppError::InvalidValue`] from anything displayable
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        AppError::InvalidValue(msg.into())
    }
}
