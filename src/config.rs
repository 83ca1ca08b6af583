use crate::constants::DEFAULT_REST_TIMEOUT;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication state for the TD Ameritrade API.
///
/// Owned by the caller and shared into every getter; getters only ever
/// read it.
pub struct Credentials {
    /// OAuth client id (consumer key) registered with the API
    pub client_id: String,
    /// Current OAuth access token, sent as a bearer token on every request
    pub access_token: String,
    /// Refresh token, if one was issued
    pub refresh_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API transport
pub struct RestApiConfig {
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the TD Ameritrade API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API transport configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from environment variables, loading a `.env`
    /// file first when one is present.
    ///
    /// Recognized variables: `TDA_CLIENT_ID`, `TDA_ACCESS_TOKEN`,
    /// `TDA_REFRESH_TOKEN`, `TDA_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("loaded .env file"),
            Err(e) => debug!("no .env file loaded: {e}"),
        }

        let client_id =
            get_env_or_default("TDA_CLIENT_ID", String::from("default_client_id"));
        let access_token =
            get_env_or_default("TDA_ACCESS_TOKEN", String::from("default_access_token"));
        let refresh_token = get_env_or_none("TDA_REFRESH_TOKEN");
        let timeout = get_env_or_default("TDA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT);

        if client_id == "default_client_id" {
            error!("TDA_CLIENT_ID not found in environment variables or .env file");
        }
        if access_token == "default_access_token" {
            error!("TDA_ACCESS_TOKEN not found in environment variables or .env file");
        }

        Self {
            credentials: Credentials {
                client_id,
                access_token,
                refresh_token,
            },
            rest_api: RestApiConfig { timeout },
        }
    }

    /// Returns the credentials wrapped in an [`Arc`] for sharing into getters
    pub fn shared_credentials(&self) -> Arc<Credentials> {
        Arc::new(self.credentials.clone())
    }
}
