use crate::config::{Config, Credentials};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::getters::ApiGetter;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Seam between the getters and the network.
///
/// The getters guarantee that by the time a call reaches this trait the URL
/// is fully and correctly encoded for their current parameter state; the
/// transport only attaches authentication and moves bytes.
#[async_trait]
pub trait TdHttpClient: Send + Sync {
    /// Issues an authenticated GET against `url` and returns the raw
    /// response body
    async fn get_raw(&self, url: &str, credentials: &Credentials) -> Result<String, AppError>;
}

/// Default [`TdHttpClient`] backed by a reqwest client
pub struct TdHttpClientImpl {
    http_client: Client,
}

impl TdHttpClientImpl {
    /// Builds the client with the configured request timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self { http_client })
    }

    /// Performs the request a getter describes and returns the raw body
    pub async fn get<G: ApiGetter + Sync>(&self, getter: &G) -> Result<String, AppError> {
        self.get_raw(getter.url(), getter.credentials()).await
    }
}

#[async_trait]
impl TdHttpClient for TdHttpClientImpl {
    async fn get_raw(&self, url: &str, credentials: &Credentials) -> Result<String, AppError> {
        debug!("GET {url}");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&credentials.access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("request failed with status {status}: {url}");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!("received {} bytes", body.len());
        Ok(body)
    }
}
