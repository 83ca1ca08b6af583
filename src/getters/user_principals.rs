use crate::config::Credentials;
use crate::constants::URL_BASE;
use crate::error::AppError;
use crate::getters::ApiGetter;
use crate::transport::TdHttpClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Canonical names of the optional user-principals response sections, in
/// the order the API expects them to be listed.
const FIELD_NAMES: [&str; 4] = [
    "streamerSubscriptionKeys",
    "streamerConnectionInfo",
    "preferences",
    "surrogateIds",
];

/// Fetches the user principals document, with four independent flags
/// selecting optional response sections.
///
/// Not account-scoped: the endpoint is `userprincipals` with an optional
/// `?fields=` listing the enabled sections in a fixed canonical order.
pub struct UserPrincipalsGetter {
    credentials: Arc<Credentials>,
    streamer_subscription_keys: bool,
    streamer_connection_info: bool,
    preferences: bool,
    surrogate_ids: bool,
    url: String,
}

impl UserPrincipalsGetter {
    /// Creates the getter; there is nothing to validate, so construction
    /// cannot fail
    pub fn new(
        credentials: Arc<Credentials>,
        streamer_subscription_keys: bool,
        streamer_connection_info: bool,
        preferences: bool,
        surrogate_ids: bool,
    ) -> Self {
        let mut getter = Self {
            credentials,
            streamer_subscription_keys,
            streamer_connection_info,
            preferences,
            surrogate_ids,
            url: String::new(),
        };
        getter.refresh();
        getter
    }

    /// Whether the response will include the streamer subscription keys
    pub fn returns_streamer_subscription_keys(&self) -> bool {
        self.streamer_subscription_keys
    }

    /// Whether the response will include the streamer connection info
    pub fn returns_streamer_connection_info(&self) -> bool {
        self.streamer_connection_info
    }

    /// Whether the response will include the preferences section
    pub fn returns_preferences(&self) -> bool {
        self.preferences
    }

    /// Whether the response will include the surrogate ids
    pub fn returns_surrogate_ids(&self) -> bool {
        self.surrogate_ids
    }

    /// Toggles the streamer subscription keys section and rebuilds the URL
    pub fn return_streamer_subscription_keys(&mut self, enabled: bool) {
        self.streamer_subscription_keys = enabled;
        self.refresh();
    }

    /// Toggles the streamer connection info section and rebuilds the URL
    pub fn return_streamer_connection_info(&mut self, enabled: bool) {
        self.streamer_connection_info = enabled;
        self.refresh();
    }

    /// Toggles the preferences section and rebuilds the URL
    pub fn return_preferences(&mut self, enabled: bool) {
        self.preferences = enabled;
        self.refresh();
    }

    /// Toggles the surrogate ids section and rebuilds the URL
    pub fn return_surrogate_ids(&mut self, enabled: bool) {
        self.surrogate_ids = enabled;
        self.refresh();
    }
}

impl ApiGetter for UserPrincipalsGetter {
    fn credentials(&self) -> &Arc<Credentials> {
        &self.credentials
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn rebuild(&self) -> String {
        let enabled = [
            self.streamer_subscription_keys,
            self.streamer_connection_info,
            self.preferences,
            self.surrogate_ids,
        ];
        let fields: Vec<&str> = FIELD_NAMES
            .iter()
            .zip(enabled)
            .filter_map(|(name, on)| on.then_some(*name))
            .collect();

        let mut url = format!("{URL_BASE}userprincipals");
        if !fields.is_empty() {
            url.push_str("?fields=");
            url.push_str(&fields.join(","));
        }
        url
    }

    fn store_url(&mut self, url: String) {
        self.url = url;
    }
}

/// Fetches and parses the user principals document needed to open a
/// streaming session: subscription keys and connection info enabled,
/// preferences and surrogate ids off.
///
/// An empty response body yields `Value::Null` rather than an error.
pub async fn get_user_principals_for_streaming(
    client: &impl TdHttpClient,
    credentials: Arc<Credentials>,
) -> Result<Value, AppError> {
    let getter = UserPrincipalsGetter::new(credentials, true, true, false, false);
    debug!("fetching user principals for streaming");

    let body = client.get_raw(getter.url(), getter.credentials()).await?;
    if body.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&body)?)
}
