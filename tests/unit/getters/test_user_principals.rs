use crate::common::credentials;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;
use tda_client::prelude::*;

const URL: &str = "https://api.tdameritrade.com/v1/userprincipals";

#[test]
fn test_no_fields() {
    let getter = UserPrincipalsGetter::new(credentials(), false, false, false, false);
    assert_eq!(getter.url(), URL);
}

#[test]
fn test_all_fields_in_canonical_order() {
    let getter = UserPrincipalsGetter::new(credentials(), true, true, true, true);
    assert_eq!(
        getter.url(),
        format!(
            "{URL}?fields=streamerSubscriptionKeys,streamerConnectionInfo,preferences,surrogateIds"
        )
    );
}

#[test]
fn test_single_fields() {
    let getter = UserPrincipalsGetter::new(credentials(), true, false, false, false);
    assert_eq!(getter.url(), format!("{URL}?fields=streamerSubscriptionKeys"));

    let getter = UserPrincipalsGetter::new(credentials(), false, false, false, true);
    assert_eq!(getter.url(), format!("{URL}?fields=surrogateIds"));
}

#[test]
fn test_flag_round_trip_and_rebuild() {
    let mut getter = UserPrincipalsGetter::new(credentials(), false, false, false, false);

    getter.return_preferences(true);
    assert!(getter.returns_preferences());
    assert_eq!(getter.url(), format!("{URL}?fields=preferences"));

    getter.return_preferences(false);
    assert!(!getter.returns_preferences());
    assert_eq!(getter.url(), URL);
}

#[test]
fn test_flag_setter_idempotence() {
    let mut getter = UserPrincipalsGetter::new(credentials(), true, false, true, false);
    let before = getter.url().to_string();
    getter.return_streamer_subscription_keys(true);
    getter.return_preferences(true);
    getter.return_surrogate_ids(false);
    assert_eq!(getter.url(), before);
}

/// Transport stub that records every requested URL and answers with a
/// canned body
struct CannedClient {
    body: String,
    requested: Mutex<Vec<String>>,
}

impl CannedClient {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TdHttpClient for CannedClient {
    async fn get_raw(&self, url: &str, _credentials: &Credentials) -> Result<String, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

#[tokio::test]
async fn test_streaming_convenience_requests_fixed_fields() {
    let client = CannedClient::new(r#"{"userId":"jdoe"}"#);

    let doc = get_user_principals_for_streaming(&client, credentials())
        .await
        .unwrap();
    assert_eq!(doc, json!({"userId": "jdoe"}));

    let requested = client.requested.lock().unwrap();
    assert_eq!(requested.len(), 1);
    assert_eq!(
        requested[0],
        format!("{URL}?fields=streamerSubscriptionKeys,streamerConnectionInfo")
    );
}

#[tokio::test]
async fn test_streaming_convenience_empty_body_is_null() {
    let client = CannedClient::new("");
    let doc = get_user_principals_for_streaming(&client, credentials())
        .await
        .unwrap();
    assert_eq!(doc, Value::Null);
}

#[tokio::test]
async fn test_streaming_convenience_bad_json_is_error() {
    let client = CannedClient::new("{not json");
    let result = get_user_principals_for_streaming(&client, credentials()).await;
    assert!(matches!(result, Err(AppError::Serialization(_))));
}
