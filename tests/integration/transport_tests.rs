use crate::common::test_config;
use tda_client::prelude::*;

#[tokio::test]
async fn test_get_raw_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/userprincipals")
        .with_status(200)
        .with_body(r#"{"userId":"jdoe"}"#)
        .create_async()
        .await;

    let config = test_config();
    let client = TdHttpClientImpl::new(&config).unwrap();
    let body = client
        .get_raw(&format!("{}/userprincipals", server.url()), &config.credentials)
        .await
        .unwrap();

    assert_eq!(body, r#"{"userId":"jdoe"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_raw_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/123")
        .match_header("authorization", "Bearer integration_token")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let config = test_config();
    let client = TdHttpClientImpl::new(&config).unwrap();
    client
        .get_raw(&format!("{}/accounts/123", server.url()), &config.credentials)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_raw_maps_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/accounts/123")
        .with_status(401)
        .with_body(r#"{"error":"invalid token"}"#)
        .create_async()
        .await;

    let config = test_config();
    let client = TdHttpClientImpl::new(&config).unwrap();
    let result = client
        .get_raw(&format!("{}/accounts/123", server.url()), &config.credentials)
        .await;

    match result {
        Err(AppError::HttpStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid token"));
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_raw_empty_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/userprincipals")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let config = test_config();
    let client = TdHttpClientImpl::new(&config).unwrap();
    let body = client
        .get_raw(&format!("{}/userprincipals", server.url()), &config.credentials)
        .await
        .unwrap();

    assert!(body.is_empty());
}
