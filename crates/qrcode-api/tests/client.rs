//! Client tests: the fetch contract against a real HTTP server.

mod support;

use qrcode_api::{ApiConfig, FetchError, QrCode, QrCodeClient, QrCodeSource};
use support::{start_mock_backend, unreachable_base_url};

const KEY: &str = "test-key-123";

fn client_for(base_url: &str) -> QrCodeClient {
    QrCodeClient::new(ApiConfig::new(base_url, KEY).unwrap())
}

#[tokio::test]
async fn test_request_shape() {
    let backend = start_mock_backend(200, r#"{"qr_codes":[]}"#).await;
    let codes = client_for(&backend.base_url).list_qr_codes().await.expect("fetch failed");
    assert!(codes.is_empty());

    let seen = backend.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].api_key.as_deref(), Some(KEY));
    assert_eq!(seen[0].accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_each_caller_sends_the_key() {
    let backend = start_mock_backend(200, r#"{"qr_codes":[{"id":"a","status":"active"}]}"#).await;

    // Summary and listing each build their own client from the same config
    let summary = client_for(&backend.base_url);
    let listing = client_for(&format!("{}/", backend.base_url));
    summary.list_qr_codes().await.unwrap();
    listing.list_qr_codes().await.unwrap();

    let seen = backend.requests();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|r| r.api_key.as_deref() == Some(KEY)));
}

#[tokio::test]
async fn test_order_preserved() {
    let body = r#"{"qr_codes":[{"id":1,"status":"used"},{"id":2,"status":"unused"}]}"#;
    let backend = start_mock_backend(200, body).await;

    let codes = client_for(&backend.base_url).list_qr_codes().await.unwrap();
    assert_eq!(codes, vec![QrCode::new(1, "used"), QrCode::new(2, "unused")]);
}

#[tokio::test]
async fn test_non_success_status() {
    let backend = start_mock_backend(401, r#"{"error":"Invalid client_app_id"}"#).await;

    let err = client_for(&backend.base_url).list_qr_codes().await.unwrap_err();
    match &err {
        FetchError::Http { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("Invalid client_app_id"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert!(err.is_auth());
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_missing_collection_field() {
    let backend = start_mock_backend(200, r#"{"codes":[]}"#).await;

    let err = client_for(&backend.base_url).list_qr_codes().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_non_json_body() {
    let backend = start_mock_backend(200, "<html>maintenance</html>").await;

    let err = client_for(&backend.base_url).list_qr_codes().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend() {
    let base_url = unreachable_base_url().await;

    let err = client_for(&base_url).list_qr_codes().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
    assert!(err.is_transient());
}
