use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moodtunes::management::TokenManager;
use moodtunes::spotify::auth::TokenError;

fn manager_for(server: &MockServer) -> TokenManager {
    TokenManager::new(
        "test-id".to_string(),
        "test-secret".to_string(),
        format!("{}/api/token", server.uri()),
    )
}

fn token_response(value: &str, expires_in: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": value,
        "token_type": "Bearer",
        "expires_in": expires_in
    }))
}

#[tokio::test]
async fn test_cached_token_reused_within_window() {
    let server = MockServer::start().await;

    // A single exchange must serve both calls
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header(
            "Authorization",
            format!("Basic {}", STANDARD.encode("test-id:test-secret")).as_str(),
        ))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(token_response("fresh-token", 3600))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);

    assert_eq!(manager.get_token().await.unwrap(), "fresh-token");
    assert_eq!(manager.get_token().await.unwrap(), "fresh-token");
}

#[tokio::test]
async fn test_token_at_expiry_buffer_is_stale() {
    let server = MockServer::start().await;

    // expires_in equal to the buffer means the token is stale immediately
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("first-token", 60))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("second-token", 3600))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);

    assert_eq!(manager.get_token().await.unwrap(), "first-token");
    assert_eq!(manager.get_token().await.unwrap(), "second-token");
}

#[tokio::test]
async fn test_failed_exchange_clears_cached_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(token_response("doomed-token", 60))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let manager = manager_for(&server);

    assert_eq!(manager.get_token().await.unwrap(), "doomed-token");
    assert!(manager.current_token().await.is_some());

    // The stale token forces a refresh, which now fails
    let err = manager.get_token().await.unwrap_err();
    assert!(matches!(err, TokenError::Exchange { status: 500 }));
    assert!(manager.current_token().await.is_none());
}

#[tokio::test]
async fn test_placeholder_credentials_fail_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(token_response("never-served", 3600))
        .expect(0)
        .mount(&server)
        .await;

    let empty = TokenManager::new(
        String::new(),
        String::new(),
        format!("{}/api/token", server.uri()),
    );
    assert!(matches!(
        empty.get_token().await.unwrap_err(),
        TokenError::Config(_)
    ));

    let template = TokenManager::new(
        "your_spotify_client_id".to_string(),
        "your_spotify_client_secret".to_string(),
        format!("{}/api/token", server.uri()),
    );
    assert!(matches!(
        template.get_token().await.unwrap_err(),
        TokenError::Config(_)
    ));
}
