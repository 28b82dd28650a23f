use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moodtunes::management::VideoCacheManager;
use moodtunes::youtube::VideoError;

fn cache_for(server: &MockServer) -> VideoCacheManager {
    VideoCacheManager::new(server.uri(), "test-key".to_string())
}

fn video_response(ids: &[&str]) -> ResponseTemplate {
    let items: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": {"kind": "youtube#video", "videoId": id}}))
        .collect();
    ResponseTemplate::new(200).set_body_json(json!({ "items": items }))
}

#[tokio::test]
async fn test_lookup_normalizes_and_caches_hits() {
    let server = MockServer::start().await;

    // One live lookup must serve both casings
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("q", "levitating dua lipa"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "1"))
        .and(query_param("key", "test-key"))
        .respond_with(video_response(&["abc123"]))
        .expect(1)
        .mount(&server)
        .await;

    let cache = cache_for(&server);

    let first = cache.lookup("levitating dua lipa").await.unwrap();
    assert_eq!(first.as_deref(), Some("abc123"));

    let second = cache.lookup("  Levitating Dua Lipa ").await.unwrap();
    assert_eq!(second.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_lookup_caches_absent_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(video_response(&[]))
        .expect(1)
        .mount(&server)
        .await;

    let cache = cache_for(&server);

    assert!(cache.lookup("obscure b-side").await.unwrap().is_none());
    // The miss is remembered, not re-queried
    assert!(cache.lookup("obscure b-side").await.unwrap().is_none());
}

#[tokio::test]
async fn test_transient_failure_is_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(video_response(&["xyz789"]))
        .expect(1)
        .mount(&server)
        .await;

    let cache = cache_for(&server);

    // Failure degrades to absent without poisoning the cache
    assert!(cache.lookup("flaky query").await.unwrap().is_none());

    let retry = cache.lookup("flaky query").await.unwrap();
    assert_eq!(retry.as_deref(), Some("xyz789"));
}

#[tokio::test]
async fn test_distinct_queries_get_distinct_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "song one"))
        .respond_with(video_response(&["one111"]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "song two"))
        .respond_with(video_response(&["two222"]))
        .expect(1)
        .mount(&server)
        .await;

    let cache = cache_for(&server);

    assert_eq!(cache.lookup("Song One").await.unwrap().as_deref(), Some("one111"));
    assert_eq!(cache.lookup("Song Two").await.unwrap().as_deref(), Some("two222"));
    assert_eq!(cache.lookup("song one").await.unwrap().as_deref(), Some("one111"));
}

#[tokio::test]
async fn test_placeholder_key_fails_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(video_response(&["never-served"]))
        .expect(0)
        .mount(&server)
        .await;

    let cache = VideoCacheManager::new(server.uri(), "your_youtube_api_key".to_string());

    let err = cache.lookup("anything").await.unwrap_err();
    assert!(matches!(err, VideoError::Config(_)));
}
