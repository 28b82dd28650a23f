use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moodtunes::ai::{IntentInterpreter, InterpretError};
use moodtunes::discovery::{DiscoveryFlow, fallback_query};
use moodtunes::management::TokenManager;
use moodtunes::spotify::search::SearchError;
use moodtunes::types::{DiscoveryPhase, IntentDescriptor, PreferenceInput};

/// Interpreter substitute returning canned output, or failing when canned
/// output is absent. Counts `interpret` invocations.
struct CannedInterpreter {
    descriptor: Option<IntentDescriptor>,
    profile_notes: Option<String>,
    interpret_calls: AtomicUsize,
}

impl CannedInterpreter {
    fn returning(descriptor: IntentDescriptor) -> Self {
        CannedInterpreter {
            descriptor: Some(descriptor),
            profile_notes: None,
            interpret_calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        CannedInterpreter {
            descriptor: None,
            profile_notes: None,
            interpret_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IntentInterpreter for CannedInterpreter {
    async fn interpret(
        &self,
        _prefs: &PreferenceInput,
        _profile_notes: Option<&str>,
    ) -> Result<IntentDescriptor, InterpretError> {
        self.interpret_calls.fetch_add(1, Ordering::SeqCst);
        self.descriptor
            .clone()
            .ok_or_else(|| InterpretError::Malformed("canned failure".to_string()))
    }

    async fn analyze_profile(&self, _profile_url: &str) -> Result<String, InterpretError> {
        self.profile_notes
            .clone()
            .ok_or_else(|| InterpretError::Provider { status: 503 })
    }
}

fn flow_for(server: &MockServer, interpreter: Arc<CannedInterpreter>) -> DiscoveryFlow {
    let tokens = TokenManager::new(
        "test-id".to_string(),
        "test-secret".to_string(),
        format!("{}/api/token", server.uri()),
    );
    DiscoveryFlow::new(interpreter, tokens, server.uri())
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "flow-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

fn tracks_response(ids: &[&str], total: u64) -> ResponseTemplate {
    let items: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Track {}", id),
                "artists": [{"name": "Some Artist"}],
                "album": {"name": "Some Album", "images": [{"url": "https://img.example/a.jpg"}]},
                "external_urls": {"spotify": format!("https://open.spotify.com/track/{}", id)}
            })
        })
        .collect();
    ResponseTemplate::new(200).set_body_json(json!({
        "tracks": {"items": items, "total": total}
    }))
}

#[test]
fn test_fallback_ladder_prefers_mood_text() {
    let prefs = PreferenceInput {
        mood_text: "rainy afternoon".to_string(),
        mood_id: "chill".to_string(),
        song_name: "Levitating".to_string(),
        instruments: "piano".to_string(),
        ..Default::default()
    };
    assert_eq!(fallback_query(&prefs), "music for rainy afternoon");
}

#[test]
fn test_fallback_ladder_mood_profile_then_song_then_instruments() {
    let profile = PreferenceInput {
        mood_id: "chill".to_string(),
        song_name: "Levitating".to_string(),
        ..Default::default()
    };
    assert_eq!(fallback_query(&profile), "Chill music");

    let song_only = PreferenceInput {
        song_name: "Levitating".to_string(),
        ..Default::default()
    };
    assert_eq!(fallback_query(&song_only), "songs like Levitating");

    let song_with_artist = PreferenceInput {
        song_name: "Levitating".to_string(),
        artist_name: "Dua Lipa".to_string(),
        ..Default::default()
    };
    assert_eq!(fallback_query(&song_with_artist), "songs like Levitating by Dua Lipa");

    let instruments = PreferenceInput {
        instruments: "piano, cello".to_string(),
        ..Default::default()
    };
    assert_eq!(fallback_query(&instruments), "piano cello music");

    assert_eq!(fallback_query(&PreferenceInput::default()), "popular music");
}

#[tokio::test]
async fn test_interpretation_failure_recovers_with_fallback_query() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "music for rainy afternoon"))
        .respond_with(tracks_response(&["t1"], 1))
        .expect(1)
        .mount(&server)
        .await;

    let interpreter = Arc::new(CannedInterpreter::failing());
    let flow = flow_for(&server, interpreter.clone());

    let prefs = PreferenceInput {
        mood_text: "rainy afternoon".to_string(),
        ..Default::default()
    };
    let outcome = flow.run(&prefs, 12).await.unwrap();

    assert_eq!(outcome.intent.search_query, "music for rainy afternoon");
    assert_eq!(outcome.songs.len(), 1);
    assert!(outcome.notice.is_none());
    assert_eq!(interpreter.interpret_calls.load(Ordering::SeqCst), 1);
    assert_eq!(flow.phase().await, DiscoveryPhase::Results);
}

#[tokio::test]
async fn test_empty_interpreted_query_falls_back_but_keeps_descriptor() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "songs like Levitating by Dua Lipa"))
        .respond_with(tracks_response(&["t1"], 1))
        .expect(1)
        .mount(&server)
        .await;

    let descriptor = IntentDescriptor {
        mood_descriptors: vec!["upbeat".to_string()],
        search_query: "   ".to_string(),
        ..Default::default()
    };
    let flow = flow_for(&server, Arc::new(CannedInterpreter::returning(descriptor)));

    let prefs = PreferenceInput {
        song_name: "Levitating".to_string(),
        artist_name: "Dua Lipa".to_string(),
        ..Default::default()
    };
    let outcome = flow.run(&prefs, 12).await.unwrap();

    assert_eq!(outcome.intent.search_query, "songs like Levitating by Dua Lipa");
    // The rest of the interpreted descriptor survives the query substitution
    assert_eq!(outcome.intent.mood_descriptors, vec!["upbeat"]);
}

#[tokio::test]
async fn test_load_more_reuses_intent_without_reinterpreting() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "calm piano jazz"))
        .and(query_param("offset", "0"))
        .respond_with(tracks_response(&["t1", "t2"], 30))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "calm piano jazz"))
        .and(query_param("offset", "12"))
        .respond_with(tracks_response(&["t3"], 30))
        .expect(1)
        .mount(&server)
        .await;

    let descriptor = IntentDescriptor {
        search_query: "calm piano jazz".to_string(),
        ..Default::default()
    };
    let interpreter = Arc::new(CannedInterpreter::returning(descriptor));
    let flow = flow_for(&server, interpreter.clone());

    let first = flow.run(&PreferenceInput::default(), 12).await.unwrap();
    assert_eq!(first.offset, 0);
    assert_eq!(first.songs.len(), 2);

    let next = flow.load_more(&first.intent, 12, 12).await.unwrap();
    assert_eq!(next.offset, 12);
    assert_eq!(next.songs.len(), 1);

    // Paging must not re-run interpretation
    assert_eq!(interpreter.interpret_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_failure_degrades_to_notice() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let descriptor = IntentDescriptor {
        search_query: "anything".to_string(),
        ..Default::default()
    };
    let flow = flow_for(&server, Arc::new(CannedInterpreter::returning(descriptor)));

    let outcome = flow.run(&PreferenceInput::default(), 12).await.unwrap();

    assert!(outcome.songs.is_empty());
    assert_eq!(outcome.total, 0);
    assert!(outcome.notice.is_some());
    assert_eq!(flow.phase().await, DiscoveryPhase::Results);
}

#[tokio::test]
async fn test_profile_analysis_failure_ends_run_with_notice() {
    let server = MockServer::start().await;

    // Neither interpretation nor search runs after a failed profile analysis
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(tracks_response(&[], 0))
        .expect(0)
        .mount(&server)
        .await;

    let interpreter = Arc::new(CannedInterpreter::failing());
    let flow = flow_for(&server, interpreter.clone());

    let prefs = PreferenceInput {
        mood_text: "rainy afternoon".to_string(),
        profile_url: Some("https://instagram.com/someone".to_string()),
        ..Default::default()
    };
    let outcome = flow.run(&prefs, 12).await.unwrap();

    assert!(outcome.songs.is_empty());
    assert!(outcome.notice.is_some());
    // The fallback intent still gives the caller something to page with
    assert_eq!(outcome.intent.search_query, "music for rainy afternoon");
    assert_eq!(interpreter.interpret_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_auth_failure_is_surfaced_not_degraded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let descriptor = IntentDescriptor {
        search_query: "anything".to_string(),
        ..Default::default()
    };
    let flow = flow_for(&server, Arc::new(CannedInterpreter::returning(descriptor)));

    let err = flow.run(&PreferenceInput::default(), 12).await.unwrap_err();
    assert!(matches!(err, SearchError::Auth(_)));
    assert_eq!(flow.phase().await, DiscoveryPhase::Error);
}
