use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    ai::{GeminiInterpreter, IntentInterpreter},
    config,
    management::TokenManager,
    moods,
    spotify::search::{self, SearchError},
    types::{DiscoveryOutcome, DiscoveryPhase, IntentDescriptor, PreferenceInput},
    utils, warning,
};

/// Page size used when the caller does not ask for a specific one.
pub const DEFAULT_SEARCH_LIMIT: u32 = 12;

impl DiscoveryPhase {
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryPhase::Idle => "Waiting for input",
            DiscoveryPhase::AnalyzingProfile => "Analyzing profile...",
            DiscoveryPhase::InterpretingIntent => "Interpreting your vibe...",
            DiscoveryPhase::SearchingTracks => "Searching for tracks...",
            DiscoveryPhase::Results => "Done",
            DiscoveryPhase::Error => "Something went wrong",
        }
    }
}

/// Orchestrates one music discovery from preference signals to tracks.
///
/// The flow sequences profile analysis (profile searches only), intent
/// interpretation, and track search, tracking its current phase for display.
/// Interpretation failures are recovered locally with [`fallback_query`], so
/// the only errors that escape [`DiscoveryFlow::run`] are configuration and
/// authentication problems from the Spotify side. Provider-side search
/// failures degrade into an empty outcome carrying a user-visible notice.
#[derive(Clone)]
pub struct DiscoveryFlow {
    interpreter: Arc<dyn IntentInterpreter>,
    tokens: TokenManager,
    spotify_api_url: String,
    phase: Arc<Mutex<DiscoveryPhase>>,
}

impl DiscoveryFlow {
    pub fn new(
        interpreter: Arc<dyn IntentInterpreter>,
        tokens: TokenManager,
        spotify_api_url: String,
    ) -> Self {
        DiscoveryFlow {
            interpreter,
            tokens,
            spotify_api_url,
            phase: Arc::new(Mutex::new(DiscoveryPhase::Idle)),
        }
    }

    pub fn from_env() -> Self {
        DiscoveryFlow::new(
            Arc::new(GeminiInterpreter::from_env()),
            TokenManager::from_env(),
            config::spotify_apiurl(),
        )
    }

    pub async fn phase(&self) -> DiscoveryPhase {
        *self.phase.lock().await
    }

    async fn set_phase(&self, phase: DiscoveryPhase) {
        *self.phase.lock().await = phase;
    }

    /// Runs a full discovery for the given preference signals.
    ///
    /// Profile analysis only happens when a profile URL is present; its
    /// failure ends the run early with a notice instead of an error.
    /// Interpretation failures and empty interpreted queries fall back to a
    /// locally synthesized query and the run continues.
    pub async fn run(
        &self,
        prefs: &PreferenceInput,
        limit: u32,
    ) -> Result<DiscoveryOutcome, SearchError> {
        let mut profile_notes: Option<String> = None;

        if let Some(url) = prefs.profile_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                self.set_phase(DiscoveryPhase::AnalyzingProfile).await;
                match self.interpreter.analyze_profile(url).await {
                    Ok(notes) => profile_notes = Some(notes),
                    Err(e) => {
                        warning!("Profile analysis failed: {}", e);
                        self.set_phase(DiscoveryPhase::Results).await;
                        return Ok(DiscoveryOutcome {
                            songs: Vec::new(),
                            total: 0,
                            notice: Some(String::from(
                                "Could not analyze that profile; try describing your mood instead.",
                            )),
                            intent: descriptor_from_fallback(prefs),
                            offset: 0,
                            limit,
                        });
                    }
                }
            }
        }

        self.set_phase(DiscoveryPhase::InterpretingIntent).await;
        let intent = match self
            .interpreter
            .interpret(prefs, profile_notes.as_deref())
            .await
        {
            Ok(mut intent) => {
                if intent.search_query.trim().is_empty() {
                    intent.search_query = fallback_query(prefs);
                    warning!(
                        "Interpretation returned no query, using fallback: {}",
                        intent.search_query
                    );
                }
                intent
            }
            Err(e) => {
                let intent = descriptor_from_fallback(prefs);
                warning!(
                    "Interpretation unavailable ({}), using fallback query: {}",
                    e,
                    intent.search_query
                );
                intent
            }
        };

        self.search_step(intent, 0, limit).await
    }

    /// Fetches the next page for a previously interpreted intent.
    ///
    /// The descriptor round-trips through the caller untouched, so paging
    /// never re-invokes the interpreter.
    pub async fn load_more(
        &self,
        intent: &IntentDescriptor,
        offset: u32,
        limit: u32,
    ) -> Result<DiscoveryOutcome, SearchError> {
        self.search_step(intent.clone(), offset, limit).await
    }

    async fn search_step(
        &self,
        intent: IntentDescriptor,
        offset: u32,
        limit: u32,
    ) -> Result<DiscoveryOutcome, SearchError> {
        self.set_phase(DiscoveryPhase::SearchingTracks).await;

        match search::search_tracks(
            &self.tokens,
            &self.spotify_api_url,
            &intent.search_query,
            limit,
            offset,
        )
        .await
        {
            Ok(page) => {
                self.set_phase(DiscoveryPhase::Results).await;
                Ok(DiscoveryOutcome {
                    songs: page.songs,
                    total: page.total,
                    notice: None,
                    intent,
                    offset,
                    limit,
                })
            }
            Err(SearchError::Auth(e)) => {
                self.set_phase(DiscoveryPhase::Error).await;
                Err(SearchError::Auth(e))
            }
            Err(e) => {
                warning!("Track search failed: {}", e);
                self.set_phase(DiscoveryPhase::Results).await;
                Ok(DiscoveryOutcome {
                    songs: Vec::new(),
                    total: 0,
                    notice: Some(format!("Track search is unavailable right now ({}).", e)),
                    intent,
                    offset,
                    limit,
                })
            }
        }
    }
}

/// Synthesizes a search query from the first usable preference signal.
///
/// Used whenever interpretation fails or returns an empty query, in priority
/// order: mood text, selected mood profile, loved song (with artist when
/// given), instrument tags, then a generic catch-all.
pub fn fallback_query(prefs: &PreferenceInput) -> String {
    let mood = prefs.mood_text.trim();
    if !mood.is_empty() {
        return format!("music for {}", mood);
    }

    if let Some(profile) = moods::find_mood(&prefs.mood_id) {
        return format!("{} music", profile.name);
    }

    let song = prefs.song_name.trim();
    if !song.is_empty() {
        let artist = prefs.artist_name.trim();
        if artist.is_empty() {
            return format!("songs like {}", song);
        }
        return format!("songs like {} by {}", song, artist);
    }

    let tags = utils::split_tags(&prefs.instruments);
    if !tags.is_empty() {
        return format!("{} music", tags.join(" "));
    }

    String::from("popular music")
}

fn descriptor_from_fallback(prefs: &PreferenceInput) -> IntentDescriptor {
    IntentDescriptor {
        search_query: fallback_query(prefs),
        ..Default::default()
    }
}
