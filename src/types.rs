use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub album_name: String,
    pub album_art_url: String,
    pub links: PlatformLinks,
    pub art_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformLinks {
    pub spotify: Option<String>,
    pub youtube: Option<String>,
    pub apple_music: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchPage {
    pub songs: Vec<Song>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceInput {
    pub mood_text: String,
    pub mood_id: String,
    pub song_name: String,
    pub artist_name: String,
    pub instruments: String,
    pub genre: String,
    pub audio_data: Option<String>,
    pub audio_mime_type: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentDescriptor {
    pub mood_descriptors: Vec<String>,
    pub instrument_tags: Vec<String>,
    pub tempo: String,
    pub genre_affinities: Vec<String>,
    pub artist_similarity: Vec<String>,
    pub track_metadata: Option<TrackMetadata>,
    pub search_query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackMetadata {
    pub name: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryOutcome {
    pub songs: Vec<Song>,
    pub total: u64,
    pub notice: Option<String>,
    pub intent: IntentDescriptor,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMoreRequest {
    pub intent: IntentDescriptor,
    pub offset: u32,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryPhase {
    Idle,
    AnalyzingProfile,
    InterpretingIntent,
    SearchingTracks,
    Results,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt_hint: &'static str,
}

#[derive(Debug, Clone)]
pub struct VideoCacheEntry {
    pub video_id: Option<String>,
    pub fetched_at: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackSearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TracksPage {
    pub items: Vec<TrackItem>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackItem {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackAlbum {
    pub name: String,
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoSearchResponse {
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoItem {
    pub id: VideoRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoRef {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub title: String,
    pub artist: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub id: String,
    pub name: String,
    pub hint: String,
}
