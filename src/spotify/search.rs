use reqwest::Client;

use crate::{
    management::TokenManager,
    spotify::auth::TokenError,
    types::{PlatformLinks, SearchPage, Song, TrackItem, TrackSearchResponse},
    utils::{self, UNKNOWN_ALBUM, UNKNOWN_ARTIST},
};

/// Artwork URL substituted when a track's album carries no images.
pub const PLACEHOLDER_ART_URL: &str = "https://placehold.co/300x300?text=No+Artwork";

/// Errors produced by the track search client.
///
/// `Auth` wraps a token acquisition failure, `Provider` carries the HTTP
/// status of a rejected search request, and `Http` covers transport failures
/// and unreadable responses.
#[derive(Debug)]
pub enum SearchError {
    Auth(TokenError),
    Provider { status: u16 },
    Http(reqwest::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Auth(e) => write!(f, "authentication failed: {}", e),
            SearchError::Provider { status } => {
                write!(f, "search rejected with status {}", status)
            }
            SearchError::Http(e) => write!(f, "search request failed: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<TokenError> for SearchError {
    fn from(e: TokenError) -> Self {
        SearchError::Auth(e)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Http(e)
    }
}

/// Searches the Spotify catalog for tracks matching a free-text query.
///
/// Performs a paginated track search against the Spotify Web API and maps
/// every returned item into a display-ready [`Song`] with artist and album
/// defaults, artwork fallback, and per-platform links filled in.
///
/// # Arguments
///
/// * `tokens` - Token manager providing the app-level bearer credential
/// * `api_url` - Web API base, e.g. `https://api.spotify.com/v1`
/// * `query` - Free-text search query
/// * `limit` - Maximum number of tracks per page (1-50)
/// * `offset` - Zero-based index of the first track to return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SearchPage)` - Mapped songs plus the provider's total match count
/// - `Err(SearchError)` - Authentication, provider, or transport failure
///
/// # Empty Queries
///
/// A query that is empty or whitespace-only short-circuits to an empty page
/// without acquiring a token or touching the network. Submitting nothing is
/// an expected UI state, not an error.
///
/// # Field Mapping
///
/// - Artist: first listed artist, or "Unknown Artist"
/// - Album: album name, or "Unknown Album"
/// - Artwork: first album image, or [`PLACEHOLDER_ART_URL`] together with a
///   short `art_hint` derived from whichever names are not the defaults
/// - Links: Spotify's canonical track page when present, plus YouTube and
///   Apple Music search URLs derived from title and artist
///
/// # Example
///
/// ```
/// let page = search_tracks(&tokens, &config::spotify_apiurl(), "mellow jazz", 12, 0).await?;
/// println!("{} of {} tracks", page.songs.len(), page.total);
/// ```
pub async fn search_tracks(
    tokens: &TokenManager,
    api_url: &str,
    query: &str,
    limit: u32,
    offset: u32,
) -> Result<SearchPage, SearchError> {
    if query.trim().is_empty() {
        return Ok(SearchPage {
            songs: Vec::new(),
            total: 0,
        });
    }

    let token = tokens.get_token().await?;

    let limit_param = limit.to_string();
    let offset_param = offset.to_string();

    let client = Client::new();
    let response = client
        .get(format!("{}/search", api_url))
        .bearer_auth(token)
        .query(&[
            ("q", query),
            ("type", "track"),
            ("limit", limit_param.as_str()),
            ("offset", offset_param.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SearchError::Provider {
            status: response.status().as_u16(),
        });
    }

    let res: TrackSearchResponse = response.json().await?;

    Ok(SearchPage {
        songs: res.tracks.items.into_iter().map(song_from_item).collect(),
        total: res.tracks.total,
    })
}

fn song_from_item(item: TrackItem) -> Song {
    let artist_name = item
        .artists
        .first()
        .map(|artist| artist.name.trim())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .unwrap_or_else(|| String::from(UNKNOWN_ARTIST));

    let album_name = {
        let name = item.album.name.trim();
        if name.is_empty() {
            String::from(UNKNOWN_ALBUM)
        } else {
            String::from(name)
        }
    };

    let (album_art_url, art_hint) = match item
        .album
        .images
        .first()
        .filter(|image| !image.url.trim().is_empty())
    {
        Some(image) => (image.url.clone(), None),
        None => (
            String::from(PLACEHOLDER_ART_URL),
            utils::art_hint(&artist_name, &album_name),
        ),
    };

    let links = PlatformLinks {
        spotify: item.external_urls.spotify,
        youtube: Some(utils::youtube_search_link(&item.name, &artist_name)),
        apple_music: Some(utils::apple_music_search_link(&item.name, &artist_name)),
    };

    Song {
        id: item.id,
        title: item.name,
        artist_name,
        album_name,
        album_art_url,
        links,
        art_hint,
    }
}
