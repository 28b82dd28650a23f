use reqwest::Client;

use crate::{config, types::VideoSearchResponse};

/// Errors produced by the YouTube video lookup client.
///
/// `Config` means the request was never sent because the API key is missing
/// or still a template value; `Provider` carries the HTTP status of a
/// rejected request; `Http` covers transport failures and unreadable
/// responses.
#[derive(Debug)]
pub enum VideoError {
    Config(String),
    Provider { status: u16 },
    Http(reqwest::Error),
}

impl std::fmt::Display for VideoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoError::Config(msg) => write!(f, "configuration error: {}", msg),
            VideoError::Provider { status } => {
                write!(f, "video lookup rejected with status {}", status)
            }
            VideoError::Http(e) => write!(f, "video lookup failed: {}", e),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<reqwest::Error> for VideoError {
    fn from(e: reqwest::Error) -> Self {
        VideoError::Http(e)
    }
}

/// Looks up the best-matching YouTube video id for a free-text query.
///
/// Issues a single-result search against the YouTube Data API v3 and returns
/// the first video id, or `None` when the query matches nothing. Callers
/// normally go through the management layer's video cache rather than calling
/// this directly, so repeated lookups for the same song cost one request per
/// day instead of one per page render.
///
/// # Arguments
///
/// * `api_url` - Data API base, e.g. `https://www.googleapis.com/youtube/v3`
/// * `api_key` - API key from the Google Cloud console
/// * `query` - Free-text query, typically "{title} {artist}"
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(id))` - Id of the top-ranked matching video
/// - `Ok(None)` - The search completed but matched nothing
/// - `Err(VideoError)` - Configuration, provider, or transport failure
///
/// # Error Conditions
///
/// - A missing or placeholder API key fails fast with `VideoError::Config`
///   before any network traffic
/// - Non-success statuses (quota exhaustion included) map to
///   `VideoError::Provider` with the status code
///
/// # Example
///
/// ```
/// let id = search_video(
///     &config::youtube_apiurl(),
///     &config::youtube_api_key(),
///     "levitating dua lipa",
/// )
/// .await?;
/// ```
pub async fn search_video(
    api_url: &str,
    api_key: &str,
    query: &str,
) -> Result<Option<String>, VideoError> {
    if config::is_placeholder(api_key) {
        return Err(VideoError::Config(String::from(
            "YouTube API key is not configured",
        )));
    }

    let client = Client::new();
    let response = client
        .get(format!("{}/search", api_url))
        .query(&[
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", "1"),
            ("key", api_key),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(VideoError::Provider {
            status: response.status().as_u16(),
        });
    }

    let res: VideoSearchResponse = response.json().await?;

    Ok(res.items.into_iter().next().and_then(|item| item.id.video_id))
}
