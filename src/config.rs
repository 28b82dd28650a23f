//! Configuration management for the MoodTunes discovery service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, AI provider settings, YouTube
//! lookup settings, and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Credential getters deliberately do not panic: missing or placeholder values
//! surface as per-request configuration errors instead of taking the whole
//! server down at startup.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `moodtunes/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/moodtunes/.env`
/// - macOS: `~/Library/Application Support/moodtunes/.env`
/// - Windows: `%LOCALAPPDATA%/moodtunes/.env`
///
/// # Returns
///
/// Returns `Ok(())` whether or not the file exists; a missing or unreadable
/// `.env` file simply means configuration comes from the process environment.
/// Only directory creation failures are reported as errors.
///
/// # Errors
///
/// This function will return an error if the parent directory cannot be created.
///
/// # Example
///
/// ```
/// use moodtunes::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodtunes/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // Missing file is fine; the process environment still applies.
    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the discovery server should listen, defaulting to
/// `127.0.0.1:5173` when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:5173"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| String::from("127.0.0.1:5173"))
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform. Returns an empty string when unset; callers validate
/// with [`is_placeholder`] before use.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_CLIENT_ID").unwrap_or_default()
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. Returns an empty string when unset; callers
/// validate with [`is_placeholder`] before use.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_CLIENT_SECRET").unwrap_or_default()
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints, defaulting to the public API
/// host when unset.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| String::from("https://api.spotify.com/v1"))
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL for the client-credentials token exchange, defaulting to Spotify's
/// public accounts host when unset.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/api/token"))
}

/// Returns the YouTube Data API base URL.
///
/// Retrieves the `YOUTUBE_API_URL` environment variable, defaulting to the
/// public YouTube Data API v3 host when unset.
///
/// # Example
///
/// ```
/// let url = youtube_apiurl(); // e.g., "https://www.googleapis.com/youtube/v3"
/// ```
pub fn youtube_apiurl() -> String {
    env::var("YOUTUBE_API_URL")
        .unwrap_or_else(|_| String::from("https://www.googleapis.com/youtube/v3"))
}

/// Returns the YouTube Data API key.
///
/// Retrieves the `YOUTUBE_API_KEY` environment variable. Returns an empty
/// string when unset; callers validate with [`is_placeholder`] before use.
/// Video lookups are optional, so an absent key degrades lookups instead of
/// failing the server.
pub fn youtube_api_key() -> String {
    env::var("YOUTUBE_API_KEY").unwrap_or_default()
}

/// Returns the Gemini API base URL.
///
/// Retrieves the `GEMINI_API_URL` environment variable, defaulting to the
/// public Generative Language API host when unset.
///
/// # Example
///
/// ```
/// let url = gemini_apiurl(); // e.g., "https://generativelanguage.googleapis.com/v1beta"
/// ```
pub fn gemini_apiurl() -> String {
    env::var("GEMINI_API_URL")
        .unwrap_or_else(|_| String::from("https://generativelanguage.googleapis.com/v1beta"))
}

/// Returns the Gemini API key.
///
/// Retrieves the `GEMINI_API_KEY` environment variable. Returns an empty
/// string when unset; callers validate with [`is_placeholder`] before use.
/// Interpretation failures always have a deterministic query fallback, so an
/// absent key never fails a search.
pub fn gemini_api_key() -> String {
    env::var("GEMINI_API_KEY").unwrap_or_default()
}

/// Returns the Gemini model identifier to use for interpretation requests.
///
/// Retrieves the `GEMINI_MODEL` environment variable, defaulting to
/// `gemini-1.5-flash` when unset.
pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| String::from("gemini-1.5-flash"))
}

/// Reports whether a configured credential is absent or still a template value.
///
/// A value counts as a placeholder when it is empty after trimming or still
/// carries the `your_` prefix shipped in `.env.example`. Distinguishing
/// placeholders from real values lets request handlers return a configuration
/// error instead of sending a doomed request upstream.
///
/// # Example
///
/// ```
/// assert!(is_placeholder(""));
/// assert!(is_placeholder("your_spotify_client_id"));
/// assert!(!is_placeholder("5f2a9c..."));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.starts_with("your_")
}
