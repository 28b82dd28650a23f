//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by MoodTunes,
//! implementing app-level authentication and catalog track search. It is the
//! integration layer between the discovery flow and Spotify's services,
//! handling HTTP communication, credential exchange, response mapping, and
//! error classification.
//!
//! ## Overview
//!
//! MoodTunes only reads public catalog data, so the module implements the
//! smallest useful slice of the Web API: a client-credentials token exchange
//! and the `/search` endpoint for tracks. It abstracts away HTTP requests and
//! API quirks, providing a clean Rust interface for higher-level application
//! logic.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (Discovery Flow, CLI, HTTP API)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Client Credentials)
//!     └── Track Search (Catalog Queries, Song Mapping)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials flow:
//! - **App-Level Tokens**: Server-to-server credential exchange, no user consent
//! - **Basic Authorization**: Client ID and secret sent as an HTTP Basic header
//! - **Expiry Buffering**: Advertised lifetimes shortened by a safety margin
//! - **Configuration Guard**: Placeholder credentials fail before any network call
//!
//! ### Track Search Module
//!
//! [`search`] - Handles catalog track search:
//! - **Free-Text Queries**: Paginated `/search` requests with limit and offset
//! - **Empty-Query Short-Circuit**: Whitespace-only input returns an empty page
//!   without touching the network
//! - **Song Mapping**: Normalizes items with Unknown defaults, artwork
//!   placeholders, and per-platform links
//!
//! ## Authentication Strategy
//!
//! The client-credentials grant suits MoodTunes because every operation is a
//! public catalog read:
//!
//! 1. **Credential Validation**: Client ID and secret are checked for
//!    placeholder values before the exchange
//! 2. **Token Exchange**: `grant_type=client_credentials` POST with Basic
//!    authorization
//! 3. **Buffered Expiry**: The stored expiry subtracts a 60 second margin so
//!    in-flight requests never carry a dying token
//! 4. **Process-Scoped Caching**: The token lives in [`crate::management`]'s
//!    token manager and is reused until stale
//!
//! ## Error Handling Philosophy
//!
//! Each submodule classifies failures into a small error enum instead of
//! leaking raw HTTP errors upward:
//! - **Configuration**: Missing or template credentials, reported without any
//!   network traffic
//! - **Provider Rejection**: Non-success statuses carried with their code so
//!   callers can surface "search failed (429)" style notices
//! - **Transport**: Connection failures and unreadable bodies wrapped from
//!   `reqwest::Error`
//!
//! ## API Coverage
//!
//! ### Catalog
//! - `GET /search` - Track search with query, type, limit, and offset
//!
//! ### Authentication
//! - `POST /api/token` - Client-credentials token exchange
//!
//! ## Usage Patterns
//!
//! ```rust
//! let tokens = TokenManager::from_env();
//! let page = spotify::search::search_tracks(
//!     &tokens,
//!     &config::spotify_apiurl(),
//!     "lofi beats",
//!     12,
//!     0,
//! )
//! .await?;
//! ```
//!
//! ## Error Types
//!
//! - **[`auth::TokenError`]** - Configuration, exchange, and transport failures
//! - **[`search::SearchError`]** - Authentication, provider, and transport failures
//!
//! ## Thread Safety
//!
//! All operations use async/await for non-blocking I/O; shared token state is
//! owned by the management layer behind `Arc<Mutex<>>`. No global mutable
//! state or unsafe operations.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **base64** - Basic authorization header encoding
//! - **serde** - Response deserialization into the crate's wire types

pub mod auth;
pub mod search;
