//! # API Module
//!
//! This module provides the HTTP API endpoints for the MoodTunes discovery
//! server. It implements the JSON surface the browser UI calls, an embedded
//! exerciser page, and a health check endpoint.
//!
//! ## Overview
//!
//! The API module serves as the web interface layer for MoodTunes. It
//! provides HTTP endpoints that handle:
//!
//! - **Music Discovery**: Accepts listener preference signals, runs the
//!   interpretation and search flow, and returns display-ready songs with a
//!   reusable intent descriptor for paging
//! - **Video Lookup**: Resolves YouTube video ids for in-page playback
//!   through the process-scoped video cache
//! - **Static Data**: Serves the built-in mood profiles for the UI's chips
//! - **Health Monitoring**: Provides a health check endpoint for system
//!   monitoring and deployment verification
//!
//! ## Endpoints
//!
//! ### Discovery
//!
//! - [`search`] - `POST /api/search`; runs a full discovery for a preference
//!   submission and returns a [`crate::types::DiscoveryOutcome`]
//! - [`search_more`] - `POST /api/search/more`; fetches the next page for a
//!   previously returned intent descriptor without re-interpreting
//! - [`video`] - `GET /api/video?q=`; resolves the best-matching video id,
//!   `null` when nothing matches
//! - [`moods`] - `GET /api/moods`; lists the built-in mood profiles
//!
//! ### Pages
//!
//! - [`index`] - `GET /`; a single embedded HTML page for exercising the API
//!   by hand
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function wired into Axum's
//! routing system, with the shared [`crate::server::AppState`] injected as an
//! `Extension`.
//!
//! ## Error Semantics
//!
//! Degraded upstream conditions (provider rejections, interpretation
//! failures) surface as successful responses carrying a `notice` or a `null`
//! video id, so the UI stays functional. Only configuration and
//! authentication problems map to JSON `{ "error": ... }` bodies with 5xx
//! statuses.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use moodtunes::api::{health, search};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/api/search", post(search));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::discovery`] - Orchestration behind the search endpoints
//! - [`crate::management`] - Token and video caches behind the handlers
//! - [`crate::types`] - Request and response type definitions

mod health;
mod index;
mod moods;
mod search;
mod video;

pub use health::health;
pub use index::index;
pub use moods::moods;
pub use search::search;
pub use search::search_more;
pub use video::video;
