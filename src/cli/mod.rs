//! # CLI Module
//!
//! This module provides the command-line interface layer for MoodTunes, a
//! mood-driven music discovery service. It implements all user-facing CLI
//! commands and coordinates between the discovery flow, the HTTP server, and
//! user interaction components.
//!
//! ## Overview
//!
//! The CLI module serves as the terminal interface to the same functionality
//! the web UI exposes. It provides commands for:
//!
//! - **Serving**: Hosting the HTTP API and the embedded browser page
//! - **One-Shot Discovery**: Running a full preference-to-tracks search from
//!   the terminal
//! - **Static Data**: Listing the built-in mood profiles
//!
//! ## Command Categories
//!
//! ### Server Operations
//!
//! - [`serve`] - Starts the discovery server, optionally opening the embedded
//!   page in the default browser
//!
//! ### Discovery Operations
//!
//! - [`search`] - Runs one discovery from command-line preference flags,
//!   showing live phase feedback and a result table
//!
//! ### Information Commands
//!
//! - [`moods`] - Lists the built-in mood profiles with their prompt hints
//!
//! ## Architecture Design
//!
//! The CLI module follows the same layered approach as the HTTP surface:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Discovery Layer (Orchestration)
//!     ↓
//! AI / Spotify / YouTube Clients
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the discovery flow and management modules
//! while handling user interaction, progress feedback, and error
//! presentation.
//!
//! ## Progress and User Experience
//!
//! Long-running operations provide feedback in the application's house
//! style:
//!
//! - **Phase Spinners**: The search command mirrors the discovery flow's
//!   current phase in a live spinner message
//! - **Status Macros**: Output goes through the shared `info!`, `success!`,
//!   `warning!`, and `error!` macros for consistent coloring
//! - **Tables**: Results and profile listings render as `tabled` tables
//!
//! ## Error Handling Philosophy
//!
//! Degraded upstream conditions (interpretation failures, provider
//! rejections) surface as warnings followed by whatever results remain.
//! Only configuration and authentication failures terminate the command,
//! through the exiting `error!` macro.
//!
//! ## Usage Patterns
//!
//! ### Serving the Web UI
//! ```bash
//! moodtunes serve --open           # Start the server and open the page
//! ```
//!
//! ### Terminal Discovery
//! ```bash
//! moodtunes search --mood "rainy afternoon"
//! moodtunes search --song "Levitating" --artist "Dua Lipa" --limit 5
//! moodtunes search --instruments "piano, cello" --genre classical
//! ```
//!
//! ### Reference Data
//! ```bash
//! moodtunes moods                  # List selectable mood profiles
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::discovery`] - Orchestration of interpretation and search
//! - [`crate::server`] - HTTP server hosting for the serve command
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Formatting helpers for table output

mod moods;
mod search;
mod serve;

pub use moods::moods;
pub use search::search;
pub use serve::serve;
