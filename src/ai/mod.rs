//! # Intent Interpretation Module
//!
//! This module is the boundary between MoodTunes and its LLM provider. The
//! discovery flow hands over raw listener signals (mood text, a loved song,
//! instruments, genre, an optional audio snippet, a profile summary) and gets
//! back a structured [`crate::types::IntentDescriptor`] whose `search_query`
//! drives the Spotify track search.
//!
//! ## Design
//!
//! The provider sits behind the [`IntentInterpreter`] trait so orchestration
//! code never depends on a concrete vendor API. Production wiring injects
//! [`gemini::GeminiInterpreter`]; tests inject canned interpreters returning
//! fixed descriptors or forced failures.
//!
//! The model is treated as a black box with an unreliable output contract:
//! responses may arrive fenced in markdown, wrapped in prose, or missing
//! fields entirely. The Gemini client tolerates all of that during JSON
//! extraction, and whatever still fails is reported as an error for the
//! caller's deterministic fallback policy. Interpretation can therefore
//! degrade a search but never fail one.
//!
//! ## Error Types
//!
//! [`InterpretError`] classifies failures into configuration (no API key),
//! provider rejection (non-success status), transport, and malformed output.
//! None of them are fatal anywhere in the application.

pub mod gemini;

pub use gemini::GeminiInterpreter;

use async_trait::async_trait;

use crate::types::{IntentDescriptor, PreferenceInput};

/// Errors produced by an intent interpretation provider.
#[derive(Debug)]
pub enum InterpretError {
    Config(String),
    Provider { status: u16 },
    Http(reqwest::Error),
    Malformed(String),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpretError::Config(msg) => write!(f, "configuration error: {}", msg),
            InterpretError::Provider { status } => {
                write!(f, "interpretation rejected with status {}", status)
            }
            InterpretError::Http(e) => write!(f, "interpretation request failed: {}", e),
            InterpretError::Malformed(msg) => {
                write!(f, "interpretation response unusable: {}", msg)
            }
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<reqwest::Error> for InterpretError {
    fn from(e: reqwest::Error) -> Self {
        InterpretError::Http(e)
    }
}

/// Translates listener preference signals into a structured search intent.
///
/// Implementations call an external model; the discovery flow only depends on
/// this trait so interpretation stays swappable and testable. Both methods may
/// fail freely: callers recover `interpret` failures with a locally
/// synthesized query and treat `analyze_profile` failures as a degraded
/// search.
#[async_trait]
pub trait IntentInterpreter: Send + Sync {
    /// Produces an intent descriptor from the listener's signals.
    ///
    /// `profile_notes` carries the summary produced by [`Self::analyze_profile`]
    /// when the submission was a social-profile search.
    async fn interpret(
        &self,
        prefs: &PreferenceInput,
        profile_notes: Option<&str>,
    ) -> Result<IntentDescriptor, InterpretError>;

    /// Summarizes the likely music taste behind a social profile URL.
    async fn analyze_profile(&self, profile_url: &str) -> Result<String, InterpretError>;
}
