use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    ai::{IntentInterpreter, InterpretError},
    config, moods,
    types::{IntentDescriptor, PreferenceInput},
    utils,
};

/// Intent interpreter backed by Google's Gemini `generateContent` endpoint.
///
/// Holds the endpoint, API key, and model identifier injected at construction
/// so instances can point at a mock server in tests. The interpreter asks for
/// a JSON response but still runs fence- and brace-tolerant extraction, since
/// models occasionally wrap structured output in markdown or prose anyway.
pub struct GeminiInterpreter {
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl Part {
    fn text(text: String) -> Self {
        Part {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline(mime_type: String, data: String) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

impl GeminiInterpreter {
    /// Creates an interpreter for the given endpoint, API key, and model.
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        GeminiInterpreter {
            api_url,
            api_key,
            model,
        }
    }

    /// Creates an interpreter from the process environment.
    ///
    /// Values are captured without validation; a missing API key surfaces as
    /// `InterpretError::Config` on the first call, which the discovery flow
    /// recovers with its fallback query.
    pub fn from_env() -> Self {
        GeminiInterpreter::new(
            config::gemini_apiurl(),
            config::gemini_api_key(),
            config::gemini_model(),
        )
    }

    async fn generate(
        &self,
        parts: Vec<Part>,
        response_mime_type: &str,
    ) -> Result<String, InterpretError> {
        if config::is_placeholder(&self.api_key) {
            return Err(InterpretError::Config(String::from(
                "Gemini API key is not configured",
            )));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: String::from(response_mime_type),
            },
        };

        let client = Client::new();
        let response = client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(InterpretError::Provider {
                status: response.status().as_u16(),
            });
        }

        let res: GenerateResponse = response.json().await?;

        let text = res
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(InterpretError::Malformed(String::from(
                "response carried no text",
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl IntentInterpreter for GeminiInterpreter {
    async fn interpret(
        &self,
        prefs: &PreferenceInput,
        profile_notes: Option<&str>,
    ) -> Result<IntentDescriptor, InterpretError> {
        let mut parts = vec![Part::text(build_prompt(prefs, profile_notes))];

        if let Some(data) = &prefs.audio_data {
            if !data.trim().is_empty() {
                let mime = prefs
                    .audio_mime_type
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| String::from("audio/webm"));
                parts.push(Part::inline(mime, data.clone()));
            }
        }

        let text = self.generate(parts, "application/json").await?;

        let json = extract_json(&text).ok_or_else(|| {
            InterpretError::Malformed(String::from("no JSON object in response"))
        })?;

        serde_json::from_str(&json).map_err(|e| InterpretError::Malformed(e.to_string()))
    }

    async fn analyze_profile(&self, profile_url: &str) -> Result<String, InterpretError> {
        let prompt = format!(
            "Look at the social profile URL below and describe, in two or three short \
             sentences, the music taste its owner most plausibly has. Mention likely \
             genres, moods and eras. Respond with plain text only.\n\nProfile: {}",
            profile_url.trim()
        );

        let text = self.generate(vec![Part::text(prompt)], "text/plain").await?;

        Ok(text.trim().to_string())
    }
}

fn build_prompt(prefs: &PreferenceInput, profile_notes: Option<&str>) -> String {
    let mut prompt = String::from(
        "You are a music curator. Translate the listener signals below into a single \
         Spotify track search.\n\nListener signals:\n",
    );

    let mood = prefs.mood_text.trim();
    if !mood.is_empty() {
        prompt.push_str(&format!("- Mood description: {}\n", mood));
    }
    if let Some(profile) = moods::find_mood(&prefs.mood_id) {
        prompt.push_str(&format!(
            "- Selected mood: {} ({})\n",
            profile.name, profile.prompt_hint
        ));
    }
    let song = prefs.song_name.trim();
    if !song.is_empty() {
        prompt.push_str(&format!("- A song they love: {}\n", song));
    }
    let artist = prefs.artist_name.trim();
    if !artist.is_empty() {
        prompt.push_str(&format!("- An artist they love: {}\n", artist));
    }
    let tags = utils::split_tags(&prefs.instruments);
    if !tags.is_empty() {
        prompt.push_str(&format!("- Instruments they enjoy: {}\n", tags.join(", ")));
    }
    let genre = prefs.genre.trim();
    if !genre.is_empty() {
        prompt.push_str(&format!("- Preferred genre: {}\n", genre));
    }
    if let Some(notes) = profile_notes {
        if !notes.trim().is_empty() {
            prompt.push_str(&format!("- Social profile summary: {}\n", notes.trim()));
        }
    }
    if prefs.audio_data.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        prompt.push_str(
            "- An attached audio clip hummed or sung by the listener; infer melody, \
             tempo and mood from it.\n",
        );
    }

    prompt.push_str(
        "\nRespond with JSON only, using exactly this shape:\n\
         {\"moodDescriptors\": [\"...\"], \"instrumentTags\": [\"...\"], \
         \"tempo\": \"...\", \"genreAffinities\": [\"...\"], \
         \"artistSimilarity\": [\"...\"], \
         \"trackMetadata\": {\"name\": \"...\", \"artist\": \"...\"}, \
         \"searchQuery\": \"...\"}\n\
         Set trackMetadata to null unless the signals identify one specific track. \
         searchQuery must be a short phrase that works well as a Spotify track search.",
    );

    prompt
}

fn extract_json(text: &str) -> Option<String> {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim().to_string());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let rest = &trimmed[start + 3..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim().to_string());
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end > start {
        return Some(trimmed[start..=end].to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_json() {
        let text = r#"{"searchQuery": "mellow jazz"}"#;
        assert_eq!(extract_json(text).as_deref(), Some(text));
    }

    #[test]
    fn extracts_fenced_json() {
        let text = "```json\n{\"searchQuery\": \"mellow jazz\"}\n```";
        assert_eq!(
            extract_json(text).as_deref(),
            Some("{\"searchQuery\": \"mellow jazz\"}")
        );
    }

    #[test]
    fn extracts_generic_fence() {
        let text = "```\n{\"tempo\": \"slow\"}\n```";
        assert_eq!(extract_json(text).as_deref(), Some("{\"tempo\": \"slow\"}"));
    }

    #[test]
    fn extracts_json_wrapped_in_prose() {
        let text = "Here is the result: {\"tempo\": \"fast\"} hope it helps";
        assert_eq!(extract_json(text).as_deref(), Some("{\"tempo\": \"fast\"}"));
    }

    #[test]
    fn rejects_text_without_json() {
        assert_eq!(extract_json("no structured output here"), None);
    }

    #[test]
    fn prompt_includes_only_filled_signals() {
        let prefs = PreferenceInput {
            mood_text: String::from("rainy afternoon"),
            genre: String::from("jazz"),
            ..Default::default()
        };

        let prompt = build_prompt(&prefs, None);

        assert!(prompt.contains("Mood description: rainy afternoon"));
        assert!(prompt.contains("Preferred genre: jazz"));
        assert!(!prompt.contains("A song they love"));
        assert!(!prompt.contains("Instruments they enjoy"));
        assert!(!prompt.contains("audio clip"));
    }

    #[test]
    fn prompt_includes_mood_profile_hint() {
        let prefs = PreferenceInput {
            mood_id: String::from("chill"),
            ..Default::default()
        };

        let prompt = build_prompt(&prefs, None);

        assert!(prompt.contains("Selected mood: Chill"));
        assert!(prompt.contains("laid back"));
    }

    #[test]
    fn prompt_includes_profile_notes_and_audio_line() {
        let prefs = PreferenceInput {
            audio_data: Some(String::from("aGVsbG8=")),
            ..Default::default()
        };

        let prompt = build_prompt(&prefs, Some("listens to 80s synthpop"));

        assert!(prompt.contains("Social profile summary: listens to 80s synthpop"));
        assert!(prompt.contains("audio clip"));
    }

    #[test]
    fn descriptor_parses_camel_case_fields() {
        let json = r#"{
            "moodDescriptors": ["calm", "warm"],
            "instrumentTags": ["piano"],
            "tempo": "slow",
            "genreAffinities": ["jazz"],
            "artistSimilarity": ["Bill Evans"],
            "trackMetadata": {"name": "Peace Piece", "artist": "Bill Evans"},
            "searchQuery": "calm piano jazz"
        }"#;

        let descriptor: IntentDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.search_query, "calm piano jazz");
        assert_eq!(descriptor.mood_descriptors, vec!["calm", "warm"]);
        assert_eq!(descriptor.track_metadata.unwrap().artist, "Bill Evans");
    }

    #[test]
    fn descriptor_defaults_missing_fields() {
        let descriptor: IntentDescriptor =
            serde_json::from_str(r#"{"searchQuery": "lofi beats"}"#).unwrap();

        assert_eq!(descriptor.search_query, "lofi beats");
        assert!(descriptor.mood_descriptors.is_empty());
        assert!(descriptor.track_metadata.is_none());
    }
}
