use axum::response::Json;

use crate::types::MoodProfile;

pub async fn moods() -> Json<&'static [MoodProfile]> {
    Json(crate::moods::MOOD_PROFILES)
}
