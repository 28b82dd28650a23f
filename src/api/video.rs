use std::collections::HashMap;

use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde_json::{Value, json};

use crate::server::AppState;

pub async fn video(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let query = params.get("q").map(String::as_str).unwrap_or_default();

    if query.trim().is_empty() {
        return Ok(Json(json!({ "videoId": null })));
    }

    match state.videos.lookup(query).await {
        Ok(video_id) => Ok(Json(json!({ "videoId": video_id }))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )),
    }
}
