use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};

use crate::{
    discovery::DEFAULT_SEARCH_LIMIT,
    server::AppState,
    spotify::{auth::TokenError, search::SearchError},
    types::{DiscoveryOutcome, LoadMoreRequest, PreferenceInput},
};

pub async fn search(
    Extension(state): Extension<AppState>,
    Json(prefs): Json<PreferenceInput>,
) -> Result<Json<DiscoveryOutcome>, (StatusCode, Json<Value>)> {
    state
        .flow
        .run(&prefs, DEFAULT_SEARCH_LIMIT)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn search_more(
    Extension(state): Extension<AppState>,
    Json(req): Json<LoadMoreRequest>,
) -> Result<Json<DiscoveryOutcome>, (StatusCode, Json<Value>)> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    state
        .flow
        .load_more(&req.intent, req.offset, limit)
        .await
        .map(Json)
        .map_err(error_response)
}

fn error_response(e: SearchError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        SearchError::Auth(TokenError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    };

    (status, Json(json!({ "error": e.to_string() })))
}
