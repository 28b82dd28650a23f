use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, discovery::DiscoveryFlow, error, info, management::VideoCacheManager};

#[derive(Clone)]
pub struct AppState {
    pub flow: DiscoveryFlow,
    pub videos: VideoCacheManager,
}

impl AppState {
    pub fn from_env() -> Self {
        AppState {
            flow: DiscoveryFlow::from_env(),
            videos: VideoCacheManager::from_env(),
        }
    }
}

pub async fn start_api_server(state: AppState) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/moods", get(api::moods))
        .route("/api/search", post(api::search))
        .route("/api/search/more", post(api::search_more))
        .route("/api/video", get(api::video))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
