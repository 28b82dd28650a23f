use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config,
    spotify::auth::{self, TokenError},
    types::AccessToken,
    utils,
};

#[derive(Clone)]
pub struct TokenManager {
    client_id: String,
    client_secret: String,
    token_url: String,
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, token_url: String) -> Self {
        TokenManager {
            client_id,
            client_secret,
            token_url,
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn from_env() -> Self {
        TokenManager::new(
            config::spotify_client_id(),
            config::spotify_client_secret(),
            config::spotify_apitoken_url(),
        )
    }

    pub async fn get_token(&self) -> Result<String, TokenError> {
        {
            let lock = self.token.lock().await;
            if let Some(token) = lock.as_ref() {
                if utils::now_ts() < token.expires_at {
                    return Ok(token.value.clone());
                }
            }
        }

        // Exchange without holding the lock; duplicate refreshes are idempotent.
        let exchange =
            auth::request_client_token(&self.token_url, &self.client_id, &self.client_secret)
                .await;

        let mut lock = self.token.lock().await;
        match exchange {
            Ok(token) => {
                let value = token.value.clone();
                *lock = Some(token);
                Ok(value)
            }
            Err(e) => {
                *lock = None;
                Err(e)
            }
        }
    }

    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }
}
