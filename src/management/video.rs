use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{
    config,
    types::VideoCacheEntry,
    utils,
    youtube::{self, VideoError},
};

const ENTRY_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct VideoCacheManager {
    api_url: String,
    api_key: String,
    entries: Arc<Mutex<HashMap<String, VideoCacheEntry>>>,
}

impl VideoCacheManager {
    pub fn new(api_url: String, api_key: String) -> Self {
        VideoCacheManager {
            api_url,
            api_key,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_env() -> Self {
        VideoCacheManager::new(config::youtube_apiurl(), config::youtube_api_key())
    }

    pub async fn lookup(&self, query: &str) -> Result<Option<String>, VideoError> {
        let key = utils::normalize_video_query(query);

        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&key) {
                if utils::now_ts() < entry.fetched_at + ENTRY_TTL_SECS {
                    return Ok(entry.video_id.clone());
                }
            }
        }

        match youtube::search_video(&self.api_url, &self.api_key, &key).await {
            Ok(video_id) => {
                let mut entries = self.entries.lock().await;
                entries.insert(
                    key,
                    VideoCacheEntry {
                        video_id: video_id.clone(),
                        fetched_at: utils::now_ts(),
                    },
                );
                Ok(video_id)
            }
            Err(VideoError::Config(msg)) => Err(VideoError::Config(msg)),
            // Transient failures are not cached so the next render retries.
            Err(_) => Ok(None),
        }
    }
}
