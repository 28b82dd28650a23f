use chrono::Utc;
use urlencoding::encode;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

pub fn now_ts() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

pub fn normalize_video_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn art_hint(artist: &str, album: &str) -> Option<String> {
    let mut words: Vec<&str> = Vec::new();

    if artist != UNKNOWN_ARTIST {
        if let Some(word) = artist.split_whitespace().next() {
            words.push(word);
        }
    }
    if album != UNKNOWN_ALBUM {
        if let Some(word) = album.split_whitespace().next() {
            words.push(word);
        }
    }

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

pub fn youtube_search_link(title: &str, artist: &str) -> String {
    let term = format!("{} {}", title, artist);
    format!(
        "https://www.youtube.com/results?search_query={}",
        encode(term.trim())
    )
}

pub fn apple_music_search_link(title: &str, artist: &str) -> String {
    let term = format!("{} {}", title, artist);
    format!("https://music.apple.com/search?term={}", encode(term.trim()))
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
