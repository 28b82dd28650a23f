use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    discovery::{DEFAULT_SEARCH_LIMIT, DiscoveryFlow},
    error, info, success,
    types::{DiscoveryPhase, PreferenceInput, SongTableRow},
    utils, warning,
};

#[allow(clippy::too_many_arguments)]
pub async fn search(
    mood: Option<String>,
    mood_id: Option<String>,
    song: Option<String>,
    artist: Option<String>,
    instruments: Option<String>,
    genre: Option<String>,
    profile: Option<String>,
    limit: Option<u32>,
) {
    let prefs = PreferenceInput {
        mood_text: mood.unwrap_or_default(),
        mood_id: mood_id.unwrap_or_default(),
        song_name: song.unwrap_or_default(),
        artist_name: artist.unwrap_or_default(),
        instruments: instruments.unwrap_or_default(),
        genre: genre.unwrap_or_default(),
        audio_data: None,
        audio_mime_type: None,
        profile_url: profile,
    };

    let flow = DiscoveryFlow::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message(DiscoveryPhase::Idle.label());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let run_flow = flow.clone();
    let run_prefs = prefs.clone();
    let run_limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let handle = tokio::spawn(async move { run_flow.run(&run_prefs, run_limit).await });

    while !handle.is_finished() {
        pb.set_message(flow.phase().await.label());
        tokio::time::sleep(Duration::from_millis(120)).await;
    }

    pb.finish_and_clear();

    let outcome = match handle.await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => error!("Search failed: {}", e),
        Err(e) => error!("Search task failed: {}", e),
    };

    if let Some(notice) = &outcome.notice {
        warning!("{}", notice);
    }

    if outcome.songs.is_empty() {
        info!("No tracks found for query: {}", outcome.intent.search_query);
        return;
    }

    success!(
        "Found {} of {} tracks for query: {}",
        outcome.songs.len(),
        outcome.total,
        outcome.intent.search_query
    );

    let rows: Vec<SongTableRow> = outcome
        .songs
        .iter()
        .map(|song| SongTableRow {
            title: utils::truncate(&song.title, 40),
            artist: utils::truncate(&song.artist_name, 28),
            album: utils::truncate(&song.album_name, 28),
        })
        .collect();

    println!("{}", Table::new(rows));
}
