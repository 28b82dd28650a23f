use tabled::Table;

use crate::types::MoodTableRow;

pub async fn moods() {
    let rows: Vec<MoodTableRow> = crate::moods::MOOD_PROFILES
        .iter()
        .map(|profile| MoodTableRow {
            id: profile.id.to_string(),
            name: profile.name.to_string(),
            hint: profile.prompt_hint.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
