use crate::types::MoodProfile;

/// Built-in mood profiles surfaced to the UI as selectable chips and used by
/// the interpretation prompt and the fallback query policy.
pub const MOOD_PROFILES: &[MoodProfile] = &[
    MoodProfile {
        id: "happy",
        name: "Happy",
        prompt_hint: "upbeat, feel-good, bright and positive energy",
    },
    MoodProfile {
        id: "melancholic",
        name: "Melancholic",
        prompt_hint: "wistful, bittersweet, introspective and slow",
    },
    MoodProfile {
        id: "energetic",
        name: "Energetic",
        prompt_hint: "high tempo, driving rhythm, workout intensity",
    },
    MoodProfile {
        id: "chill",
        name: "Chill",
        prompt_hint: "laid back, mellow, low-key background listening",
    },
    MoodProfile {
        id: "romantic",
        name: "Romantic",
        prompt_hint: "warm, intimate, love songs and slow dances",
    },
    MoodProfile {
        id: "focused",
        name: "Focused",
        prompt_hint: "minimal vocals, steady, deep concentration",
    },
    MoodProfile {
        id: "nostalgic",
        name: "Nostalgic",
        prompt_hint: "throwback classics, memories of another decade",
    },
    MoodProfile {
        id: "party",
        name: "Party",
        prompt_hint: "danceable, loud, crowd-pleasing anthems",
    },
];

/// Looks up a mood profile by its identifier.
pub fn find_mood(id: &str) -> Option<&'static MoodProfile> {
    MOOD_PROFILES.iter().find(|m| m.id == id)
}
