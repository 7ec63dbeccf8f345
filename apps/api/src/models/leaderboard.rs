use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    /// Icon key understood by the client, e.g. "trophy", "leaf".
    pub icon: String,
}

/// Leaderboard row as stored in fixtures. Ranks are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub company: String,
    pub points: u32,
    pub avatar_url: String,
    pub avatar_fallback: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Points gained (or lost) since last month.
    pub last_month_change: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub improvement_highlights: Vec<String>,
}
