//! Leaderboard: companies ranked by sustainability points.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::leaderboard::LeaderboardEntry;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub is_current_company: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub entries: Vec<RankedEntry>,
    /// Rank of the current company, when it appears on the board.
    pub current_company_rank: Option<u32>,
}

/// Ranks entries by points, highest first. Ties keep fixture order and get
/// consecutive ranks.
pub fn rank_entries(entries: &[LeaderboardEntry], current_company: &str) -> LeaderboardResponse {
    let mut sorted: Vec<LeaderboardEntry> = entries.to_vec();
    // stable sort keeps fixture order among ties
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    let current = current_company.trim().to_lowercase();
    let entries: Vec<RankedEntry> = sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i as u32 + 1,
            is_current_company: entry.company.trim().to_lowercase() == current,
            entry,
        })
        .collect();

    let current_company_rank = entries
        .iter()
        .find(|e| e.is_current_company)
        .map(|e| e.rank);

    LeaderboardResponse {
        entries,
        current_company_rank,
    }
}

/// GET /api/v1/leaderboard
pub async fn handle_leaderboard(State(state): State<AppState>) -> Json<LeaderboardResponse> {
    Json(rank_entries(
        &state.sample_data.leaderboard,
        &state.current_company,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SampleData;

    fn entry(company: &str, points: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            company: company.to_string(),
            points,
            avatar_url: String::new(),
            avatar_fallback: String::new(),
            badges: vec![],
            last_month_change: 0,
            improvement_highlights: vec![],
        }
    }

    #[test]
    fn test_ranked_by_points_descending() {
        let board = rank_entries(&[entry("a", 10), entry("b", 30), entry("c", 20)], "");
        let order: Vec<_> = board.entries.iter().map(|e| e.entry.company.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let board = rank_entries(&[entry("x", 5), entry("y", 5)], "");
        assert_eq!(board.entries[0].entry.company, "x");
        assert_eq!(board.entries[1].rank, 2);
    }

    #[test]
    fn test_current_company_matched_case_insensitively() {
        let board = rank_entries(&[entry("GreenLeaf", 9), entry("EcoCorp Inc.", 3)], " ecocorp inc. ");
        assert_eq!(board.current_company_rank, Some(2));
        assert!(board.entries[1].is_current_company);
        assert!(!board.entries[0].is_current_company);
    }

    #[test]
    fn test_absent_current_company() {
        let board = rank_entries(&[entry("a", 1)], "nobody");
        assert_eq!(board.current_company_rank, None);
    }

    #[test]
    fn test_builtin_board_places_ecocorp_fourth() {
        let data = SampleData::builtin().unwrap();
        let board = rank_entries(&data.leaderboard, &data.company.name);
        assert_eq!(board.current_company_rank, Some(4));
        assert_eq!(board.entries[0].entry.company, "GreenLeaf Solutions");
    }
}
