pub mod dashboard;
pub mod leaderboard;
