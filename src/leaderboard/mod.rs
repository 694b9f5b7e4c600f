pub mod standings;

pub use standings::{calculate_leaderboard, rank_players, LeaderboardEntry};
