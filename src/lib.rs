//! Scoring and leaderboard engine for prediction pools.
//!
//! Players submit picks for games; once games are final, each pick is scored
//! under either fixed round points or confidence-weighted Brier scoring, and
//! players are ranked by their totals.

pub mod config;
pub mod leaderboard;
pub mod output;
pub mod pool;
pub mod scoring;

pub use leaderboard::{calculate_leaderboard, rank_players, LeaderboardEntry};
pub use pool::{Game, GameState, Pick, Player, Pool};
pub use scoring::{ConfigError, ScoringConfig, ScoringMode, ScoringRule};
