pub mod config;
pub mod engine;
pub mod outcome;
pub mod rule;
pub mod validation;

pub use config::*;
pub use engine::{score_pick, PickOutcome, PickScore};
pub use outcome::{determine_winner, Winner};
pub use rule::{config_errors, ConfigError, RoundWeights, ScoringRule};
pub use validation::{scoring_warnings, validate_scoring};
