//! The active scoring rule, resolved once from [`ScoringConfig`] before any
//! pick is scored.

use super::config::{ScoringConfig, ScoringMode};
use std::collections::BTreeMap;

/// Configuration problems that would invalidate every score in a leaderboard.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("scoring.brier: required when mode is 'brier'")]
    MissingBrierSection,

    #[error("scoring.brier.{field}: invalid value {value} - {reason}")]
    InvalidBrierValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("scoring.points.{round}: invalid weight {weight} - must be non-negative")]
    NegativeWeight { round: String, weight: i64 },
}

/// Round type -> weight lookup. Any round not configured weighs 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundWeights(BTreeMap<String, i64>);

impl RoundWeights {
    pub fn new(weights: BTreeMap<String, i64>) -> Self {
        Self(weights)
    }

    /// Weight for `round_type`. A round missing from the config returns 0,
    /// so its picks score 0 in both fixed-points and Brier mode.
    pub fn weight_for(&self, round_type: &str) -> i64 {
        self.0.get(round_type).copied().unwrap_or(0)
    }

    pub fn is_configured(&self, round_type: &str) -> bool {
        self.0.contains_key(round_type)
    }
}

/// The scoring rule for a whole run, resolved once from [`ScoringConfig`].
///
/// `FixedPoints` awards the round weight for a correct winner. `Brier` awards
/// `weight * (base - multiplier * (outcome - confidence)^2)`.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringRule {
    FixedPoints {
        weights: RoundWeights,
    },
    Brier {
        weights: RoundWeights,
        base: f64,
        multiplier: f64,
    },
}

impl ScoringRule {
    /// Resolve the rule for `config`, failing on the first configuration error.
    ///
    /// Use [`config_errors`] to collect every problem at once.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, ConfigError> {
        if let Some(err) = config_errors(config).into_iter().next() {
            return Err(err);
        }

        let weights = RoundWeights::new(config.points.clone());
        match (config.mode, config.brier) {
            (ScoringMode::Points, _) => Ok(ScoringRule::FixedPoints { weights }),
            (ScoringMode::Brier, Some(brier)) => Ok(ScoringRule::Brier {
                weights,
                base: brier.base,
                multiplier: brier.multiplier,
            }),
            (ScoringMode::Brier, None) => Err(ConfigError::MissingBrierSection),
        }
    }

    pub fn weights(&self) -> &RoundWeights {
        match self {
            ScoringRule::FixedPoints { weights } | ScoringRule::Brier { weights, .. } => weights,
        }
    }

    pub fn mode(&self) -> ScoringMode {
        match self {
            ScoringRule::FixedPoints { .. } => ScoringMode::Points,
            ScoringRule::Brier { .. } => ScoringMode::Brier,
        }
    }
}

/// Every configuration problem in `config`, in field order.
pub fn config_errors(config: &ScoringConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    for (round, &weight) in &config.points {
        if weight < 0 {
            errors.push(ConfigError::NegativeWeight {
                round: round.clone(),
                weight,
            });
        }
    }

    // The brier section is ignored in points mode, so only check it when used
    if config.mode == ScoringMode::Brier {
        match config.brier {
            None => errors.push(ConfigError::MissingBrierSection),
            Some(brier) => {
                if !brier.base.is_finite() {
                    errors.push(ConfigError::InvalidBrierValue {
                        field: "base",
                        value: brier.base,
                        reason: "must be a finite number",
                    });
                }
                if !brier.multiplier.is_finite() {
                    errors.push(ConfigError::InvalidBrierValue {
                        field: "multiplier",
                        value: brier.multiplier,
                        reason: "must be a finite number",
                    });
                } else if brier.multiplier < 0.0 {
                    errors.push(ConfigError::InvalidBrierValue {
                        field: "multiplier",
                        value: brier.multiplier,
                        reason: "must be non-negative",
                    });
                }
            }
        }
    }

    errors
}
