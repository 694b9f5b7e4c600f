use super::config::{ScoringConfig, ScoringMode};
use super::rule::config_errors;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let errors: Vec<String> = config_errors(config)
        .into_iter()
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-fatal observations about a valid config, e.g. an empty weight table
/// that would score every pick as 0.
pub fn scoring_warnings(config: &ScoringConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.points.is_empty() {
        warnings.push("scoring.points: no round weights configured, every pick scores 0".to_string());
    } else if config.points.values().all(|&w| w == 0) {
        warnings.push("scoring.points: all round weights are 0, every pick scores 0".to_string());
    }

    if config.mode == ScoringMode::Points && config.brier.is_some() {
        warnings.push("scoring.brier: ignored because mode is 'points'".to_string());
    }

    warnings
}
