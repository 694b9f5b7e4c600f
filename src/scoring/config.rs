use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which scoring rule turns picks into points.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Flat round weight per correctly predicted winner.
    #[default]
    Points,
    /// Confidence-weighted Brier scoring.
    Brier,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Points => write!(f, "points"),
            ScoringMode::Brier => write!(f, "brier"),
        }
    }
}

/// Main scoring configuration.
///
/// `points` maps a game's round type to its weight. In points mode the weight
/// is awarded for a correct pick; in brier mode it multiplies the Brier points.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   mode: brier
///   points:
///     groupStage: 1
///     knockout: 2
///     medal: 4
///   brier:
///     base: 25
///     multiplier: 100
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub mode: ScoringMode,

    /// Round type -> weight. Rounds not listed are worth 0.
    #[serde(default)]
    pub points: BTreeMap<String, i64>,

    /// Required when `mode: brier`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brier: Option<BrierConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let points = [("groupStage", 1), ("knockout", 2), ("medal", 4)]
            .into_iter()
            .map(|(round, weight)| (round.to_string(), weight))
            .collect();

        Self {
            mode: ScoringMode::Points,
            points,
            brier: None,
        }
    }
}

/// Brier mode parameters.
///
/// A pick scores `base - multiplier * (outcome - confidence)^2` before the
/// round weight is applied.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BrierConfig {
    /// Points for a perfectly confident correct pick (e.g. 25)
    pub base: f64,

    /// Penalty scale for squared confidence error (e.g. 100)
    pub multiplier: f64,
}

impl Default for BrierConfig {
    fn default() -> Self {
        Self {
            base: 25.0,
            multiplier: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.mode, ScoringMode::Points);
        assert_eq!(config.points.get("groupStage"), Some(&1));
        assert_eq!(config.points.get("knockout"), Some(&2));
        assert_eq!(config.points.get("medal"), Some(&4));
        assert!(config.brier.is_none());
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let mut config = ScoringConfig::default();
        config.mode = ScoringMode::Brier;
        config.brier = Some(BrierConfig::default());
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_full_scoring_config_parse() {
        let yaml = r#"
mode: brier
points:
  groupStage: 1
  knockout: 3
brier:
  base: 25
  multiplier: 100
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.mode, ScoringMode::Brier);
        assert_eq!(config.points.len(), 2);
        assert_eq!(config.points.get("knockout"), Some(&3));

        let brier = config.brier.unwrap();
        assert_eq!(brier.base, 25.0);
        assert_eq!(brier.multiplier, 100.0);
    }

    #[test]
    fn test_brier_mode_without_section_still_parses() {
        // Rejected later by validation, not by the parser
        let yaml = r#"
mode: brier
points:
  groupStage: 1
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.mode, ScoringMode::Brier);
        assert!(config.brier.is_none());
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.mode, ScoringMode::Points);
        assert!(config.points.is_empty());
        assert!(config.brier.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
mode: points
bonus: 5
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str("mode: elo");
        assert!(result.is_err());
    }
}
