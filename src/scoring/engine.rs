use super::outcome::{determine_winner, Winner};
use super::rule::ScoringRule;
use crate::pool::{Game, Pick};
use serde::Serialize;
use std::collections::HashMap;

/// Lookup of games by id, built once per leaderboard computation.
pub type GameIndex<'a> = HashMap<&'a str, &'a Game>;

/// How a single pick was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PickOutcome {
    Scored { predicted: Winner, actual: Winner },
    /// No game with the pick's id
    UnknownGame,
    /// Game exists but has no final result yet
    NotFinal,
    /// Brier mode pick with a missing or non-finite confidence
    NoConfidence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickScore {
    pub game_id: String,
    pub round_type: Option<String>,
    pub outcome: PickOutcome,
    pub points: f64,
}

impl PickScore {
    fn unscored(pick: &Pick, game: Option<&Game>, outcome: PickOutcome) -> Self {
        Self {
            game_id: pick.game_id.clone(),
            round_type: game.map(|g| g.round_type.clone()),
            outcome,
            points: 0.0,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self.outcome, PickOutcome::Scored { .. })
    }

    /// Predicted winner matched the actual winner
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, PickOutcome::Scored { predicted, actual } if predicted == actual)
    }
}

/// Index `games` by id. The first game with a given id wins.
pub fn index_games(games: &[Game]) -> GameIndex<'_> {
    let mut index = HashMap::with_capacity(games.len());
    for game in games {
        if index.contains_key(game.id.as_str()) {
            tracing::warn!(game_id = %game.id, "Duplicate game id, keeping the first");
            continue;
        }
        index.insert(game.id.as_str(), game);
    }
    index
}

/// Score one pick under `rule`.
///
/// Picks for unknown or non-final games score 0 and never fail, so one bad
/// pick cannot spoil a whole leaderboard.
pub fn score_pick(pick: &Pick, games: &GameIndex<'_>, rule: &ScoringRule) -> PickScore {
    let Some(game) = games.get(pick.game_id.as_str()).copied() else {
        tracing::debug!(game_id = %pick.game_id, "Pick references unknown game");
        return PickScore::unscored(pick, None, PickOutcome::UnknownGame);
    };

    let Some(scores) = game.final_scores() else {
        return PickScore::unscored(pick, Some(game), PickOutcome::NotFinal);
    };

    let actual = determine_winner(scores.team_a, scores.team_b);
    let predicted = determine_winner(pick.team_a_score, pick.team_b_score);
    let correct = predicted == actual;
    let weight = rule.weights().weight_for(&game.round_type);

    if !rule.weights().is_configured(&game.round_type) {
        tracing::debug!(
            game_id = %game.id,
            round = %game.round_type,
            "No weight configured for round, pick scores 0"
        );
    }

    let points = match rule {
        ScoringRule::FixedPoints { .. } => fixed_points(weight, correct),
        ScoringRule::Brier {
            base, multiplier, ..
        } => match pick.confidence.filter(|c| c.is_finite()) {
            Some(confidence) => brier_points(weight, *base, *multiplier, correct, confidence),
            None => {
                tracing::debug!(game_id = %game.id, "Brier pick without usable confidence");
                return PickScore::unscored(pick, Some(game), PickOutcome::NoConfidence);
            }
        },
    };

    PickScore {
        game_id: pick.game_id.clone(),
        round_type: Some(game.round_type.clone()),
        outcome: PickOutcome::Scored { predicted, actual },
        points,
    }
}

fn fixed_points(weight: i64, correct: bool) -> f64 {
    if correct {
        weight as f64
    } else {
        0.0
    }
}

/// `weight * (base - multiplier * (outcome - confidence)^2)` where `outcome`
/// is 1 when the predicted winner won and 0 otherwise.
fn brier_points(weight: i64, base: f64, multiplier: f64, correct: bool, confidence: f64) -> f64 {
    // Keeps a zero weight from yielding -0.0
    if weight == 0 {
        return 0.0;
    }
    let outcome = if correct { 1.0 } else { 0.0 };
    let raw = base - multiplier * (outcome - confidence).powi(2);
    weight as f64 * raw
}
