use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Result of a game, or the result a pick predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    TeamA,
    TeamB,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::TeamA => write!(f, "A"),
            Winner::TeamB => write!(f, "B"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Same rule for actual final scores and for a pick's predicted scores.
pub fn determine_winner(score_a: i64, score_b: i64) -> Winner {
    match score_a.cmp(&score_b) {
        Ordering::Greater => Winner::TeamA,
        Ordering::Less => Winner::TeamB,
        Ordering::Equal => Winner::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_a_wins() {
        assert_eq!(determine_winner(3, 1), Winner::TeamA);
    }

    #[test]
    fn test_team_b_wins() {
        assert_eq!(determine_winner(0, 2), Winner::TeamB);
    }

    #[test]
    fn test_equal_scores_tie() {
        assert_eq!(determine_winner(2, 2), Winner::Tie);
        assert_eq!(determine_winner(0, 0), Winner::Tie);
    }

    #[test]
    fn test_display() {
        assert_eq!(Winner::TeamA.to_string(), "A");
        assert_eq!(Winner::TeamB.to_string(), "B");
        assert_eq!(Winner::Tie.to_string(), "tie");
    }
}
