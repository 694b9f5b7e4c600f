use serde::{Deserialize, Serialize};

/// Lifecycle of a game. Only `Final` (wire value `"final"`) carries trusted
/// scores; any state string not listed here reads as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    NotStarted,
    InProgress,
    Final,
    /// Postponed, suspended, or anything else the data layer reports
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "teamA")]
    pub team_a: i64,
    #[serde(rename = "teamB")]
    pub team_b: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    pub status: GameStatus,
    #[serde(default)]
    pub scores: Option<Scores>,
    pub round_type: String,
}

impl Game {
    pub fn is_final(&self) -> bool {
        self.status.state == GameState::Final
    }

    /// Scores that may be used for scoring: present and the game is final.
    pub fn final_scores(&self) -> Option<Scores> {
        if self.is_final() {
            self.scores
        } else {
            None
        }
    }

    /// Short label in the format "TeamA vs TeamB"
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.team_a, self.team_b)
    }
}

/// One participant's forecast for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub game_id: String,
    pub team_a_score: i64,
    pub team_b_score: i64,
    /// Stated probability that the predicted winner wins. Brier mode only.
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub picks: Vec<Pick>,
}
