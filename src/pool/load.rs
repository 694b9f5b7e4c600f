use super::types::{Game, Player};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Games and players of one prediction pool, as handed over by the data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Pool {
    pub fn find_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

/// Load a pool from a JSON file of the form `{ "games": [...], "players": [...] }`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid pool document.
pub fn load_pool(path: &Path) -> Result<Pool> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open pool file at {}", path.display()))?;

    let pool: Pool = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse pool file: invalid JSON in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        games = pool.games.len(),
        players = pool.players.len(),
        "Loaded pool"
    );

    Ok(pool)
}
