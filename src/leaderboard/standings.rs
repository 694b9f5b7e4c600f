use crate::pool::{Game, Player};
use crate::scoring::engine::{index_games, score_pick, GameIndex, PickScore};
use crate::scoring::{ConfigError, ScoringConfig, ScoringRule};
use serde::Serialize;
use std::collections::HashSet;

/// One participant's line in the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Competition rank: equal totals share a rank (1, 2, 2, 4)
    pub rank: usize,
    pub player_id: String,
    pub player_name: String,
    pub total_points: f64,
    pub correct_picks: usize,
    /// Picks resolved against a final game
    pub scored_picks: usize,
    pub picks: Vec<PickScore>,
}

/// Score every player and rank them by total points, highest first.
///
/// The scoring rule is resolved once up front; a malformed config fails the
/// whole call instead of silently scoring with guessed parameters.
pub fn calculate_leaderboard(
    players: &[Player],
    games: &[Game],
    config: &ScoringConfig,
) -> Result<Vec<LeaderboardEntry>, ConfigError> {
    let rule = ScoringRule::from_config(config)?;
    Ok(rank_players(players, games, &rule))
}

/// Score and rank players under an already resolved rule. Never fails.
///
/// Players with equal totals keep their input order.
pub fn rank_players(players: &[Player], games: &[Game], rule: &ScoringRule) -> Vec<LeaderboardEntry> {
    let index = index_games(games);

    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .map(|player| score_player(player, &index, rule))
        .collect();

    // sort_by is stable, so ties stay in input order
    entries.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    assign_ranks(&mut entries);

    tracing::debug!(
        players = entries.len(),
        games = games.len(),
        mode = ?rule.mode(),
        "Leaderboard computed"
    );

    entries
}

fn score_player(player: &Player, index: &GameIndex<'_>, rule: &ScoringRule) -> LeaderboardEntry {
    let mut seen = HashSet::new();
    for pick in &player.picks {
        if !seen.insert(pick.game_id.as_str()) {
            tracing::warn!(
                player_id = %player.id,
                game_id = %pick.game_id,
                "Player has more than one pick for this game, scoring each"
            );
        }
    }

    let picks: Vec<PickScore> = player
        .picks
        .iter()
        .map(|pick| score_pick(pick, index, rule))
        .collect();

    let total_points = picks.iter().fold(0.0, |acc, s| acc + s.points);

    LeaderboardEntry {
        rank: 0,
        player_id: player.id.clone(),
        player_name: player.name.clone(),
        total_points,
        correct_picks: picks.iter().filter(|s| s.is_correct()).count(),
        scored_picks: picks.iter().filter(|s| s.is_scored()).count(),
        picks,
    }
}

/// Entries must already be sorted by total descending.
fn assign_ranks(entries: &mut [LeaderboardEntry]) {
    let mut previous: Option<(f64, usize)> = None;
    for (i, entry) in entries.iter_mut().enumerate() {
        let rank = match previous {
            Some((total, rank)) if total == entry.total_points => rank,
            _ => i + 1,
        };
        entry.rank = rank;
        previous = Some((entry.total_points, rank));
    }
}
