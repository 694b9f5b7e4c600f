use std::collections::BTreeMap;

use pickem::pool::{GameStatus, Scores};
use pickem::scoring::BrierConfig;
use pickem::{calculate_leaderboard, ConfigError, Game, GameState, Pick, Player, ScoringConfig, ScoringMode};

fn final_game(id: &str, a: i64, b: i64) -> Game {
    Game {
        id: id.to_string(),
        team_a: "Norway".to_string(),
        team_b: "Germany".to_string(),
        status: GameStatus {
            state: GameState::Final,
        },
        scores: Some(Scores { team_a: a, team_b: b }),
        round_type: "groupStage".to_string(),
    }
}

fn pick(game_id: &str, a: i64, b: i64, confidence: f64) -> Pick {
    Pick {
        game_id: game_id.to_string(),
        team_a_score: a,
        team_b_score: b,
        confidence: Some(confidence),
    }
}

fn player(id: &str, picks: Vec<Pick>) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Player {}", id),
        picks,
    }
}

fn brier() -> ScoringConfig {
    ScoringConfig {
        mode: ScoringMode::Brier,
        points: BTreeMap::from([("groupStage".to_string(), 1)]),
        brier: Some(BrierConfig {
            base: 25.0,
            multiplier: 100.0,
        }),
    }
}

fn total_for(players: Vec<Player>, games: &[Game]) -> f64 {
    let board = calculate_leaderboard(&players, games, &brier()).unwrap();
    board[0].total_points
}

#[test]
fn confident_correct_pick_earns_base() {
    let games = vec![final_game("g1", 3, 0)];
    let total = total_for(vec![player("p1", vec![pick("g1", 2, 1, 1.0)])], &games);
    assert_eq!(total, 25.0);
}

#[test]
fn confident_wrong_pick_loses_75() {
    let games = vec![final_game("g1", 3, 0)];
    let total = total_for(vec![player("p1", vec![pick("g1", 1, 2, 1.0)])], &games);
    assert_eq!(total, -75.0);
}

#[test]
fn coin_flip_correct_pick_earns_nothing() {
    let games = vec![final_game("g1", 3, 0)];
    let total = total_for(vec![player("p1", vec![pick("g1", 2, 1, 0.5)])], &games);
    assert!(total.abs() < 1e-9);
}

#[test]
fn mixed_picks_sum_to_ten() {
    let games = vec![final_game("g1", 3, 0), final_game("g2", 1, 4)];
    let total = total_for(
        vec![player("p1", vec![pick("g1", 2, 1, 0.8), pick("g2", 2, 1, 0.6)])],
        &games,
    );
    assert!((total - 10.0).abs() < 1e-9);
}

#[test]
fn leaderboard_orders_descending() {
    let games = vec![final_game("g1", 3, 0), final_game("g2", 0, 2)];
    let players = vec![
        player("zero", vec![]),
        player("bottom", vec![pick("g1", 0, 1, 1.0), pick("g2", 1, 0, 1.0)]),
        player("top", vec![pick("g1", 1, 0, 1.0), pick("g2", 0, 1, 1.0)]),
    ];
    let board = calculate_leaderboard(&players, &games, &brier()).unwrap();
    let totals: Vec<f64> = board.iter().map(|e| e.total_points).collect();
    assert_eq!(totals, vec![50.0, 0.0, -150.0]);
}

#[test]
fn brier_mode_without_parameters_is_rejected() {
    let mut config = brier();
    config.brier = None;
    let result = calculate_leaderboard(&[player("p1", vec![])], &[], &config);
    assert_eq!(result, Err(ConfigError::MissingBrierSection));
}

#[test]
fn pool_file_end_to_end() {
    let json = r#"{
        "games": [
            { "id": "g1", "teamA": "Norway", "teamB": "Germany",
              "status": { "state": "final" }, "scores": { "teamA": 2, "teamB": 1 },
              "roundType": "groupStage" },
            { "id": "g2", "teamA": "Japan", "teamB": "Italy",
              "status": { "state": "not-started" }, "roundType": "medal" }
        ],
        "players": [
            { "id": "p1", "name": "Ana", "picks": [
                { "gameId": "g1", "teamAScore": 1, "teamBScore": 0, "confidence": 0.8 },
                { "gameId": "g2", "teamAScore": 1, "teamBScore": 0, "confidence": 1.0 }
            ] },
            { "id": "p2", "name": "Ben", "picks": [
                { "gameId": "g1", "teamAScore": 0, "teamBScore": 3, "confidence": 0.6 }
            ] }
        ]
    }"#;
    let path = std::env::temp_dir().join("pickem_it_pool.json");
    std::fs::write(&path, json).unwrap();

    let pool = pickem::pool::load_pool(&path).unwrap();
    let board = calculate_leaderboard(&pool.players, &pool.games, &brier()).unwrap();

    assert_eq!(board[0].player_name, "Ana");
    assert!((board[0].total_points - 21.0).abs() < 1e-9);
    assert_eq!(board[0].scored_picks, 1);
    assert_eq!(board[1].player_name, "Ben");
    assert!((board[1].total_points + 11.0).abs() < 1e-9);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn only_final_state_is_scored_from_pool_file() {
    let json = r#"{
        "games": [
            { "id": "g1", "teamA": "Norway", "teamB": "Germany",
              "status": { "state": "post" }, "scores": { "teamA": 2, "teamB": 0 },
              "roundType": "groupStage" },
            { "id": "g2", "teamA": "Japan", "teamB": "Italy",
              "status": { "state": "postponed" }, "scores": { "teamA": 0, "teamB": 1 },
              "roundType": "groupStage" },
            { "id": "g3", "teamA": "Chile", "teamB": "Peru",
              "status": { "state": "final" }, "scores": { "teamA": 1, "teamB": 0 },
              "roundType": "groupStage" }
        ],
        "players": [
            { "id": "p1", "name": "Ana", "picks": [
                { "gameId": "g1", "teamAScore": 1, "teamBScore": 0, "confidence": 1.0 },
                { "gameId": "g2", "teamAScore": 0, "teamBScore": 1, "confidence": 1.0 }
            ] },
            { "id": "p2", "name": "Ben", "picks": [
                { "gameId": "g3", "teamAScore": 2, "teamBScore": 0, "confidence": 1.0 }
            ] }
        ]
    }"#;
    let path = std::env::temp_dir().join("pickem_it_pool_states.json");
    std::fs::write(&path, json).unwrap();

    // An unrecognised state must not reject the whole pool
    let pool = pickem::pool::load_pool(&path).unwrap();
    let board = calculate_leaderboard(&pool.players, &pool.games, &brier()).unwrap();

    assert_eq!(board[0].player_id, "p2");
    assert_eq!(board[0].total_points, 25.0);
    assert_eq!(board[1].player_id, "p1");
    assert_eq!(board[1].total_points, 0.0);
    assert_eq!(board[1].scored_picks, 0);

    let _ = std::fs::remove_file(&path);
}
