use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::leaderboard::LeaderboardEntry;
use crate::pool::Game;
use crate::scoring::{PickOutcome, PickScore};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format signed points compactly: "21", "-10.5", "12.5k", "-1.2M"
/// One decimal at most; a trailing ".0" is dropped.
pub fn format_points(points: f64) -> String {
    let magnitude = points.abs();
    let formatted = if magnitude >= 1_000_000.0 {
        format!("{:.1}M", points / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.1}k", points / 1_000.0)
    } else {
        format!("{:.1}", points)
    };

    let trimmed = formatted.replace(".0M", "M").replace(".0k", "k");
    let trimmed = trimmed.strip_suffix(".0").unwrap_or(&trimmed);

    // Small negatives round to "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn colorize_points(points: f64, text: String, use_colors: bool) -> String {
    if !use_colors {
        text
    } else if points > 0.0 {
        text.green().bold().to_string()
    } else if points < 0.0 {
        text.red().bold().to_string()
    } else {
        text.bold().to_string()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format standings as a table with columns: Rank, Points, Name, Correct/Scored
/// No headers. Rank column is right-aligned with a trailing dot; tied players
/// show the same rank.
pub fn format_leaderboard_table(entries: &[LeaderboardEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No players in pool.".to_string();
    }

    let term_width = get_terminal_width();
    let rank_width = 3;
    let points_width = 8;
    let separator = "  ";

    entries
        .iter()
        .map(|entry| {
            let rank_str = format!("{:>2}.", entry.rank);
            let points_str = format!(
                "{:>width$}",
                format_points(entry.total_points),
                width = points_width
            );
            let record = format!("{}/{}", entry.correct_picks, entry.scored_picks);

            let fixed_width = rank_width + 1 + points_width + separator.len() * 2 + record.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&entry.player_name, width - fixed_width)
                }
                // Very narrow terminal
                Some(_) => truncate_name(&entry.player_name, 20),
                None => entry.player_name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    colorize_points(entry.total_points, points_str, true),
                    separator,
                    name,
                    separator,
                    record.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, points_str, separator, name, separator, record
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: rank, points, player_id, player_name, correct, scored (no headers, no colors)
pub fn format_tsv(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}\t{:.2}\t{}\t{}\t{}\t{}",
                entry.rank,
                entry.total_points,
                entry.player_id,
                entry.player_name,
                entry.correct_picks,
                entry.scored_picks
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_pick(score: &PickScore) -> String {
    match score.outcome {
        PickOutcome::Scored { predicted, actual } => {
            let mark = if predicted == actual { "hit" } else { "miss" };
            format!("picked {}, result {} ({})", predicted, actual, mark)
        }
        PickOutcome::UnknownGame => "unknown game".to_string(),
        PickOutcome::NotFinal => "not final".to_string(),
        PickOutcome::NoConfidence => "no confidence given".to_string(),
    }
}

/// Format one player's standing with a per-pick breakdown (for verbose and
/// breakdown output). `games` supplies matchup labels.
pub fn format_entry_detail(entry: &LeaderboardEntry, games: &[Game], use_colors: bool) -> String {
    let header = format!(
        "#{} {} ({}): {} points, {}/{} correct",
        entry.rank,
        entry.player_name,
        entry.player_id,
        format_points(entry.total_points),
        entry.correct_picks,
        entry.scored_picks
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for score in &entry.picks {
        let matchup = games
            .iter()
            .find(|g| g.id == score.game_id)
            .map(|g| g.matchup())
            .unwrap_or_default();
        let round = score.round_type.as_deref().unwrap_or("-");
        let points = format!("{:>7}", format_points(score.points));
        lines.push(format!(
            "  {} {}  [{}] {}  {}",
            colorize_points(score.points, points, use_colors),
            score.game_id,
            round,
            matchup,
            describe_pick(score)
        ));
    }

    if entry.picks.is_empty() {
        lines.push("  (no picks)".to_string());
    }

    lines.join("\n")
}
