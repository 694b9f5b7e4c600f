use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::path::Path;

use crate::leaderboard::LeaderboardEntry;

/// Standings as pretty JSON, per-pick breakdown included
pub fn format_json(entries: &[LeaderboardEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize standings")
}

/// Save standings to a JSON file atomically
///
/// Uses atomic-write-file so readers never observe a half-written file.
pub fn save_standings(path: &Path, entries: &[LeaderboardEntry]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, entries).context("Failed to serialize standings")?;

    file.commit()
        .with_context(|| format!("Failed to save standings to {}", path.display()))?;

    tracing::info!(path = %path.display(), players = entries.len(), "Saved standings");
    Ok(())
}
