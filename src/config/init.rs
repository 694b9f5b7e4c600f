use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::scoring::ScoringConfig;

const BRIER_HINT: &str = "
# Switch to confidence scoring with:
#   mode: brier
#   brier:
#     base: 25
#     multiplier: 100
";

/// Write a config file holding the default scoring section.
///
/// Refuses to overwrite an existing file unless `force` is set. The write is
/// atomic, so an interrupted run never leaves a truncated config behind.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .and_then(|_| file.write_all(BRIER_HINT.as_bytes()))
        .context("Failed to write config file")?;
    file.commit().context("Failed to save config file")?;

    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(())
}
