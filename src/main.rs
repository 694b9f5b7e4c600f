use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Aligned table, colored on a terminal
    Table,
    /// Tab-separated values for scripting
    Tsv,
    /// Pretty JSON including per-pick breakdown
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank all players in a pool by total points
    Standings {
        /// Pool file (JSON with "games" and "players")
        pool: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the standings as JSON to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show how one player's total was earned, pick by pick
    Breakdown {
        /// Pool file (JSON with "games" and "players")
        pool: PathBuf,

        /// Id of the player to explain
        player_id: String,
    },
    /// Check the scoring config and report every problem
    Validate,
    /// Write a config file with the default scoring section
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pickem")]
#[command(about = "Prediction pool scoring and leaderboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pickem/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = if verbose { "pickem=debug" } else { "pickem=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if std::env::var("PICKEM_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = cli.command {
        let path = match config_path.map(Ok).unwrap_or_else(pickem::config::get_config_path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = pickem::config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote default config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match pickem::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = pickem::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    for warning in pickem::scoring::scoring_warnings(&effective_scoring) {
        tracing::warn!("{}", warning);
    }

    tracing::debug!(
        mode = %effective_scoring.mode,
        rounds = effective_scoring.points.len(),
        "Scoring config loaded"
    );

    let (pool_path, view) = match cli.command {
        Commands::Validate => {
            println!(
                "Scoring config OK (mode: {}, {} round weights)",
                effective_scoring.mode,
                effective_scoring.points.len()
            );
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Init { .. } => unreachable!("init is handled before config loading"),
        Commands::Standings { pool, format, out } => (pool, View::Standings { format, out }),
        Commands::Breakdown { pool, player_id } => (pool, View::Breakdown { player_id }),
    };

    let pool = match pickem::pool::load_pool(&pool_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Pool error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    if let View::Breakdown { player_id } = &view {
        if pool.find_player(player_id).is_none() {
            eprintln!(
                "Unknown player '{}'. Pool has {} players.",
                player_id,
                pool.players.len()
            );
            std::process::exit(EXIT_DATA);
        }
    }

    let standings =
        match pickem::calculate_leaderboard(&pool.players, &pool.games, &effective_scoring) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Scoring config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };

    let use_colors = pickem::output::should_use_colors();

    match view {
        View::Standings { format, out } => {
            match format {
                OutputFormat::Table => {
                    println!(
                        "{}",
                        pickem::output::format_leaderboard_table(&standings, use_colors)
                    );
                    if cli.verbose {
                        for entry in &standings {
                            eprintln!();
                            eprintln!(
                                "{}",
                                pickem::output::format_entry_detail(entry, &pool.games, false)
                            );
                        }
                    }
                }
                OutputFormat::Tsv => println!("{}", pickem::output::format_tsv(&standings)),
                OutputFormat::Json => match pickem::output::format_json(&standings) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_DATA);
                    }
                },
            }

            if let Some(out_path) = out {
                if let Err(e) = pickem::output::save_standings(&out_path, &standings) {
                    eprintln!("Export error: {:#}", e);
                    std::process::exit(EXIT_DATA);
                }
            }
        }
        View::Breakdown { player_id } => {
            let Some(entry) = standings.iter().find(|e| e.player_id == player_id) else {
                eprintln!("No standings entry for player '{}'", player_id);
                std::process::exit(EXIT_DATA);
            };
            println!(
                "{}",
                pickem::output::format_entry_detail(entry, &pool.games, use_colors)
            );
        }
    }

    tracing::debug!(
        players = standings.len(),
        elapsed = ?start_time.elapsed(),
        "Done"
    );

    std::process::exit(EXIT_SUCCESS);
}

enum View {
    Standings {
        format: OutputFormat,
        out: Option<PathBuf>,
    },
    Breakdown {
        player_id: String,
    },
}
