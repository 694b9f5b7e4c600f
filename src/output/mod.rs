pub mod export;
pub mod formatter;

pub use export::{format_json, save_standings};
pub use formatter::{
    format_entry_detail, format_leaderboard_table, format_points, format_tsv, should_use_colors,
};
