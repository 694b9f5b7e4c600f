pub mod load;
pub mod types;

pub use load::{load_pool, Pool};
pub use types::{Game, GameState, GameStatus, Pick, Player, Scores};
