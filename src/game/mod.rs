//! Wordle game rules
//!
//! Configuration, the per-game state machine and the view of it that
//! solving strategies are allowed to see.

mod config;
mod state;

pub use config::{ConfigError, DEFAULT_MAX_ROUNDS, DEFAULT_WORD_LENGTH, GameConfig};
pub use state::{Game, GameStatus, GameView, Rejection, Submission};
