//! Word lists for Wordle games
//!
//! Loads word lists from plain text files and combines them into the
//! vocabulary a game is played with.

pub mod loader;
mod vocabulary;

pub use vocabulary::Vocabulary;
