//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear semantics.

mod letters;
mod score;
mod word;

pub use letters::LetterSet;
pub use score::{Mark, Score, ScoreError};
pub use word::{ALPHABET_SIZE, Word, WordError, letter_index};
