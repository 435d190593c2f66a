//! Wordle simulation
//!
//! A Wordle game with duplicate-letter-safe scoring and optional hard mode,
//! plus an autonomous letter frequency solver and a benchmark harness.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Score, Word};
//!
//! let guess = Word::new("vivid").unwrap();
//! let secret = Word::new("wordy").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!(score.to_string(), "....d");
//! ```

// Core domain types
pub mod core;

// Game rules and state
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
