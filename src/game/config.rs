//! Game configuration and construction-time errors

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Default number of rounds before a game is lost
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Accepted guesses allowed before the game is lost
    pub max_rounds: usize,
    /// Letters per word, shared by every word in play
    pub word_length: usize,
    /// Require every guess to reuse all revealed letters
    pub hard_mode: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: usize, word_length: usize) -> Self {
        Self {
            max_rounds,
            word_length,
            hard_mode: false,
        }
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Check the settings describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the round limit or word length is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::InvalidRoundLimit(self.max_rounds));
        }
        if self.word_length == 0 {
            return Err(ConfigError::InvalidWordLength(self.word_length));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_WORD_LENGTH)
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "maximum rounds={}, word length={}, hard mode={}",
            self.max_rounds,
            self.word_length,
            if self.hard_mode { "on" } else { "off" }
        )
    }
}

/// Fatal errors raised while setting up a game or benchmark
#[derive(Debug)]
pub enum ConfigError {
    /// A word list file could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// No legal words remain after loading
    EmptyWordList,
    InvalidRoundLimit(usize),
    InvalidWordLength(usize),
    /// A word list or secret does not match the configured word length
    WordLengthMismatch { expected: usize, actual: usize },
    SecretNotInWordList(String),
    InvalidGameCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
            Self::InvalidRoundLimit(rounds) => {
                write!(f, "Round limit must be positive, got {rounds}")
            }
            Self::InvalidWordLength(length) => {
                write!(f, "Word length must be positive, got {length}")
            }
            Self::WordLengthMismatch { expected, actual } => {
                write!(f, "Expected {expected}-letter words, got {actual} letters")
            }
            Self::SecretNotInWordList(word) => {
                write!(f, "Secret word {word} is not in the word list")
            }
            Self::InvalidGameCount(count) => {
                write!(f, "Benchmark game count must be positive, got {count}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
