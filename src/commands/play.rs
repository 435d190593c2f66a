//! Agent play command
//!
//! Lets a solving agent play one game, against a random or a chosen secret.

use crate::core::Word;
use crate::game::{ConfigError, Game, GameConfig, GameStatus};
use crate::solver::{Agent, Round, Strategy};
use crate::wordlists::Vocabulary;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of one agent-played game
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub status: GameStatus,
    /// Known once the game is over
    pub secret: Option<Word>,
    pub rounds: Vec<Round>,
    pub rejections: Vec<String>,
    /// Knowledge summary after the last round
    pub knowledge: Option<String>,
    pub candidates_at_start: usize,
    pub duration: Duration,
}

impl PlayResult {
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }
}

/// Play one game with the given strategy
///
/// The secret is drawn from the vocabulary's answer pool unless `secret` is
/// given.
///
/// # Errors
///
/// Returns `ConfigError` if the configuration does not fit the vocabulary or
/// the requested secret is not a legal word.
///
/// # Examples
/// ```
/// use wordle_sim::commands::play_game;
/// use wordle_sim::core::Word;
/// use wordle_sim::game::GameConfig;
/// use wordle_sim::solver::LetterFrequencyStrategy;
/// use wordle_sim::wordlists::Vocabulary;
///
/// let words = ["vivid", "wordy", "crane"].map(|w| Word::new(w).unwrap());
/// let vocabulary = Vocabulary::from_words(5, words, Vec::new()).unwrap();
///
/// let result = play_game(
///     GameConfig::default(),
///     &vocabulary,
///     LetterFrequencyStrategy::new(),
///     Some("wordy"),
///     &mut rand::rng(),
/// )
/// .unwrap();
/// assert!(result.won());
/// ```
pub fn play_game<S, R>(
    config: GameConfig,
    vocabulary: &Vocabulary,
    strategy: S,
    secret: Option<&str>,
    rng: &mut R,
) -> Result<PlayResult, ConfigError>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let start = Instant::now();

    let mut game = match secret {
        Some(secret) => Game::with_secret(config, vocabulary, secret)?,
        None => Game::new(config, vocabulary, rng)?,
    };

    let mut agent = Agent::new(strategy);
    let status = agent.play(&mut game);

    Ok(PlayResult {
        status,
        secret: game.revealed_secret().cloned(),
        rounds: agent.rounds().to_vec(),
        rejections: agent.rejections().to_vec(),
        knowledge: agent.strategy().knowledge().map(ToString::to_string),
        candidates_at_start: vocabulary.legal_words().len(),
        duration: start.elapsed(),
    })
}
