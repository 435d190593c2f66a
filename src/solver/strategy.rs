//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{CandidatePool, LetterKnowledge};
use super::frequency::LetterFrequencies;
use crate::core::{Score, Word};
use crate::game::GameView;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;

/// A strategy for choosing guesses in a single game
///
/// A strategy learns from the scores it is shown. It is seeded by the first
/// view it sees and should not be reused across games without `reset`.
pub trait Strategy {
    /// Choose the next guess
    ///
    /// Returns `None` when no candidate word is left.
    fn choose_guess(&mut self, view: &GameView<'_>) -> Option<Word>;

    /// Learn from an accepted guess
    fn absorb(&mut self, guess: &Word, score: &Score);

    /// Forget a guess the game rejected
    fn discard(&mut self, guess: &Word);

    /// Prepare for a new game
    fn reset(&mut self);

    /// Candidates still consistent with what has been learned
    fn remaining(&self) -> usize;

    /// What has been learned so far, `None` before the first guess
    fn knowledge(&self) -> Option<&LetterKnowledge>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Highest summed letter frequency (default)
    Frequency(LetterFrequencyStrategy),
    /// Uniform pick among consistent candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn choose_guess(&mut self, view: &GameView<'_>) -> Option<Word> {
        match self {
            Self::Frequency(s) => s.choose_guess(view),
            Self::Random(s) => s.choose_guess(view),
        }
    }

    fn absorb(&mut self, guess: &Word, score: &Score) {
        match self {
            Self::Frequency(s) => s.absorb(guess, score),
            Self::Random(s) => s.absorb(guess, score),
        }
    }

    fn discard(&mut self, guess: &Word) {
        match self {
            Self::Frequency(s) => s.discard(guess),
            Self::Random(s) => s.discard(guess),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Frequency(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::Frequency(s) => s.remaining(),
            Self::Random(s) => s.remaining(),
        }
    }

    fn knowledge(&self) -> Option<&LetterKnowledge> {
        match self {
            Self::Frequency(s) => s.knowledge(),
            Self::Random(s) => s.knowledge(),
        }
    }
}

impl StrategyType {
    /// Names accepted by `from_name`
    pub const NAMES: [&'static str; 2] = ["frequency", "random"];

    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if name
    /// is unrecognized. `seed` only affects the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Frequency(LetterFrequencyStrategy::new()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(LetterFrequencyStrategy::new())
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Letter frequency strategy
///
/// Counts letters over the remaining candidates and guesses the playable
/// candidate whose letters are most common, ties going to the alphabetically
/// first word.
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencyStrategy {
    pool: CandidatePool,
}

impl LetterFrequencyStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catch up with a game already in progress
    #[must_use]
    pub fn from_view(view: &GameView<'_>) -> Self {
        let mut strategy = Self::new();
        strategy.pool.seed(view);
        for (guess, score) in view.history() {
            strategy.pool.absorb(guess, score);
        }
        strategy
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }
}

impl Strategy for LetterFrequencyStrategy {
    fn choose_guess(&mut self, view: &GameView<'_>) -> Option<Word> {
        self.pool.seed(view);

        let freqs = LetterFrequencies::from_words(self.pool.words());
        freqs
            .best(self.pool.words().iter().filter(|word| view.permits(word)))
            .map(|(word, _)| word.clone())
    }

    fn absorb(&mut self, guess: &Word, score: &Score) {
        self.pool.absorb(guess, score);
    }

    fn discard(&mut self, guess: &Word) {
        self.pool.discard(guess);
    }

    fn reset(&mut self) {
        self.pool.reset();
    }

    fn remaining(&self) -> usize {
        self.pool.len()
    }

    fn knowledge(&self) -> Option<&LetterKnowledge> {
        self.pool.knowledge()
    }
}

/// Random strategy
///
/// Picks uniformly among the playable candidates. Seeded strategies repeat
/// the same choices for the same game.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    pool: CandidatePool,
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            pool: CandidatePool::new(),
            rng,
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_guess(&mut self, view: &GameView<'_>) -> Option<Word> {
        self.pool.seed(view);

        // Sort so the pick depends only on the seed, not on hash order
        let mut playable: Vec<Word> = self.pool.playable(view).into_iter().collect();
        playable.sort_unstable();
        playable.choose(&mut self.rng).cloned()
    }

    fn absorb(&mut self, guess: &Word, score: &Score) {
        self.pool.absorb(guess, score);
    }

    fn discard(&mut self, guess: &Word) {
        self.pool.discard(guess);
    }

    fn reset(&mut self) {
        self.pool.reset();
    }

    fn remaining(&self) -> usize {
        self.pool.len()
    }

    fn knowledge(&self) -> Option<&LetterKnowledge> {
        self.pool.knowledge()
    }
}
