//! Autonomous player driving a game with a strategy

use super::strategy::Strategy;
use crate::core::{Score, Word};
use crate::game::{Game, GameStatus, Submission};

/// One accepted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub score: Score,
    /// Candidates left after the score was absorbed
    pub remaining: usize,
}

/// Plays a game to the end using a given strategy
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::game::{Game, GameConfig, GameStatus};
/// use wordle_sim::solver::{Agent, LetterFrequencyStrategy};
/// use wordle_sim::wordlists::Vocabulary;
///
/// let words = ["vivid", "wordy", "crane"].map(|w| Word::new(w).unwrap());
/// let vocabulary = Vocabulary::from_words(5, words, Vec::new()).unwrap();
/// let mut game = Game::with_secret(GameConfig::default(), &vocabulary, "vivid").unwrap();
///
/// let mut agent = Agent::new(LetterFrequencyStrategy::new());
/// assert_eq!(agent.play(&mut game), GameStatus::Won);
/// assert!(agent.rounds().len() <= 3);
/// ```
pub struct Agent<S: Strategy> {
    strategy: S,
    rounds: Vec<Round>,
    rejections: Vec<String>,
    outcome: GameStatus,
}

impl<S: Strategy> Agent<S> {
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            rounds: Vec::new(),
            rejections: Vec::new(),
            outcome: GameStatus::Active,
        }
    }

    /// Guess until the game is over or the strategy runs out of words
    ///
    /// Rejected guesses are dropped from the strategy's candidates and do not
    /// use up a round. Returns the game's status when play stops, which stays
    /// `Active` if the strategy ran dry first.
    pub fn play(&mut self, game: &mut Game<'_>) -> GameStatus {
        while game.status() == GameStatus::Active {
            let Some(guess) = self.strategy.choose_guess(&game.view()) else {
                break;
            };

            match game.submit_word(&guess) {
                Submission::Accepted(score) => {
                    self.strategy.absorb(&guess, &score);
                    self.rounds.push(Round {
                        guess,
                        score,
                        remaining: self.strategy.remaining(),
                    });
                }
                Submission::Rejected(rejection) => {
                    self.strategy.discard(&guess);
                    self.rejections.push(rejection.to_string());
                }
            }
        }

        self.outcome = game.status();
        self.outcome
    }

    /// Clear the record and the strategy's knowledge for a new game
    pub fn reset(&mut self) {
        self.strategy.reset();
        self.rounds.clear();
        self.rejections.clear();
        self.outcome = GameStatus::Active;
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Reasons given by the game for refused guesses
    #[must_use]
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    #[must_use]
    pub const fn outcome(&self) -> GameStatus {
        self.outcome
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }
}
