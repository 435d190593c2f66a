//! Single game state machine
//!
//! A game owns its secret word, round counter and outcome. Guesses go in
//! through [`Game::submit`]; each one is either scored and counted or
//! rejected without touching the round counter.

use super::{ConfigError, GameConfig};
use crate::core::{LetterSet, Score, Word, WordError};
use crate::wordlists::Vocabulary;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Outcome of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a guess was refused
///
/// Rejected guesses never count as a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not a well-formed word of the game's length
    InvalidWord { guess: String, error: WordError },
    NotInWordList(Word),
    /// Hard mode: the guess leaves out letters already revealed
    MissingRevealed { guess: Word, missing: LetterSet },
    /// The game already ended
    GameOver(GameStatus),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { guess, error } => {
                write!(f, "{} not a valid guess ({error})", guess.to_uppercase())
            }
            Self::NotInWordList(word) => write!(f, "{word} not a legal guess"),
            Self::MissingRevealed { guess, missing } => {
                write!(f, "{guess} must use revealed letters {missing}")
            }
            Self::GameOver(status) => write!(f, "game already {status}, guess ignored"),
        }
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Score),
    Rejected(Rejection),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn score(&self) -> Option<&Score> {
        match self {
            Self::Accepted(score) => Some(score),
            Self::Rejected(_) => None,
        }
    }
}

/// One game of Wordle
pub struct Game<'a> {
    config: GameConfig,
    vocabulary: &'a Vocabulary,
    secret: Word,
    round: usize,
    status: GameStatus,
    history: Vec<(Word, Score)>,
    revealed: LetterSet,
    messages: Vec<String>,
}

impl<'a> Game<'a> {
    /// Start a game with a secret drawn at random from the vocabulary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid or does not match
    /// the vocabulary's word length.
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        vocabulary: &'a Vocabulary,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::check_config(config, vocabulary)?;
        let secret = vocabulary.choose_secret(rng).clone();
        Ok(Self::start(config, vocabulary, secret))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid or the secret is
    /// not a legal word.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    /// use wordle_sim::game::{Game, GameConfig, GameStatus};
    /// use wordle_sim::wordlists::Vocabulary;
    ///
    /// let words = ["vivid", "wordy"].map(|w| Word::new(w).unwrap());
    /// let vocabulary = Vocabulary::from_words(5, words, Vec::new()).unwrap();
    /// let mut game = Game::with_secret(GameConfig::default(), &vocabulary, "vivid").unwrap();
    ///
    /// let score = game.submit("wordy").score().cloned().unwrap();
    /// assert_eq!(score.to_string(), "...d.");
    /// game.submit("vivid");
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn with_secret(
        config: GameConfig,
        vocabulary: &'a Vocabulary,
        secret: &str,
    ) -> Result<Self, ConfigError> {
        Self::check_config(config, vocabulary)?;

        let unknown = || ConfigError::SecretNotInWordList(secret.to_uppercase());
        let secret = Word::new(secret.trim()).map_err(|_| unknown())?;
        if !vocabulary.is_legal(&secret) {
            return Err(unknown());
        }

        Ok(Self::start(config, vocabulary, secret))
    }

    fn check_config(config: GameConfig, vocabulary: &Vocabulary) -> Result<(), ConfigError> {
        config.validate()?;
        if vocabulary.word_length() != config.word_length {
            return Err(ConfigError::WordLengthMismatch {
                expected: config.word_length,
                actual: vocabulary.word_length(),
            });
        }
        Ok(())
    }

    fn start(config: GameConfig, vocabulary: &'a Vocabulary, secret: Word) -> Self {
        Self {
            config,
            vocabulary,
            secret,
            round: 0,
            status: GameStatus::Active,
            history: Vec::new(),
            revealed: LetterSet::EMPTY,
            messages: Vec::new(),
        }
    }

    /// Submit a guess typed as text
    ///
    /// Surrounding whitespace is ignored and case does not matter.
    pub fn submit(&mut self, guess: &str) -> Submission {
        if self.status.is_over() {
            return self.reject(Rejection::GameOver(self.status));
        }

        match Word::with_length(guess.trim(), self.config.word_length) {
            Ok(word) => self.submit_word(&word),
            Err(error) => self.reject(Rejection::InvalidWord {
                guess: guess.trim().to_string(),
                error,
            }),
        }
    }

    /// Submit a guess
    ///
    /// An accepted guess advances the round, is scored against the secret and
    /// may end the game. A rejected guess leaves the game untouched apart
    /// from the message log.
    pub fn submit_word(&mut self, guess: &Word) -> Submission {
        if self.status.is_over() {
            return self.reject(Rejection::GameOver(self.status));
        }

        if !self.vocabulary.is_legal(guess) {
            return self.reject(Rejection::NotInWordList(guess.clone()));
        }

        if self.config.hard_mode {
            let missing = self.revealed.difference(guess.letters());
            if !missing.is_empty() {
                return self.reject(Rejection::MissingRevealed {
                    guess: guess.clone(),
                    missing,
                });
            }
        }

        self.round += 1;
        let score = Score::calculate(guess, &self.secret);
        self.revealed = self.revealed.union(score.revealed_letters());
        self.history.push((guess.clone(), score.clone()));
        self.messages.push(score.to_string());

        if *guess == self.secret {
            self.status = GameStatus::Won;
        } else if self.round >= self.config.max_rounds {
            self.status = GameStatus::Lost;
        }

        Submission::Accepted(score)
    }

    fn reject(&mut self, rejection: Rejection) -> Submission {
        self.messages
            .push(format!("{rejection}, round count still {}", self.round));
        Submission::Rejected(rejection)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted guesses so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Letters scored exact or included in any round so far
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> LetterSet {
        self.revealed
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Score)] {
        &self.history
    }

    /// Every score string and rejection notice, oldest first
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The secret word, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    /// What a player is allowed to know about this game
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            config: self.config,
            round: self.round,
            revealed: self.revealed,
            history: &self.history,
            legal: self.vocabulary.legal_words(),
        }
    }
}

impl fmt::Display for Game<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wordle Game ({}, {})", self.config, self.vocabulary)
    }
}

/// Read-only view of a game handed to solving strategies
///
/// Exposes everything except the secret word.
#[derive(Clone, Copy)]
pub struct GameView<'g> {
    config: GameConfig,
    round: usize,
    revealed: LetterSet,
    history: &'g [(Word, Score)],
    legal: &'g FxHashSet<Word>,
}

impl<'g> GameView<'g> {
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.config.max_rounds
    }

    #[inline]
    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.config.hard_mode
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> LetterSet {
        self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &'g [(Word, Score)] {
        self.history
    }

    #[inline]
    #[must_use]
    pub const fn legal_words(&self) -> &'g FxHashSet<Word> {
        self.legal
    }

    /// Check the game would accept `word` as the next guess
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        self.legal.contains(word)
            && (!self.config.hard_mode || self.revealed.is_subset(word.letters()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary(words: &[&str], answers: &[&str]) -> Vocabulary {
        let length = words.first().or(answers.first()).map_or(5, |w| w.len());
        Vocabulary::from_words(
            length,
            words_from_slice(words, length),
            words_from_slice(answers, length),
        )
        .unwrap()
    }

    const WORDS: &[&str] = &["vivid", "wordy", "snack", "crane", "divid", "votes"];

    #[test]
    fn illegal_guess_does_not_count() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();

        let result = game.submit("qqqqq");
        assert_eq!(
            result,
            Submission::Rejected(Rejection::NotInWordList(Word::new("QQQQQ").unwrap()))
        );
        assert_eq!(game.round(), 0);
        assert_eq!(game.status(), GameStatus::Active);
        assert!(game.history().is_empty());
        assert_eq!(
            game.messages().last().unwrap(),
            "QQQQQ not a legal guess, round count still 0"
        );
    }

    #[test]
    fn malformed_guess_does_not_count() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();

        assert!(matches!(
            game.submit("vivi"),
            Submission::Rejected(Rejection::InvalidWord { .. })
        ));
        assert!(matches!(
            game.submit("v1v1d"),
            Submission::Rejected(Rejection::InvalidWord { .. })
        ));
        assert_eq!(game.round(), 0);
        assert_eq!(game.messages().len(), 2);
    }

    #[test]
    fn accepted_guess_is_scored_and_counted() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();

        let result = game.submit(" Wordy ");
        assert_eq!(result.score().unwrap().to_string(), "...d.");
        assert_eq!(game.round(), 1);
        assert_eq!(game.history()[0].0.text(), "WORDY");
        assert_eq!(game.messages(), ["...d."]);
        assert_eq!(game.revealed().to_string(), "D");
    }

    #[test]
    fn correct_guess_wins_and_freezes_game() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();

        game.submit("snack");
        let result = game.submit("vivid");
        assert_eq!(result.score().unwrap().to_string(), "VIVID");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.round(), 2);

        let after = game.submit("crane");
        assert_eq!(after, Submission::Rejected(Rejection::GameOver(GameStatus::Won)));
        assert_eq!(game.round(), 2);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn loses_exactly_at_round_limit() {
        let vocab = vocabulary(WORDS, &[]);
        let config = GameConfig::new(3, 5);
        let mut game = Game::with_secret(config, &vocab, "vivid").unwrap();

        game.submit("snack");
        game.submit("wordy");
        assert_eq!(game.status(), GameStatus::Active);
        game.submit("crane");
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.round(), 3);

        assert!(!game.submit("vivid").is_accepted());
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn win_on_last_round_is_a_win() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::new(2, 5), &vocab, "vivid").unwrap();

        game.submit("snack");
        game.submit("vivid");
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn hard_mode_requires_revealed_letters() {
        let vocab = vocabulary(WORDS, &[]);
        let config = GameConfig::default().with_hard_mode(true);
        let mut game = Game::with_secret(config, &vocab, "vivid").unwrap();

        game.submit("snack");
        game.submit("wordy");
        assert_eq!(game.round(), 2);
        assert_eq!(game.revealed().to_string(), "D");

        let rejected = game.submit("crane");
        assert!(matches!(
            rejected,
            Submission::Rejected(Rejection::MissingRevealed { .. })
        ));
        assert_eq!(game.round(), 2);
        assert!(!game.view().permits(&Word::new("crane").unwrap()));

        assert!(game.submit("divid").is_accepted());
        assert_eq!(game.round(), 3);
    }

    #[test]
    fn normal_mode_ignores_revealed_letters() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();

        game.submit("wordy");
        assert!(game.submit("crane").is_accepted());
    }

    #[test]
    fn secret_hidden_until_game_over() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::new(1, 5), &vocab, "vivid").unwrap();

        assert!(game.revealed_secret().is_none());
        game.submit("snack");
        assert_eq!(game.revealed_secret().unwrap().text(), "VIVID");
    }

    #[test]
    fn random_secret_comes_from_answers() {
        let vocab = vocabulary(&["eeeek", "nopes", "sosad"], &["goody", "smart", "wheee"]);
        let mut rng = rand::rng();

        for _ in 0..10 {
            let mut game = Game::new(GameConfig::default(), &vocab, &mut rng).unwrap();
            let won = ["goody", "smart", "wheee"]
                .iter()
                .any(|answer| {
                    game.submit(answer);
                    game.status() == GameStatus::Won
                });
            assert!(won);
        }
    }

    #[test]
    fn random_secret_without_answers_uses_word_list() {
        let vocab = vocabulary(&["eeeek", "nopes", "sosad"], &[]);
        let mut rng = rand::rng();

        let mut game = Game::new(GameConfig::default(), &vocab, &mut rng).unwrap();
        for word in ["eeeek", "nopes", "sosad"] {
            game.submit(word);
        }
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn construction_errors_are_fatal() {
        let vocab = vocabulary(WORDS, &[]);

        assert!(matches!(
            Game::with_secret(GameConfig::new(0, 5), &vocab, "vivid"),
            Err(ConfigError::InvalidRoundLimit(0))
        ));
        assert!(matches!(
            Game::with_secret(GameConfig::new(6, 4), &vocab, "vivid"),
            Err(ConfigError::WordLengthMismatch {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            Game::with_secret(GameConfig::default(), &vocab, "zzzzz"),
            Err(ConfigError::SecretNotInWordList(_))
        ));
    }

    #[test]
    fn view_exposes_public_state() {
        let vocab = vocabulary(WORDS, &[]);
        let mut game = Game::with_secret(GameConfig::default(), &vocab, "vivid").unwrap();
        game.submit("votes");

        let view = game.view();
        assert_eq!(view.round(), 1);
        assert_eq!(view.word_length(), 5);
        assert_eq!(view.max_rounds(), 6);
        assert_eq!(view.history().len(), 1);
        assert_eq!(view.legal_words().len(), WORDS.len());
        assert!(view.permits(&Word::new("crane").unwrap()));
        assert!(!view.permits(&Word::new("zzzzz").unwrap()));
    }
}
