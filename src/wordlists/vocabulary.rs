//! Legal guesses and the pool secret words are drawn from

use super::loader::load_from_file;
use crate::core::Word;
use crate::game::ConfigError;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::Path;

/// Word lists shared by every game of a run
///
/// The legal set is the union of the word list and the optional answer list.
/// Secrets come from the answer list when one was given, otherwise from the
/// whole legal set.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_length: usize,
    legal: FxHashSet<Word>,
    secret_pool: Vec<Word>,
    answer_count: usize,
}

impl Vocabulary {
    /// Load the word list and optional answer list from files
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if a file cannot be read, or
    /// `ConfigError::EmptyWordList` if no word of `word_length` letters exists.
    pub fn load(
        word_length: usize,
        words_path: &Path,
        answers_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let read = |path: &Path| {
            load_from_file(path, word_length).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let words = read(words_path)?;
        let answers = answers_path.map(read).transpose()?.unwrap_or_default();

        Self::from_words(word_length, words, answers)
    }

    /// Build a vocabulary from already parsed words
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWordLength` for a zero length,
    /// `ConfigError::WordLengthMismatch` if a word has the wrong length, or
    /// `ConfigError::EmptyWordList` if both lists are empty.
    pub fn from_words(
        word_length: usize,
        words: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::InvalidWordLength(word_length));
        }

        let check = |word: Word| {
            if word.len() == word_length {
                Ok(word)
            } else {
                Err(ConfigError::WordLengthMismatch {
                    expected: word_length,
                    actual: word.len(),
                })
            }
        };

        let mut legal = words
            .into_iter()
            .map(check)
            .collect::<Result<FxHashSet<_>, _>>()?;

        let mut answers = answers
            .into_iter()
            .map(check)
            .collect::<Result<Vec<_>, _>>()?;
        answers.sort_unstable();
        answers.dedup();
        legal.extend(answers.iter().cloned());

        if legal.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        let answer_count = answers.len();
        let secret_pool = if answers.is_empty() {
            let mut pool: Vec<Word> = legal.iter().cloned().collect();
            pool.sort_unstable();
            pool
        } else {
            answers
        };

        Ok(Self {
            word_length,
            legal,
            secret_pool,
            answer_count,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words accepted as guesses
    #[inline]
    #[must_use]
    pub const fn legal_words(&self) -> &FxHashSet<Word> {
        &self.legal
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, word: &Word) -> bool {
        self.legal.contains(word)
    }

    /// Words a secret may be drawn from, sorted
    #[inline]
    #[must_use]
    pub fn secret_pool(&self) -> &[Word] {
        &self.secret_pool
    }

    /// Number of distinct words in the answer list (0 if none was given)
    #[inline]
    #[must_use]
    pub const fn answer_count(&self) -> usize {
        self.answer_count
    }

    /// Pick a secret word uniformly from the secret pool
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees a non-empty pool
        &self.secret_pool[rng.random_range(0..self.secret_pool.len())]
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word length={}, word count={}",
            self.word_length,
            self.legal.len()
        )?;
        if self.answer_count > 0 {
            write!(f, ", answer count={}", self.answer_count)?;
        }
        Ok(())
    }
}
