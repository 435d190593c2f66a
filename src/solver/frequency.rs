//! Letter frequency scoring
//!
//! Letters are counted across every position of every candidate. Each
//! letter's frequency is its count divided by the count of the rarest letter
//! present, so the rarest letter scores 1.0. A word scores the sum of its
//! letters' frequencies, repeated letters included.

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Position-independent letter frequencies over a set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    counts: [usize; ALPHABET_SIZE],
    rarest: usize,
}

impl LetterFrequencies {
    /// Count letters over `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    /// use wordle_sim::solver::frequency::LetterFrequencies;
    ///
    /// let words = [Word::new("vivid").unwrap(), Word::new("livid").unwrap()];
    /// let freqs = LetterFrequencies::from_words(&words);
    ///
    /// // L is the rarest letter (1), I occurs 4 times
    /// assert_eq!(freqs.frequency(b'L'), 1.0);
    /// assert_eq!(freqs.frequency(b'I'), 4.0);
    /// ```
    pub fn from_words<'w>(words: impl IntoIterator<Item = &'w Word>) -> Self {
        let mut counts = [0; ALPHABET_SIZE];
        for word in words {
            for &letter in word.chars() {
                counts[letter_index(letter)] += 1;
            }
        }

        let rarest = counts.iter().copied().filter(|&c| c > 0).min().unwrap_or(0);

        Self { counts, rarest }
    }

    /// Occurrences of `letter` across all counted words
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts[letter_index(letter)]
    }

    /// Normalized frequency of `letter` (0.0 if it never occurs)
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if self.rarest == 0 {
            return 0.0;
        }
        self.count(letter) as f64 / self.rarest as f64
    }

    /// Sum of the normalized frequencies of the word's letters
    ///
    /// Computed from integer counts so that anagrams score exactly equal.
    #[must_use]
    pub fn score_word(&self, word: &Word) -> f64 {
        if self.rarest == 0 {
            return 0.0;
        }
        let total: usize = word.chars().iter().map(|&letter| self.count(letter)).sum();
        total as f64 / self.rarest as f64
    }

    /// Highest scoring word, ties going to the alphabetically first word
    pub fn best<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> Option<(&'w Word, f64)> {
        words
            .into_iter()
            .map(|word| (word, self.score_word(word)))
            .max_by(|(w1, s1), (w2, s2)| s1.total_cmp(s2).then_with(|| w2.cmp(w1)))
    }
}

/// Score every candidate by summed letter frequency over the candidate set
#[must_use]
pub fn score_all(candidates: &FxHashSet<Word>) -> FxHashMap<Word, f64> {
    let freqs = LetterFrequencies::from_words(candidates);

    candidates
        .par_iter()
        .map(|word| (word.clone(), freqs.score_word(word)))
        .collect()
}

/// Pick the best candidate by summed letter frequency over the candidate set
#[must_use]
pub fn best_candidate(candidates: &FxHashSet<Word>) -> Option<&Word> {
    LetterFrequencies::from_words(candidates)
        .best(candidates)
        .map(|(word, _)| word)
}
