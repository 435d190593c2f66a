//! Wordle guess scoring and score string representation
//!
//! A score carries one mark per position:
//! - uppercase letter: exact match at this position
//! - lowercase letter: letter present in the secret, wrong position
//! - `.`: letter not matchable here
//!
//! `"VI..i"` is the score of `VITAI` against `VIVID`.

use super::word::{ALPHABET_SIZE, letter_index};
use super::{LetterSet, Word};
use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Exact(u8),
    /// Right letter, wrong position
    Included(u8),
    /// Letter not matchable at this position
    Absent,
}

impl Mark {
    /// The score string character for this mark
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact(letter) => letter.to_ascii_uppercase() as char,
            Self::Included(letter) => letter.to_ascii_lowercase() as char,
            Self::Absent => '.',
        }
    }

    /// The letter credited by this mark, if any
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Exact(letter) | Self::Included(letter) => Some(letter),
            Self::Absent => None,
        }
    }
}

/// Error type for unparseable score strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    Empty,
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Score string must not be empty"),
            Self::InvalidCharacter { ch, position } => write!(
                f,
                "Invalid score character '{ch}' at position {position} (expected A-Z, a-z or '.')"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// The score of one guess against a secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score {
    marks: Vec<Mark>,
}

impl Score {
    /// Score `guess` against `secret`
    ///
    /// Matching is done in two phases so that repeated letters are never
    /// over-credited: exact matches first consume their secret letter, then
    /// the remaining positions are scanned left to right, each taking one
    /// still-unconsumed occurrence of its letter from the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Score, Word};
    ///
    /// let guess = Word::new("viviv").unwrap();
    /// let secret = Word::new("vivid").unwrap();
    /// assert_eq!(Score::calculate(&guess, &secret).to_string(), "VIVI.");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut marks = vec![Mark::Absent; guess.len()];
        let mut unconsumed = [0usize; ALPHABET_SIZE];

        // First pass: exact matches. Unmatched secret letters form the pool.
        for ((mark, &g), &s) in marks.iter_mut().zip(guess.chars()).zip(secret.chars()) {
            if g == s {
                *mark = Mark::Exact(g);
            } else {
                unconsumed[letter_index(s)] += 1;
            }
        }

        // Second pass: misplaced letters, while the pool still holds them
        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Absent {
                let remaining = &mut unconsumed[letter_index(g)];
                if *remaining > 0 {
                    *mark = Mark::Included(g);
                    *remaining -= 1;
                }
            }
        }

        Self { marks }
    }

    /// The all-exact score of a word against itself
    #[must_use]
    pub fn perfect(word: &Word) -> Self {
        Self {
            marks: word.chars().iter().map(|&ch| Mark::Exact(ch)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|m| matches!(m, Mark::Exact(_)))
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Exact(_)))
            .count()
    }

    #[must_use]
    pub fn count_included(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Included(_)))
            .count()
    }

    /// Letters scored exact or included anywhere in this score
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.marks.iter().filter_map(|m| m.letter()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ScoreError::Empty);
        }

        let marks = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                'A'..='Z' => Ok(Mark::Exact(ch as u8)),
                'a'..='z' => Ok(Mark::Included(ch.to_ascii_uppercase() as u8)),
                '.' => Ok(Mark::Absent),
                _ => Err(ScoreError::InvalidCharacter { ch, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { marks })
    }
}
