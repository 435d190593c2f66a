//! Letter knowledge accumulated from scored guesses
//!
//! Each letter carries one tagged state, so "excluded" and "present" can
//! never both hold for the same letter. Each position carries the letter
//! known to be there, if any, plus every letter ruled out at that position.

use crate::core::{ALPHABET_SIZE, LetterSet, Mark, Score, Word, letter_index};
use std::fmt;

/// What is known about one letter of the secret word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LetterStatus {
    /// Never scored
    #[default]
    Unknown,
    /// Confirmed absent from the secret word
    Excluded,
    /// Occurs in the secret word
    Present {
        /// Positions where the letter scored exact
        placed: Vec<usize>,
        /// Known occurrences not yet pinned to a position
        included: u8,
    },
}

impl LetterStatus {
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    #[must_use]
    pub const fn included(&self) -> u8 {
        match self {
            Self::Present { included, .. } => *included,
            _ => 0,
        }
    }
}

/// Per-position constraint built up across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionConstraint {
    /// Letter known to be at this position
    pub required: Option<u8>,
    /// Letters seen absent or misplaced at this position
    pub disallowed: LetterSet,
}

impl PositionConstraint {
    /// Check a letter is still possible at this position
    #[inline]
    #[must_use]
    pub const fn allows(&self, letter: u8) -> bool {
        match self.required {
            Some(required) => required == letter,
            None => !self.disallowed.contains(letter),
        }
    }
}

/// Everything a solver has learned about the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: [LetterStatus; ALPHABET_SIZE],
    positions: Vec<PositionConstraint>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            letters: std::array::from_fn(|_| LetterStatus::Unknown),
            positions: vec![PositionConstraint::default(); word_length],
        }
    }

    /// Fold one scored guess into the knowledge
    ///
    /// Must be called exactly once per accepted guess: included counts are
    /// incremented, so absorbing the same round twice over-counts them.
    ///
    /// The guess is processed in three passes over its positions: exact
    /// marks, then included marks, then absent marks. A letter is only
    /// excluded in the last pass, once every occurrence of it in this guess
    /// has been seen, because a repeated letter can be absent at one
    /// position and exact or included at another.
    ///
    /// # Panics
    ///
    /// Panics if the score length differs from the guess or knowledge length,
    /// or if a mark names a letter other than the guessed one. Either means
    /// the score did not come from scoring this guess.
    pub fn absorb(&mut self, guess: &Word, score: &Score) {
        assert_eq!(
            guess.len(),
            score.len(),
            "score {score} does not fit guess {guess}"
        );
        assert_eq!(
            guess.len(),
            self.positions.len(),
            "guess {guess} does not fit a {}-letter game",
            self.positions.len()
        );

        for (i, (&letter, &mark)) in guess.chars().iter().zip(score.marks()).enumerate() {
            if let Some(marked) = mark.letter() {
                assert_eq!(
                    marked, letter,
                    "score {score} marks {} at position {i} but {guess} has {}",
                    char::from(marked),
                    char::from(letter)
                );
            }
        }

        let marked = || guess.chars().iter().copied().zip(score.marks()).enumerate();

        for (i, (letter, mark)) in marked() {
            if matches!(mark, Mark::Exact(_)) {
                self.record_exact(i, letter);
            }
        }

        for (i, (letter, mark)) in marked() {
            if matches!(mark, Mark::Included(_)) {
                self.record_included(i, letter);
            }
        }

        for (i, (letter, mark)) in marked() {
            if matches!(mark, Mark::Absent) {
                self.record_absent(i, letter);
            }
        }
    }

    fn record_exact(&mut self, position: usize, letter: u8) {
        self.positions[position].required = Some(letter);

        let status = &mut self.letters[letter_index(letter)];
        match status {
            LetterStatus::Present { placed, included } => {
                if !placed.contains(&position) {
                    placed.push(position);
                }
                *included = included.saturating_sub(1);
            }
            LetterStatus::Unknown | LetterStatus::Excluded => {
                *status = LetterStatus::Present {
                    placed: vec![position],
                    included: 0,
                };
            }
        }
    }

    fn record_included(&mut self, position: usize, letter: u8) {
        self.positions[position].disallowed.insert(letter);

        let status = &mut self.letters[letter_index(letter)];
        match status {
            LetterStatus::Present { included, .. } => *included = included.saturating_add(1),
            LetterStatus::Unknown | LetterStatus::Excluded => {
                *status = LetterStatus::Present {
                    placed: Vec::new(),
                    included: 1,
                };
            }
        }
    }

    fn record_absent(&mut self, position: usize, letter: u8) {
        self.positions[position].disallowed.insert(letter);

        let status = &mut self.letters[letter_index(letter)];
        if !status.is_present() {
            *status = LetterStatus::Excluded;
        }
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn status(&self, letter: u8) -> &LetterStatus {
        &self.letters[letter_index(letter)]
    }

    #[inline]
    #[must_use]
    pub fn position(&self, position: usize) -> &PositionConstraint {
        &self.positions[position]
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[PositionConstraint] {
        &self.positions
    }

    /// Letter known at each position, `None` where unknown
    #[must_use]
    pub fn correct_letters(&self) -> Vec<Option<u8>> {
        self.positions.iter().map(|p| p.required).collect()
    }

    #[inline]
    #[must_use]
    pub fn included_count(&self, letter: u8) -> u8 {
        self.status(letter).included()
    }

    /// Letters with an outstanding included count, alphabetically
    pub fn included_letters(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (b'A'..=b'Z').filter_map(|letter| match self.included_count(letter) {
            0 => None,
            count => Some((letter, count)),
        })
    }

    /// Letters confirmed absent from the secret word
    #[must_use]
    pub fn excluded(&self) -> LetterSet {
        (b'A'..=b'Z')
            .filter(|&letter| *self.status(letter) == LetterStatus::Excluded)
            .collect()
    }

    /// Check nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(|s| *s == LetterStatus::Unknown)
            && self
                .positions
                .iter()
                .all(|p| p.required.is_none() && p.disallowed.is_empty())
    }
}

impl fmt::Display for LetterKnowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let correct: String = self
            .positions
            .iter()
            .map(|p| p.required.map_or('-', char::from))
            .collect();

        write!(
            f,
            "incorrect letters={} included letters={} correct letters={correct}",
            comma_list(self.excluded().iter()),
            comma_list(self.included_letters().map(|(letter, _)| letter)),
        )
    }
}

fn comma_list(letters: impl Iterator<Item = u8>) -> String {
    letters
        .map(|letter| char::from(letter).to_string())
        .collect::<Vec<_>>()
        .join(",")
}
