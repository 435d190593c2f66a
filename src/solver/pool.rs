//! Candidate words still consistent with the game so far

use super::{LetterKnowledge, filter};
use crate::core::{Score, Word};
use crate::game::GameView;
use rustc_hash::FxHashSet;

/// Remaining candidates plus the knowledge used to narrow them
///
/// The pool starts unseeded and takes the legal word list from the first
/// game view it sees, so a strategy can be built before the game is.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    words: FxHashSet<Word>,
    knowledge: Option<LetterKnowledge>,
}

impl CandidatePool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the game's legal words if not seeded yet
    pub fn seed(&mut self, view: &GameView<'_>) {
        if self.knowledge.is_none() {
            self.words = view.legal_words().clone();
            self.knowledge = Some(LetterKnowledge::new(view.word_length()));
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.knowledge.is_some()
    }

    /// Fold in an accepted guess and narrow the candidates
    ///
    /// The guess is removed even when it is still consistent.
    pub fn absorb(&mut self, guess: &Word, score: &Score) {
        let knowledge = self
            .knowledge
            .get_or_insert_with(|| LetterKnowledge::new(guess.len()));
        knowledge.absorb(guess, score);
        filter::retain(&mut self.words, knowledge);
        self.words.remove(guess);
    }

    /// Drop a word the game refused
    pub fn discard(&mut self, guess: &Word) {
        self.words.remove(guess);
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &FxHashSet<Word> {
        &self.words
    }

    /// Candidates the game would accept as the next guess
    #[must_use]
    pub fn playable(&self, view: &GameView<'_>) -> FxHashSet<Word> {
        self.words
            .iter()
            .filter(|word| view.permits(word))
            .cloned()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn knowledge(&self) -> Option<&LetterKnowledge> {
        self.knowledge.as_ref()
    }

    /// Forget everything, ready to be seeded by a new game
    pub fn reset(&mut self) {
        self.words.clear();
        self.knowledge = None;
    }
}
