//! Candidate filtering against accumulated letter knowledge
//!
//! A word stays a candidate only if:
//! 1. it contains every letter with an outstanding included count
//! 2. each position holds the known letter, or none of the letters ruled out there
//! 3. it contains no excluded letter
//!
//! Included letters are checked by membership only: a letter known to occur
//! twice is satisfied by a word holding it once.

use super::LetterKnowledge;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Check a word is consistent with everything learned so far
#[must_use]
pub fn admits(knowledge: &LetterKnowledge, word: &Word) -> bool {
    let has_included = knowledge
        .included_letters()
        .all(|(letter, _)| word.has_letter(letter));

    has_included
        && matches_positions(knowledge, word)
        && word.letters().is_disjoint(knowledge.excluded())
}

fn matches_positions(knowledge: &LetterKnowledge, word: &Word) -> bool {
    knowledge.word_length() == word.len()
        && knowledge
            .positions()
            .iter()
            .zip(word.chars())
            .all(|(constraint, &letter)| constraint.allows(letter))
}

/// Return the candidates still consistent with `knowledge`
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wordle_sim::core::{Score, Word};
/// use wordle_sim::solver::{LetterKnowledge, filter};
///
/// let words: FxHashSet<Word> = ["vivid", "wordy", "dizzy"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("wordy").unwrap();
/// let mut knowledge = LetterKnowledge::new(5);
/// knowledge.absorb(&guess, &"...d.".parse::<Score>().unwrap());
///
/// let remaining = filter::reduce(&words, &knowledge);
/// assert_eq!(remaining.len(), 1);
/// assert!(remaining.contains(&Word::new("vivid").unwrap()));
/// ```
#[must_use]
pub fn reduce(candidates: &FxHashSet<Word>, knowledge: &LetterKnowledge) -> FxHashSet<Word> {
    candidates
        .iter()
        .filter(|word| admits(knowledge, word))
        .cloned()
        .collect()
}

/// Drop the candidates inconsistent with `knowledge`, in place
pub fn retain(candidates: &mut FxHashSet<Word>, knowledge: &LetterKnowledge) {
    candidates.retain(|word| admits(knowledge, word));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    fn word_set(words: &[&str]) -> FxHashSet<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn learn(knowledge: &mut LetterKnowledge, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        knowledge.absorb(&guess, &Score::calculate(&guess, &secret));
    }

    fn sorted(set: &FxHashSet<Word>) -> Vec<&str> {
        let mut words: Vec<&str> = set.iter().map(Word::text).collect();
        words.sort_unstable();
        words
    }

    const WORDS: &[&str] = &[
        "vivid", "wordy", "dizzy", "civic", "livid", "crane", "audit", "divid", "video",
    ];

    #[test]
    fn empty_knowledge_keeps_everything() {
        let words = word_set(WORDS);
        let knowledge = LetterKnowledge::new(5);
        assert_eq!(reduce(&words, &knowledge), words);
    }

    #[test]
    fn included_letter_required_and_not_at_seen_position() {
        let words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "wordy", "vivid");

        // Needs a D, not at position 3, and none of W O R Y
        assert_eq!(sorted(&reduce(&words, &knowledge)), ["AUDIT", "DIVID", "LIVID", "VIVID"]);
    }

    #[test]
    fn correct_positions_pin_letters() {
        let words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "video", "vivid");

        // VIDEO vs VIVID: "VId.." -> V at 0, I at 1, D present but not at 2
        assert_eq!(sorted(&reduce(&words, &knowledge)), ["VIVID"]);
    }

    #[test]
    fn negative_evidence_accumulates_across_rounds() {
        let words = word_set(&["abcde", "bacde", "cbade", "xyzzy"]);
        let mut knowledge = LetterKnowledge::new(5);

        // A misplaced at 0, then misplaced at 1
        knowledge.absorb(&Word::new("axxxx").unwrap(), &"a....".parse().unwrap());
        knowledge.absorb(&Word::new("yayyy").unwrap(), &".a...".parse().unwrap());

        assert_eq!(sorted(&reduce(&words, &knowledge)), ["CBADE"]);
    }

    #[test]
    fn excluded_letters_rejected_anywhere() {
        let words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "crane", "vivid");

        for word in reduce(&words, &knowledge) {
            for letter in b"CRANE" {
                assert!(!word.has_letter(*letter), "{word} kept");
            }
        }
    }

    #[test]
    fn repeated_letter_absent_elsewhere_not_excluded() {
        let words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "divid", "vivid");

        // V and I are pinned; D is pinned at 4 and only ruled out at 0
        let remaining = reduce(&words, &knowledge);
        assert!(remaining.contains(&Word::new("vivid").unwrap()));
        assert!(!remaining.contains(&Word::new("divid").unwrap()));
    }

    #[test]
    fn secret_always_survives() {
        let words = word_set(WORDS);
        for secret in WORDS {
            let mut knowledge = LetterKnowledge::new(5);
            for guess in ["crane", "wordy", "civic", "audit"] {
                learn(&mut knowledge, guess, secret);
            }
            assert!(reduce(&words, &knowledge).contains(&Word::new(secret).unwrap()));
        }
    }

    #[test]
    fn reduce_is_idempotent() {
        let words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "wordy", "vivid");

        let once = reduce(&words, &knowledge);
        let twice = reduce(&once, &knowledge);
        assert_eq!(once, twice);
    }

    #[test]
    fn retain_matches_reduce() {
        let mut words = word_set(WORDS);
        let mut knowledge = LetterKnowledge::new(5);
        learn(&mut knowledge, "audit", "vivid");

        let expected = reduce(&words, &knowledge);
        retain(&mut words, &knowledge);
        assert_eq!(words, expected);
    }

    #[test]
    fn membership_only_for_repeated_included_letter() {
        // Two included I's are satisfied by a word holding a single I
        let words = word_set(&["xixxx", "xxxxx"]);
        let mut knowledge = LetterKnowledge::new(5);
        knowledge.absorb(&Word::new("iaaai").unwrap(), &"i...i".parse().unwrap());

        assert_eq!(knowledge.included_count(b'I'), 2);
        assert_eq!(sorted(&reduce(&words, &knowledge)), ["XIXXX"]);
    }
}
