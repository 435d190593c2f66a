//! Wordle word representation
//!
//! A Word stores an uppercase A-Z word. Any positive length is representable;
//! the game-wide word length is enforced through [`Word::with_length`].

use super::LetterSet;
use std::fmt;

/// Number of letters in the scoring alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Alphabet index of an uppercase ASCII letter (`A` = 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase(), "letter must be A-Z");
    (letter - b'A') as usize
}

/// An uppercase word made of the letters A-Z
///
/// Ordering is lexicographic on the text, which is also the tie-break order
/// used when several guesses score the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than the letters A-Z
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Word;
    ///
    /// let word = Word::new("vivid").unwrap();
    /// assert_eq!(word.text(), "VIVID");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();
        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a new Word and check it has exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error of
    /// [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.chars().iter().copied().collect()
    }

    /// Count of each letter in the word, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for &ch in self.chars() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("VIVID").unwrap();
        assert_eq!(word.text(), "VIVID");
        assert_eq!(word.chars(), b"VIVID");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercases() {
        assert_eq!(Word::new("drink").unwrap().text(), "DRINK");
        assert_eq!(Word::new("vOdKa").unwrap().text(), "VODKA");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("me").unwrap().len(), 2);
        assert_eq!(Word::new("alphabet").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("héllo"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("o'neil"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("give", 4).is_ok());
        assert_eq!(
            Word::with_length("right", 4),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'E'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("vivid").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'V')], 2);
        assert_eq!(counts[letter_index(b'I')], 2);
        assert_eq!(counts[letter_index(b'D')], 1);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn word_letters_distinct() {
        let letters = Word::new("speed").unwrap().letters();
        assert_eq!(letters.len(), 4);
        assert!(letters.contains(b'E'));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["slate", "crane", "adieu"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        assert_eq!(words[0].text(), "ADIEU");
        assert_eq!(words[2].text(), "SLATE");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
