//! Word list loading utilities
//!
//! Word list files hold one word per line. Each line is trimmed and
//! upper-cased; lines of the wrong length or with characters outside A-Z are
//! skipped.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words of exactly `word_length` letters from a file
///
/// The file is opened, read to the end and closed before returning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    parse_words(BufReader::new(file), word_length)
}

/// Parse words of exactly `word_length` letters, one per line
///
/// Duplicates are kept; collapsing them is up to the caller.
///
/// # Errors
///
/// Returns an I/O error if reading from `reader` fails.
pub fn parse_words<R: BufRead>(reader: R, word_length: usize) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Ok(word) = Word::with_length(line.trim(), word_length) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["vivid", "wordy", "toolong"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_length).ok())
        .collect()
}
