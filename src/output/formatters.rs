//! Formatting utilities for terminal output

use crate::core::{Mark, Score, Word};
use colored::Colorize;

/// Format a score as emoji string
#[must_use]
pub fn score_to_emoji(score: &Score) -> String {
    score
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Exact(_) => '🟩',
            Mark::Included(_) => '🟨',
            Mark::Absent => '⬜',
        })
        .collect()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, score: &Score) -> String {
    guess
        .chars()
        .iter()
        .zip(score.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter));
            match mark {
                Mark::Exact(_) => tile.black().on_green().bold().to_string(),
                Mark::Included(_) => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, secret: &str) -> (Word, Score) {
        let guess = Word::new(guess).unwrap();
        let score = Score::calculate(&guess, &Word::new(secret).unwrap());
        (guess, score)
    }

    #[test]
    fn emoji_all_absent() {
        let (_, score) = score("crane", "vivid");
        assert_eq!(score_to_emoji(&score), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_exact() {
        let (_, score) = score("vivid", "vivid");
        assert_eq!(score_to_emoji(&score), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let (_, score) = score("vidai", "vivid");
        assert_eq!(score_to_emoji(&score), "🟩🟩🟨⬜🟨");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let (guess, score) = score("wordy", "vivid");
        assert_eq!(colored_guess(&guess, &score), " W  O  R  D  Y ");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
