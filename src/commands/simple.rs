//! Simple interactive CLI mode
//!
//! Line-based game for a human player. Each line is a guess or one of the
//! commands `hint`, `new` and `quit`.

use crate::game::{ConfigError, Game, GameConfig, GameStatus, Submission};
use crate::output::formatters::{colored_guess, score_to_emoji};
use crate::solver::{LetterFrequencyStrategy, Strategy};
use crate::wordlists::Vocabulary;
use colored::Colorize;
use rand::Rng;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Games finished during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub played: usize,
    pub won: usize,
}

/// Failure of an interactive session
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Config(ConfigError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal I/O failed: {e}"),
            Self::Config(e) => write!(f, "cannot start game: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Run the simple interactive CLI mode on the terminal
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// configuration does not fit the vocabulary.
pub fn run_simple<R: Rng + ?Sized>(
    config: GameConfig,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Result<SessionSummary, SessionError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {}-letter word.", config.word_length);
    println!("  - {} right letter, right place", "green".green().bold());
    println!("  - {} right letter, wrong place", "yellow".yellow().bold());
    println!("  - {} letter not in the word", "gray".bright_black().bold());
    if config.hard_mode {
        println!("Hard mode: every guess must use all revealed letters.");
    }
    println!("\nCommands: 'hint' for a suggestion, 'new' for a new game, 'quit' to exit\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_session(stdin.lock(), &mut stdout, config, vocabulary, rng)
}

/// Play games reading guesses from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// configuration does not fit the vocabulary.
pub fn play_session<I, O, R>(
    mut input: I,
    out: &mut O,
    config: GameConfig,
    vocabulary: &Vocabulary,
    rng: &mut R,
) -> Result<SessionSummary, SessionError>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut summary = SessionSummary::default();

    'games: loop {
        let mut game = Game::new(config, vocabulary, rng)?;

        while !game.status().is_over() {
            let Some(line) = prompt(
                &mut input,
                out,
                &format!("Guess {}/{}", game.round() + 1, config.max_rounds),
            )?
            else {
                return Ok(summary);
            };

            match line.to_lowercase().as_str() {
                "" => {}
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing!")?;
                    return Ok(summary);
                }
                "new" | "n" => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                "hint" | "h" => {
                    let view = game.view();
                    let mut helper = LetterFrequencyStrategy::from_view(&view);
                    match helper.choose_guess(&view) {
                        Some(word) => writeln!(
                            out,
                            "💡 Suggestion: {} ({} candidates left)",
                            word.text().bright_yellow().bold(),
                            helper.remaining()
                        )?,
                        None => writeln!(out, "No candidate fits what is known so far")?,
                    }
                }
                _ => match game.submit(&line) {
                    Submission::Accepted(score) => {
                        if let Some((guess, _)) = game.history().last() {
                            writeln!(
                                out,
                                "{}  {}  {score}",
                                colored_guess(guess, &score),
                                score_to_emoji(&score)
                            )?;
                        }
                    }
                    Submission::Rejected(rejection) => {
                        writeln!(out, "{} {rejection}", "✗".red())?;
                    }
                },
            }
        }

        summary.played += 1;
        let secret = game
            .revealed_secret()
            .map_or_else(String::new, ToString::to_string);
        if game.status() == GameStatus::Won {
            summary.won += 1;
            writeln!(
                out,
                "\n{} Solved in {} {}",
                "Game won.".green().bold(),
                game.round(),
                if game.round() == 1 { "guess" } else { "guesses" }
            )?;
        } else {
            writeln!(
                out,
                "\n{} The word was {}",
                "Game lost.".red().bold(),
                secret.bright_yellow().bold()
            )?;
        }

        let again = prompt(&mut input, out, "Play again? (yes/no)")?;
        if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(summary);
        }
        writeln!(out)?;
    }
}

/// Read one trimmed line, `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &["vivid", "wordy", "snack", "crane", "divid", "livid"];

    /// Every game's secret is VIVID
    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words(5, words_from_slice(WORDS, 5), words_from_slice(&["vivid"], 5))
            .unwrap()
    }

    fn run(input: &str, config: GameConfig) -> (SessionSummary, String) {
        let vocab = vocabulary();
        let mut out = Vec::new();
        let summary = play_session(
            input.as_bytes(),
            &mut out,
            config,
            &vocab,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let (summary, out) = run("wordy\nvivid\nno\n", GameConfig::default());

        assert_eq!(summary, SessionSummary { played: 1, won: 1 });
        assert!(out.contains("...d."));
        assert!(out.contains("🟩🟩🟩🟩🟩"));
        assert!(out.contains("Solved in 2 guesses"));
    }

    #[test]
    fn rejected_guess_keeps_round() {
        let (_, out) = run("qqqqq\nxyz\nvivid\nno\n", GameConfig::default());

        assert!(out.contains("QQQQQ not a legal guess"));
        assert!(out.contains("XYZ not a valid guess"));
        assert!(out.contains("Solved in 1 guess"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let config = GameConfig::new(2, 5);
        let (summary, out) = run("crane\nsnack\nno\n", config);

        assert_eq!(summary, SessionSummary { played: 1, won: 0 });
        assert!(out.contains("The word was"));
    }

    #[test]
    fn hint_suggests_candidate() {
        let (summary, out) = run("wordy\nhint\nquit\n", GameConfig::default());

        assert_eq!(summary.played, 0);
        assert!(out.contains("Suggestion:"));
        assert!(out.contains("candidates left"));
    }

    #[test]
    fn new_abandons_game() {
        let (summary, out) = run("crane\nnew\nvivid\nyes\nvivid\nno\n", GameConfig::default());

        assert!(out.contains("New game started"));
        assert_eq!(summary, SessionSummary { played: 2, won: 2 });
    }

    #[test]
    fn hard_mode_rejection_shown() {
        let config = GameConfig::default().with_hard_mode(true);
        let (_, out) = run("wordy\ncrane\nquit\n", config);

        assert!(out.contains("must use revealed letters D"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (summary, _) = run("", GameConfig::default());
        assert_eq!(summary, SessionSummary::default());
    }
}
