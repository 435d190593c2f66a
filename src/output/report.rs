//! Plain text benchmark report

use crate::commands::BenchmarkResult;
use std::fmt::{self, Write};
use std::str::FromStr;

/// How a benchmark result is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width table, no color
    #[default]
    Text,
    /// Colored summary with a bar chart
    Pretty,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown report format '{other}' (expected text or pretty)")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Pretty => f.write_str("pretty"),
        }
    }
}

/// Render the round histogram as a text table
///
/// One row per round, then an `X` row for games not won.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordle_sim::commands::BenchmarkResult;
/// use wordle_sim::output::text_report;
///
/// let result = BenchmarkResult {
///     games: 3,
///     max_rounds: 2,
///     wins: vec![1, 1],
///     failures: 1,
///     rejections: 0,
///     duration: Duration::ZERO,
/// };
/// assert_eq!(
///     text_report(&result),
///     "Benchmark Report\n================\nRound   Wins\n------------\n1          1\n2          1\nX          1\n"
/// );
/// ```
#[must_use]
pub fn text_report(result: &BenchmarkResult) -> String {
    let mut report = String::from("Benchmark Report\n================\nRound   Wins\n------------\n");

    for round in 1..=result.max_rounds {
        // Writing to a String cannot fail
        let _ = writeln!(report, "{round:<5}{:>7}", result.wins_in(round));
    }
    let _ = writeln!(report, "{:<5}{:>7}", "X", result.failures);

    report
}
