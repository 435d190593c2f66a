//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, score_to_emoji};
use crate::commands::{BenchmarkConfig, BenchmarkResult, PlayResult};
use crate::core::{Score, Word};
use colored::Colorize;

/// Print the rounds of an agent-played game
///
/// Verbose output adds candidate counts, refused guesses and what the agent
/// knew at the end.
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(secret) = &result.secret {
        println!("Secret: {}", secret.text().bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());

    let mut before = result.candidates_at_start;
    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "Round {}: guess: {} score {}  {}",
            i + 1,
            round.guess,
            round.score,
            score_to_emoji(&round.score)
        );
        if verbose {
            println!("  Candidates: {before} → {}", round.remaining);
        }
        before = round.remaining;
    }

    if verbose {
        for rejection in &result.rejections {
            eprintln!("{}", format!("rejected: {rejection}").dimmed());
        }
        if let Some(knowledge) = &result.knowledge {
            eprintln!("{}", knowledge.dimmed());
        }
        eprintln!(
            "{}",
            format!("played in {:.2}ms", result.duration.as_secs_f64() * 1000.0).dimmed()
        );
    }

    println!();
    if result.won() {
        println!("{}", "Game won.".green().bold());
    } else {
        println!("{}", "Game lost.".red().bold());
    }
}

/// Print a single scored guess
pub fn print_score(guess: &Word, secret: &Word, score: &Score) {
    println!(
        "{} vs {}: {}  {}  {score}",
        guess,
        secret,
        colored_guess(guess, score),
        score_to_emoji(score)
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(config: &BenchmarkConfig, result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", config.strategy);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    match result.average_winning_round() {
        Some(average) => println!(
            "   Average round:    {}",
            format!("{average:.2}").bright_yellow().bold()
        ),
        None => println!("   Average round:    {}", "-".bright_black()),
    }
    if result.rejections > 0 {
        println!("   Rejected guesses: {}", result.rejections);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let games = result.games.max(1) as f64;
    let rows = (1..=result.max_rounds)
        .map(|round| (round.to_string(), result.wins_in(round), false))
        .chain(std::iter::once(("X".to_string(), result.failures, true)));

    for (label, count, failed) in rows {
        let pct = count as f64 / games * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let bar = if failed { bar.red() } else { bar.green() };
        println!("   {label:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
