//! Wordle Simulation - CLI
//!
//! Play Wordle, watch the letter frequency agent play it, or benchmark the
//! agent over many games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_sim::{
    commands::{BenchmarkConfig, benchmark::DEFAULT_GAMES, play_game, run_benchmark, run_simple},
    core::{Score, Word},
    game::{DEFAULT_MAX_ROUNDS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{ReportFormat, print_benchmark_result, print_play_result, print_score, text_report},
    solver::StrategyType,
    wordlists::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle game simulation with a letter frequency solving agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short, long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Answer list file; secrets are drawn from it instead of the word list
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Solving strategy
    #[arg(short, long, global = true, default_value = "frequency", value_parser = StrategyType::NAMES)]
    strategy: String,

    /// Seed for reproducible secrets and random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Hard mode: guesses must use every revealed letter
    #[arg(long, global = true)]
    hard: bool,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Let the agent play one game against a random secret (default)
    Play,

    /// Let the agent play against a chosen secret
    Solve {
        /// The secret word
        word: String,
    },

    /// Score a guess against a secret
    Score {
        guess: String,
        secret: String,
    },

    /// Play yourself in the terminal
    Simple,

    /// Benchmark the agent over many games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        count: usize,

        /// Report format: text or pretty
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rounds, cli.length).with_hard_mode(cli.hard);
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    if let Commands::Score { guess, secret } = &command {
        return run_score_command(guess, secret, cli.length);
    }

    let vocabulary = Vocabulary::load(cli.length, &cli.words, cli.answers.as_deref())
        .with_context(|| format!("cannot load word lists from {}", cli.words.display()))?;
    diagnostic(cli.verbose, &vocabulary.to_string());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match command {
        Commands::Play => run_play_command(&cli, config, &vocabulary, None, &mut rng),
        Commands::Solve { word } => {
            run_play_command(&cli, config, &vocabulary, Some(&word), &mut rng)
        }
        Commands::Simple => {
            let summary = run_simple(config, &vocabulary, &mut rng)?;
            println!("Games played: {}, won: {}", summary.played, summary.won);
            Ok(())
        }
        Commands::Benchmark { count, format } => {
            run_benchmark_command(&cli, config, &vocabulary, count, format)
        }
        Commands::Score { .. } => Ok(()),
    }
}

/// Dimmed line on stderr when `--verbose` is set
fn diagnostic(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", message.dimmed());
    }
}

fn run_play_command(
    cli: &Cli,
    config: GameConfig,
    vocabulary: &Vocabulary,
    secret: Option<&str>,
    rng: &mut StdRng,
) -> Result<()> {
    let strategy = StrategyType::from_name(&cli.strategy, cli.seed);
    diagnostic(cli.verbose, &format!("strategy={strategy}, {config}"));

    let result = play_game(config, vocabulary, strategy, secret, rng)?;
    print_play_result(&result, cli.verbose);
    Ok(())
}

fn run_score_command(guess: &str, secret: &str, length: usize) -> Result<()> {
    let guess = Word::with_length(guess, length).with_context(|| format!("bad guess '{guess}'"))?;
    let secret =
        Word::with_length(secret, length).with_context(|| format!("bad secret '{secret}'"))?;

    let score = Score::calculate(&guess, &secret);
    print_score(&guess, &secret, &score);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    config: GameConfig,
    vocabulary: &Vocabulary,
    count: usize,
    format: ReportFormat,
) -> Result<()> {
    let bench = BenchmarkConfig::new(count, config)
        .with_strategy(cli.strategy.as_str())
        .with_seed(cli.seed);
    bench.validate()?;
    diagnostic(cli.verbose, &bench.to_string());

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} games", bench.strategy));

    let result = run_benchmark(&bench, vocabulary, Some(&pb))?;
    pb.finish_and_clear();

    diagnostic(
        cli.verbose,
        &format!(
            "{} games in {:.2}s, {} rejected guesses",
            result.games,
            result.duration.as_secs_f64(),
            result.rejections
        ),
    );

    match format {
        ReportFormat::Text => print!("{}", text_report(&result)),
        ReportFormat::Pretty => print_benchmark_result(&bench, &result),
    }
    Ok(())
}
