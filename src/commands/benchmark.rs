//! Benchmark command
//!
//! Plays many independent games with one strategy and tallies the round in
//! which each was won.

use crate::game::{ConfigError, Game, GameConfig, GameStatus};
use crate::solver::{Agent, StrategyType};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

pub const DEFAULT_GAMES: usize = 100;

/// Settings for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub game: GameConfig,
    /// Strategy name, see `StrategyType::from_name`
    pub strategy: String,
    /// Base seed; game `i` uses `seed + i`
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(games: usize, game: GameConfig) -> Self {
        Self {
            games,
            game,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Check the settings before any game is played
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidGameCount` for zero games, or the game
    /// configuration's own error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::InvalidGameCount(self.games));
        }
        self.game.validate()
    }

    fn game_rng(&self, index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            game: GameConfig::default(),
            strategy: StrategyType::default().name().to_string(),
            seed: None,
        }
    }
}

impl fmt::Display for BenchmarkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wordle Benchmark (games={}, strategy={}, {})",
            self.games, self.strategy, self.game
        )
    }
}

/// Outcome of a single benchmark game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GameOutcome {
    status: GameStatus,
    rounds: usize,
    rejections: usize,
}

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub games: usize,
    pub max_rounds: usize,
    /// `wins[r - 1]` games were won in round `r`
    pub wins: Vec<usize>,
    /// Games lost, or abandoned with no candidate left
    pub failures: usize,
    pub rejections: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    fn from_outcomes(outcomes: &[GameOutcome], max_rounds: usize, duration: Duration) -> Self {
        let mut wins = vec![0; max_rounds];
        let mut failures = 0;

        for outcome in outcomes {
            match outcome.status {
                GameStatus::Won => wins[outcome.rounds - 1] += 1,
                GameStatus::Lost | GameStatus::Active => failures += 1,
            }
        }

        Self {
            games: outcomes.len(),
            max_rounds,
            wins,
            failures,
            rejections: outcomes.iter().map(|o| o.rejections).sum(),
            duration,
        }
    }

    /// Games won in `round` (1-based)
    #[must_use]
    pub fn wins_in(&self, round: usize) -> usize {
        round
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total_wins(&self) -> usize {
        self.wins.iter().sum()
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_wins() as f64 / self.games as f64
    }

    /// Mean round of the games won
    #[must_use]
    pub fn average_winning_round(&self) -> Option<f64> {
        let won = self.total_wins();
        if won == 0 {
            return None;
        }
        let rounds: usize = self
            .wins
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(rounds as f64 / won as f64)
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        self.games as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Run a benchmark
///
/// Games run in parallel and are independent: each gets its own game, agent,
/// strategy and random number generator. With a seed the results are
/// reproducible regardless of scheduling.
///
/// # Errors
///
/// Returns `ConfigError` if the benchmark or game settings are invalid or do
/// not fit the vocabulary.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    vocabulary: &Vocabulary,
    progress: Option<&ProgressBar>,
) -> Result<BenchmarkResult, ConfigError> {
    config.validate()?;
    let start = Instant::now();

    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let outcome = play_one(config, vocabulary, index);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BenchmarkResult::from_outcomes(
        &outcomes,
        config.game.max_rounds,
        start.elapsed(),
    ))
}

fn play_one(
    config: &BenchmarkConfig,
    vocabulary: &Vocabulary,
    index: usize,
) -> Result<GameOutcome, ConfigError> {
    let mut rng = config.game_rng(index);
    let mut game = Game::new(config.game, vocabulary, &mut rng)?;

    let strategy = StrategyType::from_name(&config.strategy, Some(rng.random()));
    let mut agent = Agent::new(strategy);
    let status = agent.play(&mut game);

    Ok(GameOutcome {
        status,
        rounds: game.round(),
        rejections: agent.rejections().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "vivid", "wordy", "snack", "crane", "divid", "livid", "votes", "irate", "audit", "civic",
        "dizzy", "video",
    ];

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_words(5, words_from_slice(WORDS, 5), Vec::new()).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(20, GameConfig::default()).with_seed(Some(1));
        let result = run_benchmark(&config, &vocab, None).unwrap();

        assert_eq!(result.games, 20);
        assert_eq!(result.wins.len(), 6);
        assert_eq!(result.total_wins() + result.failures, 20);
        assert_eq!(result.rejections, 0);
    }

    #[test]
    fn frequency_strategy_wins_every_game() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(30, GameConfig::default()).with_seed(Some(9));
        let result = run_benchmark(&config, &vocab, None).unwrap();

        assert_eq!(result.failures, 0);
        assert_eq!(result.win_rate(), 1.0);
        let average = result.average_winning_round().unwrap();
        assert!((1.0..=6.0).contains(&average));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(25, GameConfig::default())
            .with_strategy("random")
            .with_seed(Some(5));

        let first = run_benchmark(&config, &vocab, None).unwrap();
        let second = run_benchmark(&config, &vocab, None).unwrap();
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.failures, second.failures);
    }

    #[test]
    fn zero_games_rejected() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(0, GameConfig::default());
        assert!(matches!(
            run_benchmark(&config, &vocab, None),
            Err(ConfigError::InvalidGameCount(0))
        ));
    }

    #[test]
    fn single_round_games_mostly_fail() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(12, GameConfig::new(1, 5)).with_seed(Some(2));
        let result = run_benchmark(&config, &vocab, None).unwrap();

        assert_eq!(result.wins.len(), 1);
        assert_eq!(result.wins_in(1) + result.failures, 12);
        assert_eq!(result.wins_in(0), 0);
        assert_eq!(result.wins_in(2), 0);
    }

    #[test]
    fn progress_counts_every_game() {
        let vocab = vocabulary();
        let config = BenchmarkConfig::new(10, GameConfig::default()).with_seed(Some(3));
        let pb = ProgressBar::hidden();
        pb.set_length(10);

        run_benchmark(&config, &vocab, Some(&pb)).unwrap();
        assert_eq!(pb.position(), 10);
    }

    #[test]
    fn histogram_statistics() {
        let outcomes = [
            GameOutcome {
                status: GameStatus::Won,
                rounds: 2,
                rejections: 0,
            },
            GameOutcome {
                status: GameStatus::Won,
                rounds: 4,
                rejections: 1,
            },
            GameOutcome {
                status: GameStatus::Lost,
                rounds: 6,
                rejections: 0,
            },
            GameOutcome {
                status: GameStatus::Active,
                rounds: 3,
                rejections: 0,
            },
        ];
        let result = BenchmarkResult::from_outcomes(&outcomes, 6, Duration::from_secs(1));

        assert_eq!(result.wins, vec![0, 1, 0, 1, 0, 0]);
        assert_eq!(result.failures, 2);
        assert_eq!(result.rejections, 1);
        assert_eq!(result.average_winning_round(), Some(3.0));
        assert_eq!(result.win_rate(), 0.5);
    }

    #[test]
    fn config_display() {
        let config = BenchmarkConfig::default();
        assert_eq!(
            config.to_string(),
            "Wordle Benchmark (games=100, strategy=frequency, maximum rounds=6, word length=5, hard mode=off)"
        );
    }
}
