//! Command implementations

pub mod benchmark;
pub mod play;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayResult, play_game};
pub use simple::{SessionError, SessionSummary, run_simple};
