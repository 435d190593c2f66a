//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod report;

pub use display::{print_benchmark_result, print_play_result, print_score};
pub use report::{ReportFormat, text_report};
