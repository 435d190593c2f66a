//! Wordle solving
//!
//! Knowledge tracking, candidate filtering, letter frequency scoring and the
//! agent that plays a game with a chosen strategy.

mod agent;
pub mod filter;
pub mod frequency;
mod knowledge;
mod pool;
pub mod strategy;

pub use agent::{Agent, Round};
pub use knowledge::{LetterKnowledge, LetterStatus, PositionConstraint};
pub use pool::CandidatePool;
pub use strategy::{LetterFrequencyStrategy, RandomStrategy, Strategy, StrategyType};
