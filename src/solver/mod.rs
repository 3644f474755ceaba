//! Mastermind solving algorithms
//!
//! Candidate tracking plus the two guess generation strategies.

mod candidates;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use candidates::CandidateSet;
pub use strategy::{MinimaxStrategy, RandomConsistentStrategy, Strategy, StrategyType};
