//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod guess;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, benchmark_secrets, run_benchmark};
pub use guess::{GuessOutcome, run_guess, run_guess_with};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
