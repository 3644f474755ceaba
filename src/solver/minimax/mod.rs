//! Minimax (Knuth-style) guess evaluation
//!
//! Scores guesses by the worst-case number of candidates they can leave behind.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_result};
pub use selector::{SAMPLE_SIZE, opening_guess, select_best_guess, select_sampled_guess};
