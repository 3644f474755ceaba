//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, GameResult};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let digits = Alphabet::digits(4).unwrap();
/// let guess = Code::parse("01", &digits).unwrap();
/// let candidates: Vec<Code> = digits.codes(2).collect();
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates);
/// assert!(max_remaining <= candidates.len());
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_result(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
#[must_use]
pub fn group_by_result(guess: &Code, candidates: &[Code]) -> FxHashMap<GameResult, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let result = GameResult::calculate(guess, candidate);
        *counts.entry(result).or_insert(0) += 1;
    }

    counts
}
