//! Shannon entropy calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, GameResult};
use crate::solver::minimax::group_by_result;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback values the guess can produce
    pub partitions: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code};
/// use mastermind_solver::solver::entropy::calculate_entropy;
///
/// let digits = Alphabet::digits(10).unwrap();
/// let guess = Code::parse("12", &digits).unwrap();
/// let candidates = vec![
///     Code::parse("12", &digits).unwrap(),
///     Code::parse("34", &digits).unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely outcomes
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_result(guess, candidates))
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n feedback values
#[must_use]
pub fn shannon_entropy<S>(result_counts: &std::collections::HashMap<GameResult, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = result_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    result_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let groups: FxHashMap<GameResult, usize> = group_by_result(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
        partitions: groups.len(),
    }
}
