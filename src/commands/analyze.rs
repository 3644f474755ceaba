//! Guess analysis command
//!
//! Shows how a guess splits the full code space: entropy, expected and
//! worst-case remaining candidates, and every feedback partition.

use crate::config::GameSettings;
use crate::core::{Code, GameResult};
use crate::error::GameError;
use crate::solver::CandidateSet;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::minimax::group_by_result;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Feedback value and how many codes produce it, ordered by feedback
    pub partitions: Vec<(GameResult, usize)>,
}

/// Analyze `input` as an opening guess
///
/// # Errors
/// Returns `GameError::Parse` for input that is not a code over the configured
/// alphabet and `GameError::LengthMismatch` for the wrong length.
pub fn analyze_code(input: &str, settings: &GameSettings) -> Result<AnalysisResult, GameError> {
    let alphabet = settings.alphabet()?;
    let guess = Code::parse(input, &alphabet)?;
    if guess.len() != settings.code_length() {
        return Err(GameError::LengthMismatch {
            expected: settings.code_length(),
            actual: guess.len(),
        });
    }

    let candidates = CandidateSet::full(&alphabet, settings.code_length());
    let metrics = calculate_metrics(&guess, candidates.as_slice());

    let mut partitions: Vec<(GameResult, usize)> = group_by_result(&guess, candidates.as_slice())
        .into_iter()
        .collect();
    partitions.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    Ok(AnalysisResult {
        guess,
        metrics,
        total_candidates: candidates.len(),
        partitions,
    })
}
