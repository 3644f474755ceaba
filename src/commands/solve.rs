//! Code solving command
//!
//! Lets a strategy break a known secret, answering every guess honestly, and
//! records the path it took.

use crate::config::GameSettings;
use crate::core::{Code, GameResult, score};
use crate::error::GameError;
use crate::game::{ComputerGuessingGame, GameState};
use crate::solver::Strategy;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    /// Compute entropy metrics for every guess
    pub with_metrics: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            with_metrics: true,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
    pub strategy: &'static str,
}

impl SolveResult {
    /// Number of guesses made
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }
}

/// A single guess in the solution path
pub struct GuessStep {
    pub guess: Code,
    pub result: GameResult,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub metrics: Option<GuessMetrics>,
}

/// Play `strategy` against the configured secret until the game ends
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the secret does not have the
/// configured length, or any construction error from the settings.
pub fn solve_code<S: Strategy>(
    strategy: S,
    settings: &GameSettings,
    config: SolveConfig,
) -> Result<SolveResult, GameError> {
    if config.secret.len() != settings.code_length() {
        return Err(GameError::LengthMismatch {
            expected: settings.code_length(),
            actual: config.secret.len(),
        });
    }

    let mut game = ComputerGuessingGame::new(
        strategy,
        settings.alphabet()?,
        settings.code_length(),
        settings.max_attempts(),
        0,
    )?;
    let mut steps = Vec::new();

    while game.state() == GameState::InProgress {
        let guess = game.computer_guess()?;

        // The first guess enumerates the candidate set, so count afterwards
        let candidates = game.strategy().candidates();
        let candidates_before = candidates.len();
        let metrics = (config.with_metrics && candidates_before > 1)
            .then(|| calculate_metrics(&guess, candidates.as_slice()));

        let result = score(&guess, &config.secret)?;
        game.provide_computer_feedback(&guess, result)?;

        steps.push(GuessStep {
            guess,
            result,
            candidates_before,
            candidates_after: game.strategy().candidates().len(),
            metrics,
        });
    }

    Ok(SolveResult {
        success: game.state() == GameState::Won,
        steps,
        secret: config.secret,
        strategy: game.strategy().name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{MinimaxStrategy, RandomConsistentStrategy, StrategyType};

    fn secret(s: &str) -> Code {
        Code::parse(s, &GameSettings::create_default().alphabet().unwrap()).unwrap()
    }

    #[test]
    fn minimax_solves_within_limit() {
        let settings = GameSettings::create_default();
        let result = solve_code(
            MinimaxStrategy::new(Some(1)),
            &settings,
            SolveConfig::new(secret("CMBY")),
        )
        .unwrap();

        assert!(result.success);
        assert!(result.attempts() <= settings.max_attempts());
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, secret("CMBY"));
        assert_eq!(last.result, GameResult::perfect(4));
    }

    #[test]
    fn candidates_never_grow() {
        let settings = GameSettings::create_default();
        let result = solve_code(
            RandomConsistentStrategy::new(Some(8)),
            &settings,
            SolveConfig::new(secret("GGRB")),
        )
        .unwrap();

        assert_eq!(result.steps[0].candidates_before, 1296);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in result.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn metrics_are_optional() {
        let settings = GameSettings::create_default();
        let mut config = SolveConfig::new(secret("RGBY"));
        config.with_metrics = false;

        let result = solve_code(StrategyType::from_name("minimax", Some(3)), &settings, config).unwrap();
        assert!(result.steps.iter().all(|step| step.metrics.is_none()));
        assert_eq!(result.strategy, "Minimax filtering (Knuth)");
    }

    #[test]
    fn wrong_length_secret_rejected() {
        let settings = GameSettings::create_default();
        let result = solve_code(
            MinimaxStrategy::new(Some(1)),
            &settings,
            SolveConfig::new(secret("RGB")),
        );
        assert!(matches!(result, Err(GameError::LengthMismatch { .. })));
    }
}
