//! A single recorded turn

use super::{Code, GameResult};
use crate::error::GameError;

/// One guess and the feedback it received
///
/// Attempts are numbered from 1 and never change once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    number: usize,
    guess: Code,
    result: GameResult,
}

impl Attempt {
    /// Create an attempt
    ///
    /// # Errors
    /// Returns `GameError::InvalidAttemptNumber` if `number` is zero.
    pub fn new(number: usize, guess: Code, result: GameResult) -> Result<Self, GameError> {
        if number == 0 {
            return Err(GameError::InvalidAttemptNumber);
        }
        Ok(Self {
            number,
            guess,
            result,
        })
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }
}
