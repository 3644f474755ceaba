//! Human-guesses game
//!
//! The engine holds the secret and scores every guess the player submits.

use super::GameState;
use crate::core::{Attempt, Code, GameResult};
use crate::error::GameError;
use std::fmt;
use tracing::{info, instrument};

/// Game where a player tries to break a secret held by the engine
///
/// The secret is write-once and cannot be read while the game is in progress;
/// `Debug` output redacts it as well.
pub struct Game {
    secret: Code,
    max_attempts: usize,
    code_length: usize,
    attempts: Vec<Attempt>,
    state: GameState,
}

impl Game {
    /// Default attempt limit
    pub const DEFAULT_MAX_ATTEMPTS: usize = 12;

    /// Default code length
    pub const DEFAULT_CODE_LENGTH: usize = 4;

    /// Start a game around `secret`
    ///
    /// # Errors
    /// Returns `GameError::InvalidMaxAttempts` if `max_attempts` is zero,
    /// `GameError::InvalidCodeLength` if `code_length` is zero, and
    /// `GameError::LengthMismatch` if the secret is not `code_length` long.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code};
    /// use mastermind_solver::game::{Game, GameState};
    ///
    /// let colors = Alphabet::colors(6).unwrap();
    /// let mut game = Game::new(Code::parse("RGBY", &colors).unwrap(), 12, 4).unwrap();
    ///
    /// let result = game.evaluate_attempt(&Code::parse("RGYB", &colors).unwrap()).unwrap();
    /// assert_eq!((result.exact(), result.wrong_position()), (2, 2));
    /// assert_eq!(game.state(), GameState::InProgress);
    /// assert!(game.secret_code().is_err());
    /// ```
    pub fn new(secret: Code, max_attempts: usize, code_length: usize) -> Result<Self, GameError> {
        if max_attempts < 1 {
            return Err(GameError::InvalidMaxAttempts { max_attempts });
        }
        if code_length < 1 {
            return Err(GameError::InvalidCodeLength {
                length: code_length,
            });
        }
        if secret.len() != code_length {
            return Err(GameError::LengthMismatch {
                expected: code_length,
                actual: secret.len(),
            });
        }

        Ok(Self {
            secret,
            max_attempts,
            code_length,
            attempts: Vec::new(),
            state: GameState::InProgress,
        })
    }

    /// Score a guess and advance the game
    ///
    /// Moves to `Won` on an all-exact result, otherwise to `Lost` once the
    /// attempt limit is reached.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has ended and
    /// `GameError::LengthMismatch` if the guess has the wrong length.
    #[instrument(skip_all, fields(attempt = self.current_attempt()))]
    pub fn evaluate_attempt(&mut self, proposal: &Code) -> Result<GameResult, GameError> {
        self.ensure_in_progress()?;
        let result = crate::core::score(proposal, &self.secret)?;

        let attempt = Attempt::new(self.current_attempt(), proposal.clone(), result)?;
        self.attempts.push(attempt);

        if result.is_win(self.code_length) {
            self.state = GameState::Won;
            info!(attempts = self.attempts.len(), "code broken");
        } else if self.attempts.len() >= self.max_attempts {
            self.state = GameState::Lost;
            info!(attempts = self.attempts.len(), "out of attempts");
        }

        Ok(result)
    }

    /// Give up the current game
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already ended.
    pub fn surrender(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.state = GameState::Surrendered;
        info!("player surrendered");
        Ok(())
    }

    /// Reveal the secret once the game is over
    ///
    /// # Errors
    /// Returns `GameError::SecretHidden` while the game is in progress.
    pub fn secret_code(&self) -> Result<&Code, GameError> {
        if self.state == GameState::InProgress {
            return Err(GameError::SecretHidden);
        }
        Ok(&self.secret)
    }

    /// Clear the history and start over with the same secret
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.state = GameState::InProgress;
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number the next attempt will get
    #[inline]
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.attempts.len() + 1
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver { state: self.state });
        }
        Ok(())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("secret", &"<hidden>")
            .field("max_attempts", &self.max_attempts)
            .field("code_length", &self.code_length)
            .field("attempts", &self.attempts)
            .field("state", &self.state)
            .finish()
    }
}
