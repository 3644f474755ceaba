//! Computer-guesses game and feedback honesty check
//!
//! A strategy proposes guesses while an outside reporter (usually a person)
//! supplies the feedback. That feedback is untrusted: it is recorded as given,
//! and can later be checked against the secret once it is revealed.

use super::GameState;
use crate::core::{Alphabet, Attempt, Code, GameResult, score};
use crate::error::GameError;
use crate::solver::{Strategy, StrategyType};
use tracing::{info, instrument, warn};

/// Game where the engine tries to break a secret held by someone else
#[derive(Debug)]
pub struct ComputerGuessingGame<S: Strategy = StrategyType> {
    strategy: S,
    alphabet: Alphabet,
    code_length: usize,
    max_attempts: usize,
    allowed_cheats: usize,
    attempts: Vec<Attempt>,
    state: GameState,
    revealed_secret: Option<Code>,
    detected_cheats: usize,
    cheating_detected: bool,
}

impl<S: Strategy> ComputerGuessingGame<S> {
    /// Set up a game
    ///
    /// `allowed_cheats` is how many inconsistent answers are tolerated before
    /// the session counts as cheated.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCodeLength` or `GameError::InvalidMaxAttempts`
    /// if either is zero.
    pub fn new(
        strategy: S,
        alphabet: Alphabet,
        code_length: usize,
        max_attempts: usize,
        allowed_cheats: usize,
    ) -> Result<Self, GameError> {
        if code_length < 1 {
            return Err(GameError::InvalidCodeLength {
                length: code_length,
            });
        }
        if max_attempts < 1 {
            return Err(GameError::InvalidMaxAttempts { max_attempts });
        }

        Ok(Self {
            strategy,
            alphabet,
            code_length,
            max_attempts,
            allowed_cheats,
            attempts: Vec::new(),
            state: GameState::InProgress,
            revealed_secret: None,
            detected_cheats: 0,
            cheating_detected: false,
        })
    }

    /// Ask the strategy for its next guess
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended.
    #[instrument(skip_all, fields(attempt = self.current_attempt()))]
    pub fn computer_guess(&mut self) -> Result<Code, GameError> {
        self.ensure_in_progress()?;
        self.strategy
            .generate_guess(&self.attempts, &self.alphabet, self.code_length)
    }

    /// Record feedback for a guess and let the strategy learn from it
    ///
    /// Feedback inconsistent with earlier answers is accepted as is; only
    /// feedback that no code of this length could produce is rejected.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has ended,
    /// `GameError::LengthMismatch` for a guess of the wrong length and
    /// `GameError::FeedbackOutOfBounds` for impossible counts.
    #[instrument(skip_all, fields(guess = %guess, %result))]
    pub fn provide_computer_feedback(&mut self, guess: &Code, result: GameResult) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if guess.len() != self.code_length {
            return Err(GameError::LengthMismatch {
                expected: self.code_length,
                actual: guess.len(),
            });
        }
        if !result.fits(self.code_length) {
            return Err(GameError::FeedbackOutOfBounds {
                exact: result.exact(),
                wrong_position: result.wrong_position(),
                code_length: self.code_length,
            });
        }

        let attempt = Attempt::new(self.current_attempt(), guess.clone(), result)?;
        self.attempts.push(attempt);
        self.strategy.update_feedback(guess, result);

        if result.is_win(self.code_length) {
            self.state = GameState::Won;
            info!(attempts = self.attempts.len(), "computer broke the code");
        } else if self.attempts.len() >= self.max_attempts {
            self.state = GameState::Lost;
            info!(attempts = self.attempts.len(), "computer ran out of attempts");
        }

        Ok(())
    }

    /// Check every recorded answer against the revealed secret
    ///
    /// Returns `true` when the number of inconsistent answers exceeds the
    /// allowance. With no secret there is nothing to verify and `false` is
    /// returned. Safe to call repeatedly, e.g. after every attempt.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the secret does not have the
    /// game's code length; counters and the revealed secret are left as they were.
    #[instrument(skip_all, fields(attempts = self.attempts.len()))]
    pub fn check_for_cheating(&mut self, actual_secret: Option<&Code>) -> Result<bool, GameError> {
        let Some(secret) = actual_secret else {
            return Ok(false);
        };
        if secret.len() != self.code_length {
            return Err(GameError::LengthMismatch {
                expected: self.code_length,
                actual: secret.len(),
            });
        }

        self.detected_cheats = self
            .attempts
            .iter()
            .filter(|attempt| score(attempt.guess(), secret).ok() != Some(attempt.result()))
            .count();
        self.revealed_secret = Some(secret.clone());
        self.cheating_detected = self.detected_cheats > self.allowed_cheats;

        if self.cheating_detected {
            warn!(
                detected = self.detected_cheats,
                allowed = self.allowed_cheats,
                "inconsistent feedback exceeds tolerance"
            );
        }

        Ok(self.cheating_detected)
    }

    /// The player gives up
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already ended.
    pub fn player_surrenders(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.state = GameState::Surrendered;
        info!("player surrendered");
        Ok(())
    }

    /// Start over: history, strategy state, revealed secret and cheat flags
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.state = GameState::InProgress;
        self.strategy.reset();
        self.revealed_secret = None;
        self.detected_cheats = 0;
        self.cheating_detected = false;
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

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn allowed_cheats(&self) -> usize {
        self.allowed_cheats
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

    /// Inconsistent answers found by the last check
    #[inline]
    #[must_use]
    pub const fn detected_cheats(&self) -> usize {
        self.detected_cheats
    }

    /// Whether the last check exceeded the allowance
    #[inline]
    #[must_use]
    pub const fn cheating_detected(&self) -> bool {
        self.cheating_detected
    }

    /// Secret given to the last check, if any
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Code> {
        self.revealed_secret.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver { state: self.state });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::solver::{MinimaxStrategy, RandomConsistentStrategy};

    fn setup(allowed_cheats: usize) -> ComputerGuessingGame<MinimaxStrategy> {
        ComputerGuessingGame::new(
            MinimaxStrategy::new(Some(17)),
            Alphabet::colors(6).unwrap(),
            4,
            12,
            allowed_cheats,
        )
        .unwrap()
    }

    fn colors(s: &str) -> Code {
        Code::parse(s, &Alphabet::colors(6).unwrap()).unwrap()
    }

    /// Play honestly against `secret` until the game ends
    fn play_honestly<S: Strategy>(game: &mut ComputerGuessingGame<S>, secret: &Code) {
        while game.state() == GameState::InProgress {
            let guess = game.computer_guess().unwrap();
            let result = score(&guess, secret).unwrap();
            game.provide_computer_feedback(&guess, result).unwrap();
        }
    }

    #[test]
    fn constructor_validation() {
        let alphabet = Alphabet::colors(6).unwrap();
        assert!(matches!(
            ComputerGuessingGame::new(MinimaxStrategy::default(), alphabet.clone(), 0, 12, 0),
            Err(GameError::InvalidCodeLength { .. })
        ));
        assert!(matches!(
            ComputerGuessingGame::new(MinimaxStrategy::default(), alphabet, 4, 0, 0),
            Err(GameError::InvalidMaxAttempts { .. })
        ));
    }

    #[test]
    fn honest_game_is_won_without_cheats() {
        let secret = colors("BGMR");
        let mut game = setup(0);
        play_honestly(&mut game, &secret);

        assert_eq!(game.state(), GameState::Won);
        assert!(!game.check_for_cheating(Some(&secret)).unwrap());
        assert_eq!(game.detected_cheats(), 0);
        assert_eq!(game.revealed_secret(), Some(&secret));
    }

    #[test]
    fn lying_about_a_correct_guess_is_one_cheat() {
        let secret = colors("RRYY");
        let mut game = setup(0);

        // Minimax opens with RRYY, which is the secret
        let guess = game.computer_guess().unwrap();
        assert_eq!(guess, secret);
        game.provide_computer_feedback(&guess, GameResult::new(0, 0)).unwrap();

        assert!(game.check_for_cheating(Some(&secret)).unwrap());
        assert_eq!(game.detected_cheats(), 1);
    }

    #[test]
    fn tolerance_is_respected() {
        let secret = colors("RRYY");
        let mut game = setup(1);

        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, GameResult::new(0, 0)).unwrap();

        assert!(!game.check_for_cheating(Some(&secret)).unwrap());
        assert_eq!(game.detected_cheats(), 1);
        assert!(!game.cheating_detected());
    }

    #[test]
    fn no_secret_means_no_verdict() {
        let mut game = setup(0);
        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, GameResult::new(0, 0)).unwrap();

        assert!(!game.check_for_cheating(None).unwrap());
        assert_eq!(game.detected_cheats(), 0);
        assert!(game.revealed_secret().is_none());
    }

    #[test]
    fn secret_of_wrong_length_is_rejected() {
        let secret = colors("BGMR");
        let mut game = setup(0);
        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, score(&guess, &secret).unwrap())
            .unwrap();

        assert_eq!(
            game.check_for_cheating(Some(&colors("RRY"))),
            Err(GameError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(game.detected_cheats(), 0);
        assert!(!game.cheating_detected());
        assert!(game.revealed_secret().is_none());

        assert!(!game.check_for_cheating(Some(&secret)).unwrap());
    }

    #[test]
    fn progressive_checks_are_idempotent() {
        let secret = colors("CCMB");
        let mut game = setup(0);

        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, score(&guess, &secret).unwrap())
            .unwrap();
        assert!(!game.check_for_cheating(Some(&secret)).unwrap());
        assert!(!game.check_for_cheating(Some(&secret)).unwrap());
        assert_eq!(game.detected_cheats(), 0);
    }

    #[test]
    fn win_on_perfect_feedback() {
        let mut game = setup(0);
        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, GameResult::perfect(4)).unwrap();

        assert_eq!(game.state(), GameState::Won);
        let err = game.computer_guess().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn lost_after_max_attempts() {
        let mut game = ComputerGuessingGame::new(
            RandomConsistentStrategy::new(Some(4)),
            Alphabet::colors(6).unwrap(),
            4,
            2,
            0,
        )
        .unwrap();

        for _ in 0..2 {
            let guess = game.computer_guess().unwrap();
            game.provide_computer_feedback(&guess, GameResult::new(0, 0)).unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn feedback_shape_checked() {
        let mut game = setup(0);
        let err = game
            .provide_computer_feedback(&colors("RGB"), GameResult::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, GameError::LengthMismatch { expected: 4, actual: 3 }));

        let err = game
            .provide_computer_feedback(&colors("RGBY"), GameResult::new(3, 2))
            .unwrap_err();
        assert!(matches!(err, GameError::FeedbackOutOfBounds { .. }));
        assert!(game.attempts().is_empty());
    }

    #[test]
    fn inconsistent_feedback_keeps_the_game_running() {
        let mut game = setup(0);
        let first = game.computer_guess().unwrap();
        game.provide_computer_feedback(&first, GameResult::new(0, 0)).unwrap();

        // Claim the same guess now has one exact match
        game.provide_computer_feedback(&first, GameResult::new(1, 0)).unwrap();
        assert!(game.strategy().candidates().is_empty());

        let fallback = game.computer_guess().unwrap();
        assert_eq!(fallback, colors("RRRR"));
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn surrender_ends_game() {
        let mut game = setup(0);
        game.player_surrenders().unwrap();
        assert_eq!(game.state(), GameState::Surrendered);
        assert!(game.player_surrenders().is_err());
        assert!(game.computer_guess().is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let secret = colors("RRYY");
        let mut game = setup(0);
        let guess = game.computer_guess().unwrap();
        game.provide_computer_feedback(&guess, GameResult::new(0, 0)).unwrap();
        game.check_for_cheating(Some(&secret)).unwrap();
        game.player_surrenders().unwrap();

        game.reset();
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.attempts().is_empty());
        assert!(game.strategy().candidates().is_empty());
        assert!(game.revealed_secret().is_none());
        assert_eq!(game.detected_cheats(), 0);
        assert!(!game.cheating_detected());

        play_honestly(&mut game, &secret);
        assert_eq!(game.state(), GameState::Won);
    }
}
