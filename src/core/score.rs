//! Feedback scoring
//!
//! Feedback for a guess is a pair of counts:
//! - exact matches: same symbol in the same position
//! - wrong-position matches: symbol present in the secret, but elsewhere
//!
//! [`score`] is the single source of truth for feedback. Games, strategies and
//! the honesty check all go through it.

use super::{Code, Symbol};
use crate::error::GameError;
use std::fmt;

/// Feedback for one guess
///
/// Invariant for computed results: `exact + wrong_position <= code length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameResult {
    exact: usize,
    wrong_position: usize,
}

impl GameResult {
    #[must_use]
    pub const fn new(exact: usize, wrong_position: usize) -> Self {
        Self {
            exact,
            wrong_position,
        }
    }

    /// Feedback for a fully correct guess
    #[must_use]
    pub const fn perfect(code_length: usize) -> Self {
        Self::new(code_length, 0)
    }

    /// Create feedback and check it can occur for `code_length`
    ///
    /// # Errors
    /// Returns `GameError::FeedbackOutOfBounds` if either count or their sum
    /// exceeds `code_length`.
    pub fn checked(exact: usize, wrong_position: usize, code_length: usize) -> Result<Self, GameError> {
        let result = Self::new(exact, wrong_position);
        if result.fits(code_length) {
            Ok(result)
        } else {
            Err(GameError::FeedbackOutOfBounds {
                exact,
                wrong_position,
                code_length,
            })
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn wrong_position(self) -> usize {
        self.wrong_position
    }

    /// True when every position matched
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Whether this feedback is possible for a code of `code_length`
    #[must_use]
    pub const fn fits(self, code_length: usize) -> bool {
        self.exact <= code_length
            && self.wrong_position <= code_length
            && self.exact + self.wrong_position <= code_length
    }

    /// Score `guess` against `secret`
    ///
    /// Callers guarantee equal lengths; use [`score`] for the checked version.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches, set the other positions aside
    /// 2. Second pass: each leftover guess symbol consumes at most one equal
    ///    leftover secret symbol
    #[must_use]
    pub(crate) fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "score requires equal lengths");

        let mut exact = 0;
        let mut guess_remaining: Vec<Symbol> = Vec::with_capacity(guess.len());
        let mut secret_remaining: Vec<Symbol> = Vec::with_capacity(secret.len());

        for (&g, &s) in guess.symbols().iter().zip(secret.symbols()) {
            if g == s {
                exact += 1;
            } else {
                guess_remaining.push(g);
                secret_remaining.push(s);
            }
        }

        let mut wrong_position = 0;
        for symbol in guess_remaining {
            if let Some(index) = secret_remaining.iter().position(|&s| s == symbol) {
                wrong_position += 1;
                secret_remaining.swap_remove(index);
            }
        }

        Self::new(exact, wrong_position)
    }

    /// Parse reported feedback such as "2 1" or "2,1"
    ///
    /// # Errors
    /// Returns `GameError::Parse` unless the input is exactly two non-negative
    /// integers, and `GameError::FeedbackOutOfBounds` if they cannot occur for
    /// `code_length`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameResult;
    ///
    /// assert_eq!(GameResult::parse("2 1", 4).unwrap(), GameResult::new(2, 1));
    /// assert_eq!(GameResult::parse("3,0", 4).unwrap(), GameResult::new(3, 0));
    /// assert!(GameResult::parse("3 2", 4).is_err());
    /// ```
    pub fn parse(input: &str, code_length: usize) -> Result<Self, GameError> {
        let numbers = input
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| GameError::parse(format!("'{part}' is not a count")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            &[exact, wrong_position] => Self::checked(exact, wrong_position, code_length),
            _ => Err(GameError::parse(
                "expected two numbers: exact and wrong-position matches",
            )),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[exact: {}, wrong position: {}]",
            self.exact, self.wrong_position
        )
    }
}

/// Score `guess` against `secret`
///
/// Pure and deterministic; symmetric in its arguments.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, Code, GameResult, score};
///
/// let digits = Alphabet::digits(10).unwrap();
/// let secret = Code::parse("122", &digits).unwrap();
/// let guess = Code::parse("222", &digits).unwrap();
///
/// // The third '2' has no secret '2' left to pair with
/// assert_eq!(score(&guess, &secret).unwrap(), GameResult::new(2, 0));
/// ```
pub fn score(guess: &Code, secret: &Code) -> Result<GameResult, GameError> {
    if guess.len() != secret.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }
    Ok(GameResult::calculate(guess, secret))
}
