//! Error types for the Mastermind engine
//!
//! Every failure the engine reports is a [`GameError`]. Callers that only care
//! about the broad category use [`GameError::kind`].

use crate::game::GameState;
use derive_more::{Display, Error};

/// Broad category of a [`GameError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// A value passed in was out of range or had the wrong shape
    InvalidArgument,
    /// The call is not allowed in the current state
    InvalidOperation,
}

/// Errors raised by constructors and game operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Alphabet has fewer than two symbols
    #[display("Alphabet needs at least 2 symbols, got {count}")]
    TooFewSymbols { count: usize },

    /// Alphabet lists the same symbol twice
    #[display("Alphabet contains duplicate symbol {symbol}")]
    DuplicateSymbol { symbol: String },

    /// Symbol value outside of its range
    #[display("Symbol out of range: {message}")]
    SymbolOutOfRange { message: String },

    /// A code must contain at least one symbol
    #[display("Code must contain at least one symbol")]
    EmptyCode,

    /// Code length below 1
    #[display("Code length must be >= 1, got {length}")]
    InvalidCodeLength { length: usize },

    /// Max attempts below 1
    #[display("Max attempts must be >= 1, got {max_attempts}")]
    InvalidMaxAttempts { max_attempts: usize },

    /// Attempt numbers start at 1
    #[display("Attempt number must be >= 1")]
    InvalidAttemptNumber,

    /// Guess and secret (or configured length) differ in length
    #[display("Code must contain exactly {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Reported feedback cannot occur for the code length
    #[display("Feedback ({exact}, {wrong_position}) is impossible for code length {code_length}")]
    FeedbackOutOfBounds {
        exact: usize,
        wrong_position: usize,
        code_length: usize,
    },

    /// Operation attempted after the game reached a terminal state
    #[display("Game is already over. State: {state}")]
    GameOver { state: GameState },

    /// Secret requested while the game is still running
    #[display("Secret code cannot be revealed while the game is in progress")]
    SecretHidden,

    /// User input could not be parsed
    #[display("Cannot parse input: {message}")]
    Parse { message: String },
}

impl GameError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::GameOver { .. } | Self::SecretHidden => ErrorKind::InvalidOperation,
            Self::TooFewSymbols { .. }
            | Self::DuplicateSymbol { .. }
            | Self::SymbolOutOfRange { .. }
            | Self::EmptyCode
            | Self::InvalidCodeLength { .. }
            | Self::InvalidMaxAttempts { .. }
            | Self::InvalidAttemptNumber
            | Self::LengthMismatch { .. }
            | Self::FeedbackOutOfBounds { .. }
            | Self::Parse { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_errors_are_classified() {
        assert_eq!(GameError::SecretHidden.kind(), ErrorKind::InvalidOperation);
        assert_eq!(
            GameError::GameOver {
                state: GameState::Won
            }
            .kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn argument_errors_are_classified() {
        assert_eq!(
            GameError::LengthMismatch {
                expected: 4,
                actual: 3
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(GameError::EmptyCode.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            GameError::TooFewSymbols { count: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_mention_values() {
        let err = GameError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Code must contain exactly 4 symbols, got 3");

        let err = GameError::GameOver {
            state: GameState::Surrendered,
        };
        assert_eq!(err.to_string(), "Game is already over. State: Surrendered");
    }
}
