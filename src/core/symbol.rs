//! Code symbols
//!
//! A symbol is either a peg colour or a digit. Symbols of different kinds never
//! compare equal, even when their underlying values coincide.

use crate::error::GameError;
use std::fmt;

/// Peg colours, in the order they are offered to players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// All colours in canonical order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
    ];

    /// Full colour name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
        }
    }

    /// Single-letter code used for input (R, Y, G, B, M, C)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Magenta => 'M',
            Self::Cyan => 'C',
        }
    }

    /// Look up a colour by its letter (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.letter() == upper)
    }

    /// Look up a colour by a case-insensitive prefix of its name
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_name("mag"), Some(Color::Magenta));
    /// assert_eq!(Color::from_name("  Blue "), Some(Color::Blue));
    /// assert_eq!(Color::from_name("purple"), None);
    /// ```
    #[must_use]
    pub fn from_name(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase().starts_with(&key))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single position value in a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Color(Color),
    Digit(u8),
}

impl Symbol {
    /// Largest digit a [`Symbol::Digit`] may hold
    pub const MAX_DIGIT: u8 = 9;

    /// Create a digit symbol
    ///
    /// # Errors
    /// Returns `GameError::SymbolOutOfRange` if `digit > 9`.
    pub fn digit(digit: u8) -> Result<Self, GameError> {
        if digit > Self::MAX_DIGIT {
            return Err(GameError::SymbolOutOfRange {
                message: format!("digit must be in 0-{}, got {digit}", Self::MAX_DIGIT),
            });
        }
        Ok(Self::Digit(digit))
    }

    /// Check a symbol built directly from its variant
    ///
    /// # Errors
    /// Returns `GameError::SymbolOutOfRange` for a digit above 9.
    pub fn validate(self) -> Result<Self, GameError> {
        match self {
            Self::Color(_) => Ok(self),
            Self::Digit(d) => Self::digit(d),
        }
    }

    /// Kind name, "Color" or "Digit"
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Color(_) => "Color",
            Self::Digit(_) => "Digit",
        }
    }

    /// One-character representation
    #[must_use]
    pub fn short(self) -> char {
        match self {
            Self::Color(color) => color.letter(),
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
        }
    }
}

impl From<Color> for Symbol {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Digit(d) => write!(f, "{d}"),
        }
    }
}
