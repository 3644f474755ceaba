//! Game settings
//!
//! One validated bundle of everything a session needs: which symbols are in
//! play, how long codes are, how many attempts are allowed and how much
//! inconsistent feedback is tolerated.

use crate::core::Alphabet;
use crate::error::GameError;
use std::fmt;

/// Which symbol family codes are built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolKind {
    #[default]
    Colors,
    Digits,
}

impl SymbolKind {
    /// Parse "colors"/"colours"/"digits" (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "colors" | "colours" | "color" | "colour" | "c" => Some(Self::Colors),
            "digits" | "digit" | "numbers" | "d" => Some(Self::Digits),
            _ => None,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Colors => "colors",
            Self::Digits => "digits",
        })
    }
}

/// How feedback mistakes are handled in computer-guesses mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameVariant {
    /// Any inconsistency found at the end is reported as cheating
    #[default]
    Standard,
    /// A limited number of inconsistencies is allowed
    AllowedCheating,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::AllowedCheating => "allowed cheating",
        })
    }
}

/// Validated game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    symbol_kind: SymbolKind,
    color_count: usize,
    digit_count: usize,
    code_length: usize,
    max_attempts: usize,
    variant: GameVariant,
    allowed_cheats: usize,
    seed: Option<u64>,
}

impl GameSettings {
    pub const DEFAULT_COLOR_COUNT: usize = 6;
    pub const DEFAULT_DIGIT_COUNT: usize = 10;
    pub const DEFAULT_CODE_LENGTH: usize = 4;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 12;
    pub const DEFAULT_ALLOWED_CHEATS: usize = 2;

    /// Build settings, checking every bound
    ///
    /// The allowance only applies to the `AllowedCheating` variant; a
    /// `Standard` game always tolerates zero inconsistencies.
    ///
    /// # Errors
    /// Returns `GameError::TooFewSymbols` or `GameError::SymbolOutOfRange` for
    /// a colour count outside 2-6 or digit count outside 2-10,
    /// `GameError::InvalidCodeLength` for a zero length and
    /// `GameError::InvalidMaxAttempts` for zero attempts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol_kind: SymbolKind,
        color_count: usize,
        digit_count: usize,
        code_length: usize,
        max_attempts: usize,
        variant: GameVariant,
        allowed_cheats: usize,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        // Both counts are checked even though only one is used
        Alphabet::colors(color_count)?;
        Alphabet::digits(digit_count)?;
        if code_length < 1 {
            return Err(GameError::InvalidCodeLength {
                length: code_length,
            });
        }
        if max_attempts < 1 {
            return Err(GameError::InvalidMaxAttempts { max_attempts });
        }

        let allowed_cheats = match variant {
            GameVariant::Standard => 0,
            GameVariant::AllowedCheating => allowed_cheats,
        };

        Ok(Self {
            symbol_kind,
            color_count,
            digit_count,
            code_length,
            max_attempts,
            variant,
            allowed_cheats,
            seed,
        })
    }

    /// Six colours, four positions, twelve attempts
    #[must_use]
    pub const fn create_default() -> Self {
        Self {
            symbol_kind: SymbolKind::Colors,
            color_count: Self::DEFAULT_COLOR_COUNT,
            digit_count: Self::DEFAULT_DIGIT_COUNT,
            code_length: Self::DEFAULT_CODE_LENGTH,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            variant: GameVariant::Standard,
            allowed_cheats: 0,
            seed: None,
        }
    }

    /// Ten digits, four positions, twelve attempts
    #[must_use]
    pub const fn create_digit_variant() -> Self {
        Self {
            symbol_kind: SymbolKind::Digits,
            ..Self::create_default()
        }
    }

    /// Default colours with the cheating allowance switched on
    #[must_use]
    pub const fn create_cheating_variant() -> Self {
        Self {
            variant: GameVariant::AllowedCheating,
            allowed_cheats: Self::DEFAULT_ALLOWED_CHEATS,
            ..Self::create_default()
        }
    }

    /// Alphabet for the configured symbol kind
    ///
    /// # Errors
    /// Only fails for counts that bypassed [`GameSettings::new`], which the
    /// private fields prevent.
    pub fn alphabet(&self) -> Result<Alphabet, GameError> {
        match self.symbol_kind {
            SymbolKind::Colors => Alphabet::colors(self.color_count),
            SymbolKind::Digits => Alphabet::digits(self.digit_count),
        }
    }

    #[inline]
    #[must_use]
    pub const fn symbol_kind(&self) -> SymbolKind {
        self.symbol_kind
    }

    #[inline]
    #[must_use]
    pub const fn color_count(&self) -> usize {
        self.color_count
    }

    #[inline]
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> GameVariant {
        self.variant
    }

    #[inline]
    #[must_use]
    pub const fn allowed_cheats(&self) -> usize {
        self.allowed_cheats
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::create_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    #[test]
    fn presets() {
        let settings = GameSettings::create_default();
        assert_eq!(settings.alphabet().unwrap().len(), 6);
        assert_eq!(settings.code_length(), 4);
        assert_eq!(settings.max_attempts(), 12);
        assert_eq!(settings.allowed_cheats(), 0);

        let digits = GameSettings::create_digit_variant();
        assert_eq!(digits.alphabet().unwrap().len(), 10);
        assert_eq!(digits.alphabet().unwrap().first(), Symbol::Digit(0));

        let cheating = GameSettings::create_cheating_variant();
        assert_eq!(cheating.variant(), GameVariant::AllowedCheating);
        assert_eq!(cheating.allowed_cheats(), 2);
    }

    #[test]
    fn bounds_are_validated() {
        let build = |colors, digits, length, attempts| {
            GameSettings::new(
                SymbolKind::Colors,
                colors,
                digits,
                length,
                attempts,
                GameVariant::Standard,
                0,
                None,
            )
        };

        assert!(build(6, 10, 4, 12).is_ok());
        assert!(matches!(build(1, 10, 4, 12), Err(GameError::TooFewSymbols { .. })));
        assert!(matches!(build(7, 10, 4, 12), Err(GameError::SymbolOutOfRange { .. })));
        assert!(matches!(build(6, 11, 4, 12), Err(GameError::SymbolOutOfRange { .. })));
        assert!(matches!(build(6, 10, 0, 12), Err(GameError::InvalidCodeLength { .. })));
        assert!(matches!(build(6, 10, 4, 0), Err(GameError::InvalidMaxAttempts { .. })));
    }

    #[test]
    fn standard_variant_tolerates_nothing() {
        let settings = GameSettings::new(
            SymbolKind::Digits,
            6,
            8,
            5,
            10,
            GameVariant::Standard,
            3,
            Some(9),
        )
        .unwrap();
        assert_eq!(settings.allowed_cheats(), 0);
        assert_eq!(settings.alphabet().unwrap().len(), 8);
        assert_eq!(settings.seed(), Some(9));
    }

    #[test]
    fn symbol_kind_names() {
        assert_eq!(SymbolKind::from_name("Colours"), Some(SymbolKind::Colors));
        assert_eq!(SymbolKind::from_name("digits"), Some(SymbolKind::Digits));
        assert_eq!(SymbolKind::from_name("hex"), None);
    }
}
