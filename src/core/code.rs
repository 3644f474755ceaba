//! Code representation
//!
//! A code is an immutable, non-empty, ordered sequence of symbols. Both secrets
//! and guesses are codes.

use super::{Alphabet, Symbol};
use crate::error::GameError;
use std::fmt;

/// Fixed-length sequence of symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<Symbol>,
}

impl Code {
    /// Create a code from its symbols
    ///
    /// # Errors
    /// Returns `GameError::EmptyCode` if `symbols` is empty and
    /// `GameError::SymbolOutOfRange` for a digit above 9.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Color, Symbol};
    ///
    /// let code = Code::new(vec![Symbol::Color(Color::Red), Symbol::Color(Color::Blue)]).unwrap();
    /// assert_eq!(code.len(), 2);
    /// assert!(Code::new(vec![]).is_err());
    /// ```
    pub fn new(symbols: impl Into<Vec<Symbol>>) -> Result<Self, GameError> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(GameError::EmptyCode);
        }
        for symbol in &symbols {
            symbol.validate()?;
        }
        Ok(Self { symbols })
    }

    /// Code of `length` copies of one symbol
    ///
    /// # Errors
    /// Returns `GameError::InvalidCodeLength` if `length` is zero and
    /// `GameError::SymbolOutOfRange` for a digit above 9.
    pub fn repeated(symbol: Symbol, length: usize) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidCodeLength { length });
        }
        symbol.validate()?;
        Ok(Self {
            symbols: vec![symbol; length],
        })
    }

    /// Build from a vector already known to be non-empty
    pub(crate) fn from_vec_unchecked(symbols: Vec<Symbol>) -> Self {
        debug_assert!(!symbols.is_empty(), "code must not be empty");
        Self { symbols }
    }

    /// Parse user input against an alphabet
    ///
    /// One character per position: colour letters (R, Y, G, B, M, C) for colour
    /// alphabets, digits for digit alphabets. Whitespace is ignored and letters
    /// are case-insensitive. Every symbol must belong to `alphabet`.
    ///
    /// # Errors
    /// Returns `GameError::Parse` on an unknown character or a symbol missing
    /// from the alphabet, and `GameError::EmptyCode` for blank input.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Code};
    ///
    /// let colors = Alphabet::colors(6).unwrap();
    /// let code = Code::parse("rygb", &colors).unwrap();
    /// assert_eq!(code.to_string(), "RYGB");
    ///
    /// let digits = Alphabet::digits(10).unwrap();
    /// assert_eq!(Code::parse("1 2 2", &digits).unwrap().to_string(), "122");
    /// ```
    pub fn parse(input: &str, alphabet: &Alphabet) -> Result<Self, GameError> {
        let symbols = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| {
                alphabet
                    .symbol_for_char(ch)
                    .ok_or_else(|| GameError::parse(format!("'{ch}' is not a valid symbol")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(symbols)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, codes hold at least one symbol
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbol at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.short())?;
        }
        Ok(())
    }
}
