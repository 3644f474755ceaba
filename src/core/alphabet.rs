//! Symbol alphabets and the code space they span

use super::{Code, Color, Symbol};
use crate::error::GameError;
use rand::Rng;

/// Ordered set of at least two distinct symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Create an alphabet from explicit symbols
    ///
    /// # Errors
    /// Returns `GameError::TooFewSymbols` for fewer than two symbols and
    /// `GameError::DuplicateSymbol` if a symbol appears twice.
    /// Digits above 9 give `GameError::SymbolOutOfRange`.
    pub fn new(symbols: impl Into<Vec<Symbol>>) -> Result<Self, GameError> {
        let symbols = symbols.into();
        if symbols.len() < 2 {
            return Err(GameError::TooFewSymbols {
                count: symbols.len(),
            });
        }
        for (i, symbol) in symbols.iter().enumerate() {
            symbol.validate()?;
            if symbols[..i].contains(symbol) {
                return Err(GameError::DuplicateSymbol {
                    symbol: symbol.to_string(),
                });
            }
        }
        Ok(Self { symbols })
    }

    /// The first `count` colours (2-6)
    ///
    /// # Errors
    /// Returns `GameError::TooFewSymbols` below 2 and
    /// `GameError::SymbolOutOfRange` above 6.
    pub fn colors(count: usize) -> Result<Self, GameError> {
        if count > Color::ALL.len() {
            return Err(GameError::SymbolOutOfRange {
                message: format!("at most {} colours available, got {count}", Color::ALL.len()),
            });
        }
        Self::new(
            Color::ALL[..count]
                .iter()
                .copied()
                .map(Symbol::Color)
                .collect::<Vec<_>>(),
        )
    }

    /// Digits `0..count` (2-10)
    ///
    /// # Errors
    /// Returns `GameError::TooFewSymbols` below 2 and
    /// `GameError::SymbolOutOfRange` above 10.
    pub fn digits(count: usize) -> Result<Self, GameError> {
        let max = usize::from(Symbol::MAX_DIGIT) + 1;
        if count > max {
            return Err(GameError::SymbolOutOfRange {
                message: format!("at most {max} digits available, got {count}"),
            });
        }
        Self::new((0..count as u8).map(Symbol::Digit).collect::<Vec<_>>())
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, alphabets hold at least two symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// First symbol, used for fallback guesses
    #[inline]
    #[must_use]
    pub fn first(&self) -> Symbol {
        self.symbols[0]
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol in this alphabet whose one-character form is `ch`
    #[must_use]
    pub fn symbol_for_char(&self, ch: char) -> Option<Symbol> {
        let upper = ch.to_ascii_uppercase();
        self.symbols.iter().copied().find(|s| s.short() == upper)
    }

    /// Number of codes of `length` positions, saturating at `usize::MAX`
    #[must_use]
    pub fn code_count(&self, length: usize) -> usize {
        (0..length).fold(1usize, |acc, _| acc.saturating_mul(self.len()))
    }

    /// Lazily enumerate every code of `length` positions
    ///
    /// Codes come out in lexicographic order of symbol indices, so the first
    /// code is the first symbol repeated.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::digits(2).unwrap();
    /// let codes: Vec<String> = alphabet.codes(2).map(|c| c.to_string()).collect();
    /// assert_eq!(codes, ["00", "01", "10", "11"]);
    /// ```
    #[must_use]
    pub fn codes(&self, length: usize) -> CodeSpace<'_> {
        CodeSpace {
            alphabet: self,
            indices: vec![0; length],
            done: length == 0,
        }
    }

    /// Uniformly random code of `length` positions
    ///
    /// # Errors
    /// Returns `GameError::InvalidCodeLength` if `length` is zero.
    pub fn random_code<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Code, GameError> {
        if length == 0 {
            return Err(GameError::InvalidCodeLength { length });
        }
        let symbols = (0..length)
            .map(|_| self.symbols[rng.random_range(0..self.len())])
            .collect::<Vec<_>>();
        Ok(Code::from_vec_unchecked(symbols))
    }
}

/// Iterator over the Cartesian product of an alphabet
///
/// Works like an odometer over symbol indices, never materialising the whole
/// space.
pub struct CodeSpace<'a> {
    alphabet: &'a Alphabet,
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for CodeSpace<'_> {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.done {
            return None;
        }

        let code = Code::from_vec_unchecked(
            self.indices
                .iter()
                .map(|&i| self.alphabet.symbols[i])
                .collect(),
        );

        // Advance, rightmost position fastest
        let base = self.alphabet.len();
        let mut position = self.indices.len();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            self.indices[position] += 1;
            if self.indices[position] < base {
                break;
            }
            self.indices[position] = 0;
        }

        Some(code)
    }
}
