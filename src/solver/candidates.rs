//! Candidate set tracking
//!
//! The set of codes still consistent with every piece of feedback seen so far.

use crate::core::{Alphabet, Code, GameResult};
use tracing::debug;

/// Codes that could still be the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Every code of `length` positions over `alphabet`
    #[must_use]
    pub fn full(alphabet: &Alphabet, length: usize) -> Self {
        let codes: Vec<Code> = alphabet.codes(length).collect();
        debug!(
            candidates = codes.len(),
            symbols = alphabet.len(),
            length,
            "enumerated code space"
        );
        Self { codes }
    }

    /// Keep only codes `c` with `score(guess, c) == result`
    ///
    /// Returns the number of codes removed.
    pub fn retain_consistent(&mut self, guess: &Code, result: GameResult) -> usize {
        let before = self.codes.len();
        self.codes
            .retain(|code| code.len() == guess.len() && GameResult::calculate(guess, code) == result);
        let removed = before - self.codes.len();
        debug!(
            guess = %guess,
            %result,
            before,
            after = self.codes.len(),
            "filtered candidates"
        );
        removed
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Code> {
        self.codes.get(index)
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn full_set_size() {
        let alphabet = Alphabet::colors(6).unwrap();
        assert_eq!(CandidateSet::full(&alphabet, 4).len(), 1296);

        let digits = Alphabet::digits(10).unwrap();
        assert_eq!(CandidateSet::full(&digits, 3).len(), 1000);
    }

    #[test]
    fn filtering_keeps_the_secret() {
        let alphabet = Alphabet::colors(6).unwrap();
        let secret = Code::parse("RGBB", &alphabet).unwrap();
        let guess = Code::parse("RRGG", &alphabet).unwrap();
        let result = score(&guess, &secret).unwrap();

        let mut set = CandidateSet::full(&alphabet, 4);
        let removed = set.retain_consistent(&guess, result);

        assert!(removed > 0);
        assert!(set.contains(&secret));
        assert!(
            set.iter()
                .all(|code| score(&guess, code).unwrap() == result)
        );
    }

    #[test]
    fn perfect_feedback_leaves_one() {
        let alphabet = Alphabet::digits(4).unwrap();
        let guess = Code::parse("0123", &alphabet).unwrap();

        let mut set = CandidateSet::full(&alphabet, 4);
        set.retain_consistent(&guess, GameResult::perfect(4));

        assert_eq!(set.as_slice(), &[guess]);
    }

    #[test]
    fn impossible_feedback_empties_set() {
        let alphabet = Alphabet::digits(3).unwrap();
        let guess = Code::parse("012", &alphabet).unwrap();

        let mut set = CandidateSet::full(&alphabet, 3);
        // Two exact and one misplaced cannot happen
        set.retain_consistent(&guess, GameResult::new(2, 1));

        assert!(set.is_empty());
        assert!(set.first().is_none());
    }

    #[test]
    fn clear_empties() {
        let alphabet = Alphabet::digits(2).unwrap();
        let mut set = CandidateSet::full(&alphabet, 2);
        set.clear();
        assert!(set.is_empty());
    }
}
