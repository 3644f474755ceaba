//! Minimax-based guess selection
//!
//! Picks the guess that minimizes the worst-case remaining candidates, either
//! from an explicit pool or from a capped random sample of the candidates.

use super::calculator::calculate_max_remaining;
use crate::core::{Alphabet, Code};
use crate::error::GameError;
use rand::Rng;
use rayon::prelude::*;

/// Most candidate guesses scored per turn
pub const SAMPLE_SIZE: usize = 100;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the earliest guess
/// in the pool.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Code],
    candidates: &[Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|(_, max)| *max)
}

/// Minimax over a random sample of the candidates themselves
///
/// With at most [`SAMPLE_SIZE`] candidates every one is scored in order;
/// otherwise [`SAMPLE_SIZE`] distinct candidates are drawn uniformly. Each
/// sampled guess is scored against the whole candidate set.
#[must_use]
pub fn select_sampled_guess<'a, R: Rng + ?Sized>(
    candidates: &'a [Code],
    rng: &mut R,
) -> Option<(&'a Code, usize)> {
    let pool: Vec<&Code> = if candidates.len() <= SAMPLE_SIZE {
        candidates.iter().collect()
    } else {
        rand::seq::index::sample(rng, candidates.len(), SAMPLE_SIZE)
            .into_iter()
            .map(|i| &candidates[i])
            .collect()
    };

    select_best_guess(&pool, candidates)
}

/// Fixed opening guess
///
/// The first half of the positions (rounded up) get the alphabet's first
/// symbol, the rest its second symbol. For four colours this is Knuth's 1122.
///
/// # Errors
/// Returns `GameError::InvalidCodeLength` if `code_length` is zero.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Alphabet;
/// use mastermind_solver::solver::minimax::opening_guess;
///
/// let digits = Alphabet::digits(10).unwrap();
/// assert_eq!(opening_guess(&digits, 4).unwrap().to_string(), "0011");
/// assert_eq!(opening_guess(&digits, 5).unwrap().to_string(), "00011");
/// ```
pub fn opening_guess(alphabet: &Alphabet, code_length: usize) -> Result<Code, GameError> {
    if code_length == 0 {
        return Err(GameError::InvalidCodeLength {
            length: code_length,
        });
    }
    let symbols = alphabet.symbols();
    let first_half = code_length.div_ceil(2);

    Code::new(
        (0..code_length)
            .map(|i| if i < first_half { symbols[0] } else { symbols[1] })
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn digits(s: &str) -> Code {
        Code::parse(s, &Alphabet::digits(10).unwrap()).unwrap()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let bad = digits("99");
        let good = digits("12");
        let candidates = [digits("12"), digits("21"), digits("13"), digits("34")];

        let (best, max_remaining) = select_best_guess(&[&bad, &good], &candidates).unwrap();
        assert_eq!(best, &good);
        assert!(max_remaining < 4);
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        let a = digits("77");
        let b = digits("88");
        let candidates = [digits("12")];

        let (best, max) = select_best_guess(&[&a, &b], &candidates).unwrap();
        assert_eq!(best, &a);
        assert_eq!(max, 1);
    }

    #[test]
    fn empty_pool_returns_none() {
        assert!(select_best_guess(&[], &[digits("12")]).is_none());
    }

    #[test]
    fn small_sets_scored_exhaustively() {
        let alphabet = Alphabet::digits(3).unwrap();
        let candidates: Vec<Code> = alphabet.codes(2).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let (best, max) = select_sampled_guess(&candidates, &mut rng).unwrap();

        // Same answer as scoring the whole pool in order
        let pool: Vec<&Code> = candidates.iter().collect();
        let (expected, expected_max) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best, expected);
        assert_eq!(max, expected_max);
    }

    #[test]
    fn large_sets_are_sampled_from_candidates() {
        let alphabet = Alphabet::colors(6).unwrap();
        let candidates: Vec<Code> = alphabet.codes(4).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let (best, max) = select_sampled_guess(&candidates, &mut rng).unwrap();
        assert!(candidates.contains(best));
        assert!(max < candidates.len());
    }

    #[test]
    fn seeded_sampling_is_repeatable() {
        let alphabet = Alphabet::colors(6).unwrap();
        let candidates: Vec<Code> = alphabet.codes(4).collect();

        let first = select_sampled_guess(&candidates, &mut StdRng::seed_from_u64(9));
        let second = select_sampled_guess(&candidates, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn opening_guess_split() {
        let colors = Alphabet::colors(6).unwrap();
        assert_eq!(opening_guess(&colors, 4).unwrap().to_string(), "RRYY");
        assert_eq!(opening_guess(&colors, 3).unwrap().to_string(), "RRY");
        assert_eq!(opening_guess(&colors, 1).unwrap().to_string(), "R");
        assert!(opening_guess(&colors, 0).is_err());
    }
}
