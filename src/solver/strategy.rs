//! Guess generation strategies
//!
//! Defines the Strategy trait and the two concrete solvers. Both keep a
//! candidate set that shrinks with every piece of feedback; they differ in how
//! they pick the next guess from it.

use super::CandidateSet;
use super::minimax::{opening_guess, select_sampled_guess};
use crate::core::{Alphabet, Attempt, Code, GameResult};
use crate::error::GameError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// A codebreaker that proposes guesses and learns from feedback
pub trait Strategy {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Propose the next guess
    ///
    /// An empty `history` starts a fresh game and re-enumerates the candidate
    /// set. Inconsistent feedback never makes this fail: with no candidates
    /// left, the first symbol repeated is returned.
    ///
    /// # Errors
    /// Returns `GameError::InvalidCodeLength` if `code_length` is zero.
    fn generate_guess(
        &mut self,
        history: &[Attempt],
        alphabet: &Alphabet,
        code_length: usize,
    ) -> Result<Code, GameError>;

    /// Drop every candidate that would not have produced `result` for `guess`
    fn update_feedback(&mut self, guess: &Code, result: GameResult);

    /// Forget all candidates and reseed the random source
    fn reset(&mut self);

    /// Codes still considered possible
    fn candidates(&self) -> &CandidateSet;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// Uniform random pick among consistent codes
    RandomConsistent(RandomConsistentStrategy),
    /// Sampled minimax filtering (default)
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::RandomConsistent(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }

    fn generate_guess(
        &mut self,
        history: &[Attempt],
        alphabet: &Alphabet,
        code_length: usize,
    ) -> Result<Code, GameError> {
        match self {
            Self::RandomConsistent(s) => s.generate_guess(history, alphabet, code_length),
            Self::Minimax(s) => s.generate_guess(history, alphabet, code_length),
        }
    }

    fn update_feedback(&mut self, guess: &Code, result: GameResult) {
        match self {
            Self::RandomConsistent(s) => s.update_feedback(guess, result),
            Self::Minimax(s) => s.update_feedback(guess, result),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::RandomConsistent(s) => s.reset(),
            Self::Minimax(s) => s.reset(),
        }
    }

    fn candidates(&self) -> &CandidateSet {
        match self {
            Self::RandomConsistent(s) => s.candidates(),
            Self::Minimax(s) => s.candidates(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "brute-force", "minimax", "filtering", "knuth".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "random" | "brute-force" | "bruteforce" => {
                Self::RandomConsistent(RandomConsistentStrategy::new(seed))
            }
            _ => Self::Minimax(MinimaxStrategy::new(seed)),
        }
    }
}

/// Random source that can be rewound to its seed
#[derive(Debug)]
struct Reseedable {
    seed: Option<u64>,
    rng: StdRng,
}

impl Reseedable {
    fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            rng: Self::build(seed),
        }
    }

    fn reseed(&mut self) {
        self.rng = Self::build(self.seed);
    }

    fn build(seed: Option<u64>) -> StdRng {
        seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

fn fallback_guess(alphabet: &Alphabet, code_length: usize) -> Result<Code, GameError> {
    Code::repeated(alphabet.first(), code_length)
}

fn filter_candidates(candidates: &mut CandidateSet, guess: &Code, result: GameResult) {
    candidates.retain_consistent(guess, result);
    if candidates.is_empty() {
        warn!(guess = %guess, %result, "feedback is inconsistent with every code");
    }
}

/// Uniform random pick among the codes still consistent with all feedback
///
/// Simple and unbiased; averages a little under five guesses on the classic
/// four-peg, six-colour board.
#[derive(Debug)]
pub struct RandomConsistentStrategy {
    candidates: CandidateSet,
    random: Reseedable,
}

impl RandomConsistentStrategy {
    /// Create the strategy; `Some(seed)` makes every game replayable
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            candidates: CandidateSet::new(),
            random: Reseedable::new(seed),
        }
    }
}

impl Default for RandomConsistentStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Strategy for RandomConsistentStrategy {
    fn name(&self) -> &'static str {
        "Random consistent"
    }

    fn generate_guess(
        &mut self,
        history: &[Attempt],
        alphabet: &Alphabet,
        code_length: usize,
    ) -> Result<Code, GameError> {
        if code_length == 0 {
            return Err(GameError::InvalidCodeLength {
                length: code_length,
            });
        }
        if history.is_empty() {
            self.candidates = CandidateSet::full(alphabet, code_length);
        }

        match self.candidates.as_slice().choose(&mut self.random.rng) {
            Some(code) => Ok(code.clone()),
            None => {
                debug!("no candidates left, using fallback guess");
                fallback_guess(alphabet, code_length)
            }
        }
    }

    fn update_feedback(&mut self, guess: &Code, result: GameResult) {
        filter_candidates(&mut self.candidates, guess, result);
    }

    fn reset(&mut self) {
        self.candidates.clear();
        self.random.reseed();
    }

    fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}

/// Knuth-style minimax filtering
///
/// Opens with a fixed split guess, then scores a capped random sample of the
/// candidates by the worst-case partition they leave and plays the smallest.
#[derive(Debug)]
pub struct MinimaxStrategy {
    candidates: CandidateSet,
    random: Reseedable,
}

impl MinimaxStrategy {
    /// Create the strategy; `Some(seed)` makes every game replayable
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            candidates: CandidateSet::new(),
            random: Reseedable::new(seed),
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "Minimax filtering (Knuth)"
    }

    fn generate_guess(
        &mut self,
        history: &[Attempt],
        alphabet: &Alphabet,
        code_length: usize,
    ) -> Result<Code, GameError> {
        if history.is_empty() {
            let opening = opening_guess(alphabet, code_length)?;
            self.candidates = CandidateSet::full(alphabet, code_length);
            return Ok(opening);
        }

        match self.candidates.len() {
            0 => {
                debug!("no candidates left, using fallback guess");
                fallback_guess(alphabet, code_length)
            }
            1 => Ok(self.candidates.as_slice()[0].clone()),
            _ => match select_sampled_guess(self.candidates.as_slice(), &mut self.random.rng) {
                Some((best, worst_case)) => {
                    debug!(
                        guess = %best,
                        worst_case,
                        candidates = self.candidates.len(),
                        "minimax pick"
                    );
                    Ok(best.clone())
                }
                None => fallback_guess(alphabet, code_length),
            },
        }
    }

    fn update_feedback(&mut self, guess: &Code, result: GameResult) {
        filter_candidates(&mut self.candidates, guess, result);
    }

    fn reset(&mut self) {
        self.candidates.clear();
        self.random.reseed();
    }

    fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }
}
