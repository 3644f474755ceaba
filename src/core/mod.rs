//! Core domain types for Mastermind
//!
//! Symbols, codes, alphabets, feedback scoring and attempts. Everything here is
//! pure and free of game state.

mod alphabet;
mod attempt;
mod code;
mod score;
mod symbol;

pub use alphabet::{Alphabet, CodeSpace};
pub use attempt::Attempt;
pub use code::Code;
pub use score::{GameResult, score};
pub use symbol::{Color, Symbol};
