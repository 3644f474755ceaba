//! Mastermind Solver
//!
//! A Mastermind engine: feedback scoring, game state machines for both
//! directions of play, consistent-random and minimax guessing strategies, and
//! a check that reported feedback agrees with a revealed secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Alphabet, Code, score};
//!
//! let colors = Alphabet::colors(6).unwrap();
//! let guess = Code::parse("RRGB", &colors).unwrap();
//! let secret = Code::parse("RGBB", &colors).unwrap();
//!
//! let result = score(&guess, &secret).unwrap();
//! assert_eq!(result.exact(), 2);
//! assert_eq!(result.wrong_position(), 1);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game state machines
pub mod game;

// Guessing strategies
pub mod solver;

// Session settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
