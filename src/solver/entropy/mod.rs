//! Information-theoretic guess metrics
//!
//! Shannon entropy and partition statistics for a guess over a candidate set.
//! Used for analysis and display; guess selection itself is minimax.

mod calculator;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
