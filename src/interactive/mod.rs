//! Interactive TUI for the computer-guesses game

mod app;
mod rendering;

pub use app::{App, GuessInfo, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
