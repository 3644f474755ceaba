//! Game state machines
//!
//! [`Game`] is the human-guesses mode, where the engine holds the secret.
//! [`ComputerGuessingGame`] is the computer-guesses mode, where a strategy
//! guesses and someone else reports feedback.

mod computer;
mod player;
mod state;

pub use computer::ComputerGuessingGame;
pub use player::Game;
pub use state::GameState;
