//! Game lifecycle states

use std::fmt;

/// Lifecycle of a game
///
/// `InProgress` is the only non-terminal state; a game never leaves a terminal
/// state except through an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
    Surrendered,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "InProgress",
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::Surrendered => "Surrendered",
        })
    }
}
