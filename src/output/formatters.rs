//! Formatting utilities for terminal output

use crate::core::{Code, Color, GameResult, Symbol};
use colored::{ColoredString, Colorize};

/// Peg shown for an exact match
pub const EXACT_PEG: char = '●';
/// Peg shown for a right symbol in the wrong position
pub const WRONG_POSITION_PEG: char = '○';
/// Placeholder for positions with no match
pub const EMPTY_PEG: char = '·';

/// One symbol in its terminal colour
#[must_use]
pub fn colorize_symbol(symbol: Symbol) -> ColoredString {
    let text = symbol.short().to_string();
    match symbol {
        Symbol::Color(Color::Red) => text.red().bold(),
        Symbol::Color(Color::Yellow) => text.yellow().bold(),
        Symbol::Color(Color::Green) => text.green().bold(),
        Symbol::Color(Color::Blue) => text.blue().bold(),
        Symbol::Color(Color::Magenta) => text.magenta().bold(),
        Symbol::Color(Color::Cyan) => text.cyan().bold(),
        Symbol::Digit(_) => text.bright_white().bold(),
    }
}

/// A code with each symbol coloured, separated by spaces
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|&symbol| colorize_symbol(symbol).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as a row of pegs, one per position
#[must_use]
pub fn result_to_pegs(result: GameResult, code_length: usize) -> String {
    let mut pegs = String::with_capacity(code_length * 3);
    let empty = code_length.saturating_sub(result.exact() + result.wrong_position());

    pegs.extend(std::iter::repeat_n(EXACT_PEG, result.exact()));
    pegs.extend(std::iter::repeat_n(WRONG_POSITION_PEG, result.wrong_position()));
    pegs.extend(std::iter::repeat_n(EMPTY_PEG, empty));
    pegs
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled against the best possible split
///
/// A guess over a code of length `code_length` can produce at most
/// `(L + 1)(L + 2) / 2 - 1` distinct feedback values.
#[must_use]
pub fn entropy_bar(entropy: f64, code_length: usize, width: usize) -> String {
    let outcomes = (code_length + 1) * (code_length + 2) / 2 - 1;
    let max_entropy = (outcomes.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    #[test]
    fn pegs_fill_every_position() {
        assert_eq!(result_to_pegs(GameResult::new(0, 0), 4), "····");
        assert_eq!(result_to_pegs(GameResult::new(2, 1), 4), "●●○·");
        assert_eq!(result_to_pegs(GameResult::perfect(5), 5), "●●●●●");
    }

    #[test]
    fn code_keeps_symbol_order() {
        colored::control::set_override(false);
        let code = Code::parse("RGBY", &Alphabet::colors(6).unwrap()).unwrap();
        assert_eq!(format_code(&code), "R G B Y");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_saturates() {
        // 14 outcomes for length 4
        let bar = entropy_bar(14f64.log2(), 4, 8);
        assert_eq!(bar, "████████");
    }
}
