//! Simple interactive CLI mode
//!
//! Text-based human-guesses game: the engine picks a secret and scores the
//! player's guesses.

use crate::config::GameSettings;
use crate::core::{Alphabet, Code};
use crate::game::{Game, GameState};
use crate::output::formatters::{format_code, result_to_pegs};
use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple(settings: &GameSettings) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(settings, &mut stdin.lock(), &mut stdout)
}

/// Run the simple interactive mode on arbitrary streams
///
/// End of input surrenders the running game and stops.
///
/// # Errors
///
/// Returns an error if there's an I/O error or the settings cannot produce an
/// alphabet.
pub fn run_simple_with<R: BufRead, W: Write>(
    settings: &GameSettings,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let alphabet = settings.alphabet()?;
    let mut rng = settings
        .seed()
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(output, "{}", "  M A S T E R M I N D".bright_cyan().bold())?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    print_rules(settings, &alphabet, output)?;

    loop {
        let secret = alphabet.random_code(settings.code_length(), &mut rng)?;
        let mut game = Game::new(secret, settings.max_attempts(), settings.code_length())?;

        if !play_round(&mut game, &alphabet, input, output)? {
            return Ok(());
        }

        match prompt(input, output, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => writeln!(output, "\nNew game started!\n")?,
            _ => {
                writeln!(output, "\nThanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn print_rules<W: Write>(settings: &GameSettings, alphabet: &Alphabet, output: &mut W) -> Result<()> {
    let symbols: Vec<String> = alphabet
        .symbols()
        .iter()
        .map(|symbol| format!("{} ({symbol})", symbol.short()))
        .collect();

    writeln!(
        output,
        "\nI picked a secret of {} symbols. You have {} attempts.",
        settings.code_length(),
        settings.max_attempts()
    )?;
    writeln!(output, "Symbols: {}", symbols.join(", "))?;
    writeln!(
        output,
        "Feedback: ● right symbol in the right place, ○ right symbol elsewhere"
    )?;
    writeln!(output, "Type 'q' to give up.\n")?;
    Ok(())
}

/// Play one game; returns `false` when input ran out
fn play_round<R: BufRead, W: Write>(
    game: &mut Game,
    alphabet: &Alphabet,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    while game.state() == GameState::InProgress {
        let label = format!("Attempt {}/{}", game.current_attempt(), game.max_attempts());
        let Some(line) = prompt(input, output, &label)? else {
            game.surrender()?;
            report_outcome(game, output)?;
            return Ok(false);
        };

        if matches!(line.as_str(), "q" | "quit" | "exit") {
            game.surrender()?;
            break;
        }

        let guess = match Code::parse(&line, alphabet) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(output, "{}", format!("Invalid guess: {e}").red())?;
                continue;
            }
        };

        match game.evaluate_attempt(&guess) {
            Ok(result) => writeln!(
                output,
                "  {}   {}  {}",
                format_code(&guess),
                result_to_pegs(result, game.code_length()),
                result.to_string().bright_black()
            )?,
            Err(e) => writeln!(output, "{}", format!("Invalid guess: {e}").red())?,
        }
    }

    report_outcome(game, output)?;
    Ok(true)
}

fn report_outcome<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    let secret = game.secret_code()?;
    writeln!(output)?;
    match game.state() {
        GameState::Won => writeln!(
            output,
            "{}",
            format!("Solved in {} attempts!", game.attempts().len())
                .green()
                .bold()
        )?,
        GameState::Lost => writeln!(output, "{}", "Out of attempts.".red().bold())?,
        GameState::Surrendered => writeln!(output, "{}", "You gave up.".yellow().bold())?,
        GameState::InProgress => {}
    }
    writeln!(output, "The secret was: {}\n", format_code(secret))?;
    Ok(())
}

/// Print `label`, read one trimmed lowercase line; `None` on end of input
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
