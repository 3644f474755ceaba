//! Computer-guesses CLI mode
//!
//! The player thinks of a secret and types it in once, so the engine can audit
//! the feedback afterwards. The strategy then guesses and the player reports
//! feedback for each guess.
//!
//! In the standard variant every answer is taken at face value and audited at
//! the end. In the allowed-cheating variant the audit runs after every answer;
//! once the allowance is used up, feedback is computed from the secret instead
//! of being asked for.

use super::simple::prompt;
use crate::config::{GameSettings, GameVariant};
use crate::core::{Code, GameResult, score};
use crate::game::{ComputerGuessingGame, GameState};
use crate::output::formatters::{format_code, result_to_pegs};
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a computer-guesses session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub state: GameState,
    pub attempts: usize,
    pub secret: Option<Code>,
    pub detected_cheats: usize,
    pub cheating_detected: bool,
}

/// Run the computer-guesses mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or invalid settings.
pub fn run_guess<S: Strategy>(strategy: S, settings: &GameSettings) -> Result<GuessOutcome> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_guess_with(strategy, settings, &mut stdin.lock(), &mut stdout)
}

/// Run the computer-guesses mode on arbitrary streams
///
/// End of input surrenders the game.
///
/// # Errors
///
/// Returns an error on I/O failure or invalid settings.
pub fn run_guess_with<S: Strategy, R: BufRead, W: Write>(
    strategy: S,
    settings: &GameSettings,
    input: &mut R,
    output: &mut W,
) -> Result<GuessOutcome> {
    let alphabet = settings.alphabet()?;
    let code_length = settings.code_length();
    let mut game = ComputerGuessingGame::new(
        strategy,
        alphabet,
        code_length,
        settings.max_attempts(),
        settings.allowed_cheats(),
    )?;

    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        " {} {}",
        "I'LL BREAK YOUR CODE".bright_cyan().bold(),
        format!("({} variant)", settings.variant()).bright_black()
    )?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;

    let Some(secret) = read_secret(&game, input, output)? else {
        game.player_surrenders()?;
        return Ok(outcome(&game, None));
    };

    writeln!(
        output,
        "\nAnswer each guess with two numbers: exact matches, then right symbols in the wrong place."
    )?;
    writeln!(output, "Example: '1 2'. Type 'q' to give up.\n")?;

    let audit_each_turn = settings.variant() == GameVariant::AllowedCheating;
    let mut allowance_used = false;

    while game.state() == GameState::InProgress {
        let guess = game.computer_guess()?;
        writeln!(
            output,
            "Attempt {}/{}: {}   {}",
            game.current_attempt(),
            game.max_attempts(),
            format_code(&guess),
            format!("({} candidates)", game.strategy().candidates().len()).bright_black()
        )?;

        let result = if allowance_used {
            let result = score(&guess, &secret)?;
            writeln!(output, "  Feedback computed for you: {result}")?;
            result
        } else {
            match read_feedback(code_length, input, output)? {
                Some(result) => result,
                None => {
                    game.player_surrenders()?;
                    break;
                }
            }
        };

        game.provide_computer_feedback(&guess, result)?;
        writeln!(output, "  {}", result_to_pegs(result, code_length))?;

        if audit_each_turn && !allowance_used {
            let before = game.detected_cheats();
            game.check_for_cheating(Some(&secret))?;
            if game.detected_cheats() > before {
                writeln!(
                    output,
                    "{}",
                    format!(
                        "  That answer does not match your secret ({}/{} allowed)",
                        game.detected_cheats(),
                        game.allowed_cheats()
                    )
                    .yellow()
                )?;
            }

            if game.detected_cheats() >= game.allowed_cheats() {
                allowance_used = true;
                writeln!(
                    output,
                    "{}",
                    "  No more inconsistent answers allowed, I will score my own guesses."
                        .yellow()
                )?;
            }
        }
    }

    game.check_for_cheating(Some(&secret))?;
    report(&game, &secret, output)?;
    Ok(outcome(&game, Some(secret)))
}

fn read_secret<S: Strategy, R: BufRead, W: Write>(
    game: &ComputerGuessingGame<S>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Code>> {
    let letters: String = game
        .alphabet()
        .symbols()
        .iter()
        .map(|symbol| symbol.short())
        .collect();
    let label = format!(
        "Your secret ({} symbols from {letters}, only used to check your answers)",
        game.code_length()
    );

    loop {
        let Some(line) = prompt(input, output, &label)? else {
            return Ok(None);
        };
        match Code::parse(&line, game.alphabet()) {
            Ok(code) if code.len() == game.code_length() => return Ok(Some(code)),
            Ok(code) => writeln!(
                output,
                "{}",
                format!("Need {} symbols, got {}", game.code_length(), code.len()).red()
            )?,
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }
}

/// `None` means the player gave up or input ended
fn read_feedback<R: BufRead, W: Write>(
    code_length: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Option<GameResult>> {
    loop {
        let Some(line) = prompt(input, output, "  Feedback")? else {
            return Ok(None);
        };
        if matches!(line.as_str(), "q" | "quit" | "exit") {
            return Ok(None);
        }
        match GameResult::parse(&line, code_length) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => writeln!(output, "{}", format!("  {e}").red())?,
        }
    }
}

fn report<S: Strategy, W: Write>(
    game: &ComputerGuessingGame<S>,
    secret: &Code,
    output: &mut W,
) -> Result<()> {
    writeln!(output)?;
    match game.state() {
        GameState::Won => writeln!(
            output,
            "{}",
            format!("Broke your code in {} attempts!", game.attempts().len())
                .green()
                .bold()
        )?,
        GameState::Lost => writeln!(output, "{}", "I ran out of attempts.".red().bold())?,
        GameState::Surrendered => writeln!(output, "{}", "Game abandoned.".yellow().bold())?,
        GameState::InProgress => {}
    }

    if game.cheating_detected() {
        writeln!(
            output,
            "{}",
            format!(
                "Cheating detected: {} answers do not match your secret {}",
                game.detected_cheats(),
                secret
            )
            .red()
            .bold()
        )?;
    } else if game.detected_cheats() > 0 {
        writeln!(
            output,
            "Inconsistent answers: {} (within the allowance of {})",
            game.detected_cheats(),
            game.allowed_cheats()
        )?;
    } else {
        writeln!(output, "All answers were consistent with {secret}.")?;
    }
    Ok(())
}

fn outcome<S: Strategy>(game: &ComputerGuessingGame<S>, secret: Option<Code>) -> GuessOutcome {
    GuessOutcome {
        state: game.state(),
        attempts: game.attempts().len(),
        secret,
        detected_cheats: game.detected_cheats(),
        cheating_detected: game.cheating_detected(),
    }
}
