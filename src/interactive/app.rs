//! TUI application state and logic

use crate::config::GameSettings;
use crate::core::{Code, GameResult};
use crate::error::GameError;
use crate::game::{ComputerGuessingGame, GameState};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Strategy, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: ComputerGuessingGame<StrategyType>,
    pub settings: GameSettings,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub secret: Option<Code>,
    pub current_guess: Option<GuessInfo>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the secret (shown masked)
    Secret,
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub result: GameResult,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub code: Code,
    pub candidates: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub cheated_games: usize,
}

impl App {
    /// Build the app from validated settings
    ///
    /// # Errors
    /// Returns an error if the settings cannot produce a game.
    pub fn new(strategy: StrategyType, settings: GameSettings) -> Result<Self, GameError> {
        let game = ComputerGuessingGame::new(
            strategy,
            settings.alphabet()?,
            settings.code_length(),
            settings.max_attempts(),
            settings.allowed_cheats(),
        )?;

        let mut app = Self {
            game,
            settings,
            input_mode: InputMode::Secret,
            input_buffer: String::new(),
            secret: None,
            current_guess: None,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Think of a secret code and type it in. Nobody sees it.", MessageStyle::Info);
        Ok(app)
    }

    /// Take the typed secret and ask the strategy for its first guess
    pub fn handle_secret(&mut self, input: &str) {
        match Code::parse(input, self.game.alphabet()) {
            Ok(code) if code.len() == self.game.code_length() => {
                self.secret = Some(code);
                self.input_mode = InputMode::Feedback;
                self.input_buffer.clear();
                self.add_message(
                    "Secret locked in. Report feedback as 'exact wrong', e.g. '1 2'.",
                    MessageStyle::Info,
                );
                self.compute_suggestion();
            }
            Ok(code) => self.add_message(
                &format!("Need {} symbols, got {}", self.game.code_length(), code.len()),
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.game.computer_guess() {
            Ok(code) => {
                let candidates = self.game.strategy().candidates();
                let metrics = calculate_metrics(&code, candidates.as_slice());
                self.current_guess = Some(GuessInfo {
                    code,
                    candidates: candidates.len(),
                    entropy: metrics.entropy,
                    expected_remaining: metrics.expected_remaining,
                    max_partition: metrics.max_partition,
                });
            }
            Err(e) => {
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Re-check every answer against the locked-in secret
    fn audit_answers(&mut self) {
        if let Err(e) = self.game.check_for_cheating(self.secret.as_ref()) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let result = match GameResult::parse(feedback, self.game.code_length()) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        let Some(guess_info) = self.current_guess.take() else {
            return;
        };

        if let Err(e) = self.game.provide_computer_feedback(&guess_info.code, result) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            self.current_guess = Some(guess_info);
            return;
        }
        self.input_buffer.clear();

        let candidates_after = self.game.strategy().candidates().len();
        self.history.push(HistoryEntry {
            guess: guess_info.code,
            result,
            entropy: guess_info.entropy,
            candidates_before: guess_info.candidates,
            candidates_after,
        });

        let before = self.game.detected_cheats();
        self.audit_answers();
        if self.game.detected_cheats() > before {
            self.add_message(
                &format!(
                    "That answer does not match your secret ({} so far)",
                    self.game.detected_cheats()
                ),
                MessageStyle::Warning,
            );
        }

        match self.game.state() {
            GameState::InProgress => {
                if candidates_after == 0 {
                    self.add_message(
                        "No code fits those answers. I'll keep guessing anyway.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{candidates_after} candidates remaining"),
                        MessageStyle::Info,
                    );
                }
                self.compute_suggestion();
            }
            GameState::Won => {
                let attempts = self.history.len();
                self.add_message(
                    &format!("Broke your code in {attempts} attempts!"),
                    MessageStyle::Success,
                );
                self.finish_game();
            }
            GameState::Lost => {
                self.add_message("Out of attempts. You win this one.", MessageStyle::Error);
                self.finish_game();
            }
            GameState::Surrendered => self.finish_game(),
        }
    }

    pub fn surrender(&mut self) {
        if self.game.player_surrenders().is_ok() {
            self.current_guess = None;
            self.add_message("Game abandoned.", MessageStyle::Warning);
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.input_buffer.clear();
        self.stats.total_games += 1;
        if self.game.state() == GameState::Won {
            self.stats.games_won += 1;
        }

        self.audit_answers();
        if self.game.cheating_detected() {
            self.stats.cheated_games += 1;
            self.add_message(
                &format!(
                    "Cheating detected: {} inconsistent answers (allowed {})",
                    self.game.detected_cheats(),
                    self.game.allowed_cheats()
                ),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.history.clear();
        self.current_guess = None;
        self.secret = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Secret;
        self.add_message("New game! Type a new secret code.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.strategy().candidates().len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }

            // Command letters never clash with colour letters (RYGBMC) or digits
            match (&app.input_mode, key.code) {
                (_, KeyCode::Char('q') | KeyCode::Esc) => app.should_quit = true,
                (_, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Feedback, KeyCode::Char('s')) => app.surrender(),
                (InputMode::GameOver, _) => {}
                (_, KeyCode::Char(c)) => app.input_buffer.push(c),
                (_, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Secret, KeyCode::Enter) => {
                    let input = app.input_buffer.clone();
                    app.handle_secret(&input);
                }
                (InputMode::Feedback, KeyCode::Enter) => {
                    let input = app.input_buffer.clone();
                    app.handle_feedback(&input);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
