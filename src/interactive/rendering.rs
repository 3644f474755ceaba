//! TUI rendering with ratatui
//!
//! Panels for the computer-guesses game: current guess, candidates, history,
//! feedback honesty and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Color as PegColor, Symbol};
use crate::output::formatters::result_to_pegs;
use crate::solver::Strategy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MASTERMIND - I guess, you answer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol {
        Symbol::Color(PegColor::Red) => Color::Red,
        Symbol::Color(PegColor::Yellow) => Color::Yellow,
        Symbol::Color(PegColor::Green) => Color::Green,
        Symbol::Color(PegColor::Blue) => Color::Blue,
        Symbol::Color(PegColor::Magenta) => Color::Magenta,
        Symbol::Color(PegColor::Cyan) => Color::Cyan,
        Symbol::Digit(_) => Color::White,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.symbols()
        .iter()
        .map(|&symbol| {
            Span::styled(
                format!("{} ", symbol.short()),
                Style::default()
                    .fg(symbol_color(symbol))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(25), // Candidates
            Constraint::Percentage(35), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.current_guess else {
        let text = match app.input_mode {
            InputMode::Secret => "Waiting for your secret",
            _ => "No guess pending",
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let mut guess_line = vec![Span::raw("My guess:  ")];
    guess_line.extend(code_spans(&guess.code));

    let content = vec![
        Line::from(guess_line),
        Line::from(format!("Entropy:   {:.3} bits", guess.entropy)),
        Line::from(format!(
            "Expected:  {:.1} candidates remain",
            guess.expected_remaining
        )),
        Line::from(format!("Worst:     {} candidates", guess.max_partition)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.game.strategy().candidates();

    let content = if app.input_mode == InputMode::Secret {
        vec![Line::from(format!(
            "{} possible codes",
            app.game.alphabet().code_count(app.game.code_length())
        ))]
    } else if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No code fits every answer",
            Style::default().fg(Color::Red),
        ))]
    } else if candidates.len() <= 6 {
        candidates
            .iter()
            .map(|code| {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(code_spans(code));
                Line::from(spans)
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.game.code_length();
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{:>2}: ", i + 1))];
            spans.extend(code_spans(&entry.guess));
            spans.push(Span::raw(format!(
                " {}  {} → {}",
                result_to_pegs(entry.result, code_length),
                entry.candidates_before,
                entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(4), // Honesty
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_honesty(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.attempts().len();
    let max = app.game.max_attempts();
    let percent = (used * 100 / max.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max}"));
    f.render_widget(gauge, area);
}

fn render_honesty(f: &mut Frame, app: &App, area: Rect) {
    let detected = app.game.detected_cheats();
    let allowed = app.game.allowed_cheats();
    let (text, color) = if app.game.cheating_detected() {
        ("Cheating detected", Color::Red)
    } else if detected > 0 {
        ("Within tolerance", Color::Yellow)
    } else {
        ("All answers consistent", Color::Green)
    };

    let content = vec![
        Line::from(format!("Inconsistent answers: {detected} (allowed {allowed})")),
        Line::from(Span::styled(text, Style::default().fg(color))),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Honesty ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let masked;
    let (title, content, color) = match app.input_mode {
        InputMode::Secret => {
            masked = "*".repeat(app.input_buffer.chars().count());
            (" Your Secret (hidden) | Enter to confirm ", masked.as_str(), Color::Magenta)
        }
        InputMode::Feedback => (
            " Feedback: exact wrong-position, e.g. '1 2' | s: surrender ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let strategy = Paragraph::new(app.game.strategy().name()).alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {} | Cheated: {}",
        app.stats.total_games, app.stats.games_won, app.stats.cheated_games
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
