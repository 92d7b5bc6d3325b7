//! TUI rendering with ratatui
//!
//! Board, tinted keyboard, end-of-game statistics and messages.

use super::app::{App, MessageStyle};
use crate::core::{Classification, TRIES};
use crate::daily::format_countdown;
use crate::session::Phase;
use crate::stats::Statistics;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Background colour for a classified cell or key
const fn tint(class: Classification) -> Color {
    match class {
        Classification::Correct => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
        Classification::Untested => Color::Reset,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let cursor = session.cursor();

    let mut lines = vec![Line::from("")];
    for row in 0..TRIES {
        let mut spans = Vec::with_capacity(session.width() * 2);
        for col in 0..session.width() {
            let letter = session
                .grid()
                .cell(row, col)
                .map_or('·', |c| c.to_ascii_uppercase());
            let class = session.classify(row, col);

            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if class.is_scored() {
                style = style.fg(Color::Black).bg(tint(class));
            }
            if !session.is_finished() && row == cursor.row && col == cursor.column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match session.phase() {
        Phase::Playing => format!(" Puzzle {} ", app.game.key()),
        Phase::Won => format!(" Solved {}/{TRIES} ", session.guesses_used()),
        Phase::Lost => format!(" X/{TRIES} ({}) ", session.secret().text().to_uppercase()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let caps = app.game.session().classify_keycaps();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let class = caps.of(c);
                    let style = if class.is_scored() {
                        Style::default().fg(Color::Black).bg(tint(class))
                    } else {
                        Style::default().fg(Color::White)
                    };
                    [
                        Span::styled(format!(" {} ", c.to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Statistics or share
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    if let Some(share) = &app.share {
        render_share(f, share, chunks[0]);
    } else if let Some(stats) = &app.stats {
        render_statistics(f, app, stats, chunks[0]);
    } else {
        render_help(f, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, stats: &Statistics, area: Rect) {
    let won_today = app.game.session().phase() == Phase::Won;
    let today_bucket = app.game.session().guesses_used();
    let max = stats.max_bucket().max(1);

    let mut content = vec![
        Line::from(vec![Span::styled(
            if won_today {
                "Congrats!"
            } else {
                "Meh, try again tomorrow"
            },
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(format!(
            "Played {}  Win % {}  Cur Streak {}  Max Streak {}",
            stats.played, stats.win_rate_percent, stats.current_streak, stats.max_streak
        )),
        Line::from(""),
        Line::from("Guess Distribution"),
    ];

    for guesses in 1..=TRIES {
        let count = stats.guess_distribution[guesses];
        let width = (count * 20 / max).max(1);
        let color = if won_today && guesses == today_bucket {
            Color::Green
        } else {
            Color::Gray
        };
        content.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled("█".repeat(width), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(format!(
        "Next puzzle in {}",
        format_countdown(app.countdown())
    )));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Statistics ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_share(f: &mut Frame, share: &str, area: Rect) {
    let paragraph = Paragraph::new(share.to_string()).block(
        Block::default()
            .title(" Share (printed on exit) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("Type letters to fill the row."),
        Line::from("Backspace clears, Enter submits."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" right spot  "),
            Span::styled(" B ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" elsewhere  "),
            Span::styled(" C ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
            Span::raw(" not in word"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let session = app.game.session();
    let mode = Paragraph::new(format!("Phase: {}", session.phase())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let attempts = Paragraph::new(format!("Guess {}/{TRIES}", (session.cursor().row + 1).min(TRIES)))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help_text = if session.is_finished() {
        "s: Share | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Clear | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
