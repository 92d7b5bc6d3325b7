//! TUI application state and event loop

use crate::config::Config;
use crate::daily::{DailyKey, seconds_until_tomorrow};
use crate::game::{DailyGame, load_statistics};
use crate::session::{Key, Phase};
use crate::stats::Statistics;
use crate::storage::{SaveQueue, Store};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// How often the screen refreshes without input (countdown, day rollover)
const TICK: Duration = Duration::from_secs(1);

/// Application state
pub struct App {
    pub game: DailyGame,
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub saves: SaveQueue,
    pub runtime: Handle,
    pub stats: Option<Statistics>,
    pub messages: Vec<Message>,
    pub share: Option<String>,
    pub should_quit: bool,
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
    Error,
}

impl App {
    /// Build the app around an opened game
    ///
    /// `runtime` must belong to a runtime that is *not* driving the calling
    /// thread: the event loop blocks on it to read statistics.
    #[must_use]
    pub fn new(
        game: DailyGame,
        config: Config,
        store: Arc<dyn Store>,
        saves: SaveQueue,
        runtime: Handle,
    ) -> Self {
        let mut app = Self {
            game,
            config,
            store,
            saves,
            runtime,
            stats: None,
            messages: Vec::new(),
            share: None,
            should_quit: false,
        };

        if app.game.session().is_finished() {
            app.add_message("Today's puzzle is already done.", MessageStyle::Info);
            app.refresh_stats();
        } else {
            app.add_message(
                &format!("Guess the {}-letter word!", app.game.session().width()),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Route a puzzle keystroke to the game
    pub fn press(&mut self, key: Key) {
        self.tick();

        let was_finished = self.game.session().is_finished();
        let before = self.game.session().cursor();

        if !self.game.press(key) {
            if key == Key::Enter && !was_finished {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            return;
        }

        let session = self.game.session();
        if session.cursor().row > before.row {
            match session.phase() {
                Phase::Won => {
                    let guesses = session.guesses_used();
                    let celebration = match guesses {
                        1 => "🎯 Genius! First try! 🌟",
                        2 => "🔥 Magnificent! 🔥",
                        3 => "✨ Impressive! ✨",
                        4 => "👏 Splendid! 👏",
                        5 => "🎉 Great! 🎉",
                        _ => "😅 Phew! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                }
                Phase::Lost => {
                    let answer = session.secret().text().to_uppercase();
                    self.add_message(
                        &format!("Meh! The word was {answer}. Try again tomorrow!"),
                        MessageStyle::Error,
                    );
                }
                Phase::Playing => {}
            }
        }

        if !was_finished && self.game.session().is_finished() {
            self.refresh_stats();
            self.add_message("Press 's' to share, Esc to quit.", MessageStyle::Info);
        }
    }

    /// Recompute statistics from the persisted history
    pub fn refresh_stats(&mut self) {
        let saves = self.saves.clone();
        let store = Arc::clone(&self.store);
        let stats = self.runtime.block_on(async move {
            saves.flush().await;
            load_statistics(&*store).await
        });
        self.stats = Some(stats);
    }

    /// Start a new puzzle if midnight has passed
    pub fn tick(&mut self) {
        self.roll_over(DailyKey::today());
    }

    fn roll_over(&mut self, today: DailyKey) {
        if self.game.roll_over(today, self.config.secret.clone()) {
            self.stats = None;
            self.share = None;
            self.messages.clear();
            self.add_message("A new puzzle is ready!", MessageStyle::Success);
        }
    }

    pub fn show_share(&mut self) {
        self.share = Some(self.game.share_text());
        self.add_message("Share text ready below.", MessageStyle::Success);
    }

    /// Seconds until the next puzzle
    #[must_use]
    pub fn countdown(&self) -> u64 {
        seconds_until_tomorrow(Local::now().naive_local())
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

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.game.session().is_finished() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('s') => self.show_share(),
                _ => {}
            },
            KeyCode::Enter => self.press(Key::Enter),
            KeyCode::Backspace | KeyCode::Delete => self.press(Key::Clear),
            KeyCode::Char(c) => {
                if let Some(letter) = Key::letter(c) {
                    self.press(letter);
                }
            }
            _ => {}
        }
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Returns the share text, if the player asked for it, so it can be printed
/// after the terminal is restored
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    let saves = app.saves.clone();
    app.runtime.block_on(saves.flush());
    Ok(app.share)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{History, MemoryStore};
    use chrono::Days;
    use tokio::runtime::Runtime;

    fn app_on(runtime: &Runtime, key: DailyKey) -> App {
        let config = Config::new("hello", None).unwrap();
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let (saves, _worker) = {
            let _guard = runtime.enter();
            SaveQueue::spawn(Arc::clone(&store))
        };
        let game = DailyGame::resume(
            config.secret.clone(),
            key,
            &History::new(),
            Some(saves.clone()),
        );
        App::new(game, config, store, saves, runtime.handle().clone())
    }

    #[test]
    fn keystroke_after_midnight_lands_on_new_day() {
        let runtime = Runtime::new().unwrap();
        let yesterday = Local::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .unwrap();
        let mut app = app_on(&runtime, DailyKey::for_date(yesterday));
        for c in "wor".chars() {
            app.game.press(Key::Letter(c));
        }

        app.press(Key::Letter('h'));

        assert_eq!(app.game.key(), DailyKey::today());
        assert_eq!(app.game.session().cursor().column, 1);
        assert_eq!(app.game.session().grid().cell(0, 0), Some('h'));
    }

    #[test]
    fn same_day_keystrokes_keep_the_board() {
        let runtime = Runtime::new().unwrap();
        let mut app = app_on(&runtime, DailyKey::today());

        app.press(Key::Letter('w'));
        app.press(Key::Letter('o'));

        assert_eq!(app.game.session().cursor().column, 2);
    }

    #[test]
    fn short_row_reports_not_enough_letters() {
        let runtime = Runtime::new().unwrap();
        let mut app = app_on(&runtime, DailyKey::today());

        app.press(Key::Letter('w'));
        app.press(Key::Enter);

        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Not enough letters")
        );
    }
}
