//! # trivia-board
//!
//! A Jeopardy-style trivia board for the terminal.
//!
//! Teams, categories and questions are entered on a setup screen (or
//! imported from a JSON setup file), then played on a board of
//! point-valued cells. Each cell opens a question that can be scored for or
//! against any team.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_board::{Config, TriviaError, TriviaGame};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), TriviaError> {
//!     let game = TriviaGame::from_json(Config::default(), "trivia_setup.json")?;
//!     game.run().await
//! }
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod game;
pub mod logging;
pub mod models;
pub mod setup;
pub mod terminal;
pub mod timer;
mod ui;

use std::path::Path;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

pub use app::App;
pub use config::Config;
pub use data::{load_setup_from_json, parse_setup};
pub use error::{GameError, LoadError, MediaError, SetupError, TriviaError};
pub use game::{GameOutcome, GameSession};
pub use models::{Media, MediaKind, Question, Screen, SetupExport, Team};
pub use setup::SetupForm;

const TICK: Duration = Duration::from_secs(1);

/// A trivia game that can be run in the terminal.
pub struct TriviaGame {
    app: App,
}

impl TriviaGame {
    /// Start from an empty setup screen.
    pub fn new(config: Config) -> Self {
        Self {
            app: App::new(config),
        }
    }

    /// Start from a setup file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use trivia_board::{Config, TriviaGame};
    ///
    /// let game = TriviaGame::from_json(Config::default(), "trivia_setup.json")
    ///     .expect("Failed to load setup");
    /// ```
    pub fn from_json<P: AsRef<Path>>(config: Config, path: P) -> Result<Self, TriviaError> {
        let setup = load_setup_from_json(path)?;
        Ok(Self {
            app: App::with_setup(config, setup),
        })
    }

    /// Run the game in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), TriviaError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        info!("terminal restored");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), TriviaError> {
    let mut events = EventStream::new();
    let mut ticker = time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = ticker.tick() => app.tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let was_running = app.countdown().is_running();
                    handle_input(app, key).await;
                    // A fresh countdown gets a full first second.
                    if !was_running && app.countdown().is_running() {
                        ticker.reset();
                    }
                }
                Some(Ok(Event::Paste(text))) => handle_paste(app, &text),
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    Ok(())
}

async fn handle_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.prompt().is_some() {
        handle_prompt_input(app, key.code).await;
        return;
    }

    match app.screen {
        Screen::Setup => handle_setup_input(app, key.code).await,
        Screen::Playing => {
            if app.session().and_then(GameSession::current).is_some() {
                handle_modal_input(app, key.code);
            } else {
                handle_board_input(app, key.code);
            }
        }
        Screen::GameEnd => handle_game_end_input(app, key.code),
    }
}

/// Pasted text (usually a file path) goes into whatever is being typed.
fn handle_paste(app: &mut App, text: &str) {
    let text = text.trim_end_matches(['\r', '\n']);
    if app.prompt().is_some() {
        text.chars().for_each(|c| app.prompt_input(c));
    } else if app.screen == Screen::Setup {
        text.chars().for_each(|c| app.type_char(c));
    }
}

async fn handle_prompt_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => app.submit_prompt().await,
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(c) => app.prompt_input(c),
        _ => {}
    }
}

async fn handle_setup_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::BackTab => app.focus_previous(),
        KeyCode::PageDown => app.next_category(),
        KeyCode::PageUp => app.previous_category(),
        KeyCode::Right => app.increment(),
        KeyCode::Left => app.decrement(),
        KeyCode::Enter => app.commit().await,
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.detach_focused_media(),
        KeyCode::F(2) => app.start_game(),
        KeyCode::F(3) => app.begin_prompt(app::PromptKind::Export),
        KeyCode::F(4) => app.begin_prompt(app::PromptKind::Import),
        KeyCode::F(5) => app.add_question(),
        KeyCode::F(6) => app.remove_focused_question(),
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}

fn handle_board_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_modal_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(' ') | KeyCode::Char('a') => app.reveal_answer(),
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_team(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_team(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_team(digit as usize - 1);
            }
        }
        KeyCode::Char('c') | KeyCode::Char('+') => app.score_selected(true),
        KeyCode::Char('x') | KeyCode::Char('-') => app.score_selected(false),
        KeyCode::Esc | KeyCode::Enter => app.close_question(),
        _ => {}
    }
}

fn handle_game_end_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_keyboard_drives_a_round() {
        let config = Config {
            team_count: 1,
            categories_count: 1,
            questions_per_category: 1,
            ..Config::default()
        };
        let mut app = App::new(config);

        handle_input(&mut app, press(KeyCode::F(2))).await;
        assert_eq!(app.screen, Screen::Playing);

        handle_input(&mut app, press(KeyCode::Enter)).await;
        assert!(app.session().unwrap().current().is_some());

        handle_input(&mut app, press(KeyCode::Char(' '))).await;
        handle_input(&mut app, press(KeyCode::Char('c'))).await;
        assert_eq!(app.screen, Screen::GameEnd);
        assert_eq!(app.session().unwrap().teams()[0].score, 100);

        handle_input(&mut app, press(KeyCode::Char('r'))).await;
        assert_eq!(app.screen, Screen::Setup);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_anywhere() {
        let mut app = App::default();
        handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .await;
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_fills_prompt() {
        let mut app = App::default();
        app.begin_prompt(app::PromptKind::Import);
        while app.prompt().is_some_and(|p| !p.input.is_empty()) {
            app.prompt_backspace();
        }
        handle_paste(&mut app, "/tmp/board.json\n");
        assert_eq!(app.prompt().unwrap().input, "/tmp/board.json");
    }

    #[tokio::test]
    async fn test_prompt_captures_keys() {
        let mut app = App::default();
        handle_input(&mut app, press(KeyCode::F(3))).await;
        assert!(app.prompt().is_some());

        handle_input(&mut app, press(KeyCode::Char('q'))).await;
        assert!(app.prompt().unwrap().input.ends_with('q'));

        handle_input(&mut app, press(KeyCode::Esc)).await;
        assert!(app.prompt().is_none());
        assert!(!app.should_quit);
    }
}
