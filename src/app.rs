//! Application controller.
//!
//! `App` owns the setup form, the running session and all UI-only state
//! (focus, cursor, prompts, countdown). Input handlers call its methods; the
//! renderer only reads from it.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::data::{self, media};
use crate::game::GameSession;
use crate::models::{MediaSide, Screen, SetupExport};
use crate::setup::SetupForm;
use crate::timer::Countdown;

/// An editable field on the setup screen.
///
/// Question fields refer to slots in the active category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    TeamCount,
    TeamName(usize),
    CategoriesCount,
    CategoryName(usize),
    Points(usize),
    QuestionText(usize),
    QuestionMedia(usize),
    AnswerText(usize),
    AnswerMedia(usize),
}

impl SetupField {
    pub fn question_index(self) -> Option<usize> {
        match self {
            SetupField::Points(q)
            | SetupField::QuestionText(q)
            | SetupField::QuestionMedia(q)
            | SetupField::AnswerText(q)
            | SetupField::AnswerMedia(q) => Some(q),
            _ => None,
        }
    }

    fn media_side(self) -> Option<(usize, MediaSide)> {
        match self {
            SetupField::QuestionMedia(q) => Some((q, MediaSide::Question)),
            SetupField::AnswerMedia(q) => Some((q, MediaSide::Answer)),
            _ => None,
        }
    }

    /// Fields whose typed text is held in a buffer until committed.
    fn is_buffered(self) -> bool {
        matches!(
            self,
            SetupField::Points(_) | SetupField::QuestionMedia(_) | SetupField::AnswerMedia(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Export,
    Import,
}

/// One-line path prompt for export/import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    config: Config,
    form: SetupForm,
    session: Option<GameSession>,
    countdown: Countdown,
    focus: usize,
    active_category: usize,
    edit_buffer: Option<String>,
    board_cursor: (usize, usize),
    selected_team: usize,
    prompt: Option<Prompt>,
    status: Option<Status>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let form = SetupForm::new(
            config.team_count,
            config.categories_count,
            config.questions_per_category,
        );
        Self {
            screen: Screen::Setup,
            should_quit: false,
            countdown: Countdown::new(config.timer_seconds),
            config,
            form,
            session: None,
            focus: 0,
            active_category: 0,
            edit_buffer: None,
            board_cursor: (0, 0),
            selected_team: 0,
            prompt: None,
            status: None,
        }
    }

    /// Start on the setup screen with an imported setup already applied.
    pub fn with_setup(config: Config, setup: SetupExport) -> Self {
        let mut app = Self::new(config);
        app.form.apply_setup(setup);
        app
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn active_category(&self) -> usize {
        self.active_category
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    pub fn board_cursor(&self) -> (usize, usize) {
        self.board_cursor
    }

    pub fn selected_team(&self) -> usize {
        self.selected_team
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ----- setup screen -----

    /// Every editable field in display order.
    pub fn setup_fields(&self) -> Vec<SetupField> {
        let mut fields = vec![SetupField::TeamCount];
        fields.extend((0..self.form.team_count()).map(SetupField::TeamName));
        fields.push(SetupField::CategoriesCount);
        fields.extend((0..self.form.categories_count()).map(SetupField::CategoryName));
        for q in 0..self.form.question_count(self.active_category) {
            fields.extend([
                SetupField::Points(q),
                SetupField::QuestionText(q),
                SetupField::QuestionMedia(q),
                SetupField::AnswerText(q),
                SetupField::AnswerMedia(q),
            ]);
        }
        fields
    }

    pub fn focused_field(&self) -> SetupField {
        let fields = self.setup_fields();
        fields
            .get(self.focus.min(fields.len() - 1))
            .copied()
            .unwrap_or(SetupField::TeamCount)
    }

    pub fn focus_next(&mut self) {
        let len = self.setup_fields().len();
        self.set_focus((self.focus + 1) % len);
    }

    pub fn focus_previous(&mut self) {
        let len = self.setup_fields().len();
        self.set_focus((self.focus + len - 1) % len);
    }

    pub fn next_category(&mut self) {
        let count = self.form.categories_count();
        self.switch_category((self.active_category + 1) % count);
    }

    pub fn previous_category(&mut self) {
        let count = self.form.categories_count();
        self.switch_category((self.active_category + count - 1) % count);
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.push(c);
            return;
        }

        match field {
            SetupField::TeamCount | SetupField::CategoriesCount => match c {
                '+' => self.increment(),
                '-' => self.decrement(),
                _ => {}
            },
            _ => self.edit_text(field, |text| text.push(c)),
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
            return;
        }
        self.edit_text(field, |text| {
            text.pop();
        });
    }

    pub fn increment(&mut self) {
        match self.focused_field() {
            SetupField::TeamCount => {
                self.form.set_team_count(self.form.team_count() + 1);
            }
            SetupField::CategoriesCount => {
                let count = self.form.categories_count() + 1;
                self.change_categories_count(count);
            }
            _ => {}
        }
    }

    pub fn decrement(&mut self) {
        match self.focused_field() {
            SetupField::TeamCount => {
                let count = self.form.team_count().saturating_sub(1);
                self.form.set_team_count(count);
            }
            SetupField::CategoriesCount => {
                let count = self.form.categories_count().saturating_sub(1);
                self.change_categories_count(count);
            }
            _ => {}
        }
        self.clamp_focus();
    }

    /// Enter on the setup screen: commit a buffered field, or move on.
    pub async fn commit(&mut self) {
        match self.focused_field() {
            SetupField::Points(_) => {
                self.commit_points();
                self.enter_field();
            }
            field @ (SetupField::QuestionMedia(_) | SetupField::AnswerMedia(_)) => {
                let path = self.edit_buffer.take().unwrap_or_default();
                let path = path.trim();
                if path.is_empty() {
                    self.notify_error("Type a file path to attach");
                } else if let Some((q, side)) = field.media_side() {
                    self.attach_media(self.active_category, q, side, Path::new(path))
                        .await;
                }
                self.enter_field();
            }
            _ => self.focus_next(),
        }
    }

    pub fn add_question(&mut self) {
        match self.form.add_question(self.active_category) {
            Ok(index) => {
                let fields = self.setup_fields();
                if let Some(pos) = fields.iter().position(|f| *f == SetupField::Points(index)) {
                    self.set_focus(pos);
                }
                self.notify(format!("Added question {}", index + 1));
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    pub fn remove_focused_question(&mut self) {
        let Some(q) = self.focused_field().question_index() else {
            self.notify_error("Select a question to delete");
            return;
        };
        self.edit_buffer = None;
        match self.form.remove_question(self.active_category, q) {
            Ok(_) => {
                self.clamp_focus();
                self.enter_field();
                self.notify(format!("Deleted question {}", q + 1));
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    pub fn detach_focused_media(&mut self) {
        let Some((q, side)) = self.focused_field().media_side() else {
            return;
        };
        match self.form.detach_media(self.active_category, q, side) {
            Ok(Some(_)) => self.notify("Media removed"),
            Ok(None) => {}
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    /// Read a file and attach it to one side of a slot.
    pub async fn attach_media(&mut self, category: usize, question: usize, side: MediaSide, path: &Path) {
        match media::load_media_file(path).await {
            Ok(loaded) => {
                let description = media::describe(&loaded);
                match self.form.attach_media(category, question, side, loaded) {
                    Ok(()) => self.notify(format!("Attached {description}")),
                    Err(err) => self.notify_error(err.to_string()),
                }
            }
            Err(err) => {
                warn!(error = %err, "media attach failed");
                self.notify_error(err.to_string());
            }
        }
    }

    pub fn form_mut(&mut self) -> &mut SetupForm {
        &mut self.form
    }

    pub fn start_game(&mut self) {
        self.leave_field();
        if let Err(err) = self.form.validate_for_start() {
            warn!(error = %err, "start blocked");
            self.notify_error(err.to_string());
            return;
        }

        match GameSession::new(self.form.build_setup(), self.config.close_on_score) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Playing;
                self.board_cursor = (0, 0);
                self.status = None;
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    // ----- export / import -----

    pub fn begin_prompt(&mut self, kind: PromptKind) {
        self.leave_field();
        self.prompt = Some(Prompt {
            kind,
            input: self.config.export_path.display().to_string(),
        });
    }

    pub fn prompt_input(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.input.pop();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.enter_field();
    }

    pub async fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let path = PathBuf::from(prompt.input.trim());
        match prompt.kind {
            PromptKind::Export => self.export_to(&path).await,
            PromptKind::Import => self.import_from(&path).await,
        }
        self.enter_field();
    }

    pub async fn export_to(&mut self, path: &Path) {
        self.leave_field();
        let setup = self.form.build_setup();
        match data::write_setup(path, &setup).await {
            Ok(()) => self.notify(format!("Exported to {}", path.display())),
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    /// Replace the form with a setup file. A bad file changes nothing.
    pub async fn import_from(&mut self, path: &Path) {
        match data::read_setup(path).await {
            Ok(setup) => {
                info!(path = %path.display(), "imported setup");
                self.form.apply_setup(setup);
                self.edit_buffer = None;
                self.focus = 0;
                self.active_category = 0;
                self.notify("Game imported");
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "import rejected");
                self.notify_error(format!("Invalid file: {err}"));
            }
        }
    }

    // ----- board -----

    pub fn move_cursor(&mut self, d_category: isize, d_row: isize) {
        let Some(session) = &self.session else {
            return;
        };
        let columns = session.categories_count();
        let rows = session.rows();
        if columns == 0 || rows == 0 {
            return;
        }
        let (category, row) = self.board_cursor;
        self.board_cursor = (
            category.saturating_add_signed(d_category).min(columns - 1),
            row.saturating_add_signed(d_row).min(rows - 1),
        );
    }

    pub fn open_selected(&mut self) {
        let (category, row) = self.board_cursor;
        self.open_question(category, row);
    }

    pub fn open_question(&mut self, category: usize, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.open_question(category, index).map(|_| ()) {
            Ok(()) => {
                self.selected_team = 0;
                self.status = None;
                self.countdown.start();
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    // ----- question modal -----

    pub fn reveal_answer(&mut self) {
        let revealed = self
            .session
            .as_mut()
            .is_some_and(GameSession::reveal_answer);
        if revealed {
            self.countdown.cancel();
        }
    }

    pub fn select_team(&mut self, index: usize) {
        let team_count = self.session.as_ref().map_or(0, |s| s.teams().len());
        if index < team_count {
            self.selected_team = index;
        }
    }

    pub fn select_next_team(&mut self) {
        if let Some(session) = &self.session {
            let count = session.teams().len().max(1);
            self.selected_team = (self.selected_team + 1) % count;
        }
    }

    pub fn select_previous_team(&mut self) {
        if let Some(session) = &self.session {
            let count = session.teams().len().max(1);
            self.selected_team = (self.selected_team + count - 1) % count;
        }
    }

    pub fn score_selected(&mut self, is_correct: bool) {
        self.score_team(self.selected_team, is_correct);
    }

    pub fn score_team(&mut self, team_index: usize, is_correct: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(update) = session.score_team(team_index, is_correct) else {
            return;
        };

        let name = session.teams()[update.team_index].name.clone();
        let closed = session.current().is_none();
        self.notify(format!("{name} {:+} → {}", update.delta, update.score));
        if closed {
            self.countdown.cancel();
        }
        if update.game_over.is_some() {
            self.finish();
        }
    }

    pub fn close_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.current().is_none() {
            return;
        }
        let outcome = session.close_question();
        self.countdown.cancel();
        if outcome.is_some() {
            self.finish();
        }
    }

    /// One-second heartbeat from the event loop.
    pub fn tick(&mut self) {
        if self.countdown.tick() {
            self.notify("Time's up!");
        }
    }

    /// Drop everything and go back to a fresh setup screen.
    pub fn restart(&mut self) {
        info!("restarting");
        let config = self.config.clone();
        *self = Self::new(config);
    }

    fn finish(&mut self) {
        self.screen = Screen::GameEnd;
        if let Some(outcome) = self.session.as_ref().and_then(GameSession::outcome) {
            self.notify(format!(
                "Winner: {} with {} points",
                outcome.winner.name, outcome.winner.score
            ));
        }
    }

    // ----- helpers -----

    fn notify(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    fn notify_error(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    fn set_focus(&mut self, index: usize) {
        self.leave_field();
        self.focus = index;
        self.enter_field();
    }

    fn clamp_focus(&mut self) {
        let len = self.setup_fields().len();
        self.focus = self.focus.min(len - 1);
    }

    fn switch_category(&mut self, category: usize) {
        let on_question = self.focused_field().question_index().is_some();
        self.leave_field();
        self.active_category = category;
        if on_question {
            // Land on the first slot of the new tab, or the last header field.
            let fields = self.setup_fields();
            self.focus = fields
                .iter()
                .position(|f| f.question_index().is_some())
                .unwrap_or(fields.len() - 1);
        }
        self.enter_field();
    }

    fn change_categories_count(&mut self, count: usize) {
        match self.form.set_categories_count(count) {
            Ok(()) => {
                self.active_category = self.active_category.min(count - 1);
            }
            Err(err) => self.notify_error(err.to_string()),
        }
    }

    /// Prime the edit buffer for buffered fields.
    fn enter_field(&mut self) {
        self.edit_buffer = match self.focused_field() {
            SetupField::Points(q) => self
                .form
                .question(self.active_category, q)
                .map(|question| question.points.to_string()),
            SetupField::QuestionMedia(_) | SetupField::AnswerMedia(_) => Some(String::new()),
            _ => None,
        };
    }

    /// Commit a pending points edit; media paths are only committed by Enter.
    fn leave_field(&mut self) {
        if matches!(self.focused_field(), SetupField::Points(_)) {
            self.commit_points();
        }
        self.edit_buffer = None;
    }

    fn commit_points(&mut self) {
        let (SetupField::Points(q), Some(input)) = (self.focused_field(), self.edit_buffer.take())
        else {
            return;
        };
        if let Err(err) = self.form.set_points(self.active_category, q, &input) {
            self.notify_error(err.to_string());
        }
    }

    fn edit_text(&mut self, field: SetupField, edit: impl FnOnce(&mut String)) {
        debug_assert!(!field.is_buffered());
        let category = self.active_category;
        let current = match field {
            SetupField::TeamName(i) => self.form.team_name(i).map(str::to_string),
            SetupField::CategoryName(i) => self.form.category_name(i).map(str::to_string),
            SetupField::QuestionText(q) => self.form.question(category, q).map(|x| x.question.clone()),
            SetupField::AnswerText(q) => self.form.question(category, q).map(|x| x.answer.clone()),
            _ => None,
        };
        let Some(mut text) = current else {
            return;
        };
        edit(&mut text);

        match field {
            SetupField::TeamName(i) => {
                self.form.set_team_name(i, &text);
            }
            SetupField::CategoryName(i) => {
                self.form.set_category_name(i, &text);
            }
            SetupField::QuestionText(q) => {
                if let Err(err) = self.form.set_question_text(category, q, &text) {
                    self.notify_error(err.to_string());
                }
            }
            SetupField::AnswerText(q) => {
                if let Err(err) = self.form.set_answer_text(category, q, &text) {
                    self.notify_error(err.to_string());
                }
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            team_count: 2,
            categories_count: 2,
            questions_per_category: 2,
            timer_seconds: 5,
            ..Config::default()
        }
    }

    fn focus_on(app: &mut App, field: SetupField) {
        let pos = app
            .setup_fields()
            .iter()
            .position(|f| *f == field)
            .unwrap();
        app.set_focus(pos);
    }

    #[test]
    fn test_typing_edits_the_model() {
        let mut app = App::new(config());
        focus_on(&mut app, SetupField::TeamName(1));
        for c in "Owlz".chars() {
            app.type_char(c);
        }
        app.backspace();
        app.type_char('s');
        assert_eq!(app.form().team_name(1), Some("Owls"));
    }

    #[test]
    fn test_question_and_answer_text_edits() {
        let mut app = App::new(config());
        app.next_category();
        focus_on(&mut app, SetupField::QuestionText(1));
        for c in "Capital of Peru?".chars() {
            app.type_char(c);
        }
        focus_on(&mut app, SetupField::AnswerText(1));
        for c in "Limaa".chars() {
            app.type_char(c);
        }
        app.backspace();

        let slot = app.form().question(1, 1).unwrap();
        assert_eq!(slot.question, "Capital of Peru?");
        assert_eq!(slot.answer, "Lima");
        assert!(app.form().question(0, 1).unwrap().question.is_empty());
        assert!(app.status().is_none());
    }

    #[test]
    fn test_empty_board_does_not_start() {
        let mut app = App::new(config());
        for category in 0..2 {
            while app.form().question_count(category) > 0 {
                app.form_mut().remove_question(category, 0).unwrap();
            }
        }
        app.start_game();
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.session().is_none());
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_points_are_committed_on_enter() {
        let mut app = App::new(config());
        focus_on(&mut app, SetupField::Points(1));
        assert_eq!(app.edit_buffer(), Some("200"));
        app.backspace();
        app.backspace();
        app.backspace();
        app.type_char('7');
        app.type_char('5');
        app.commit().await;
        assert_eq!(app.form().question(0, 1).unwrap().points, 75);
    }

    #[test]
    fn test_bad_points_are_reported_not_stored() {
        let mut app = App::new(config());
        focus_on(&mut app, SetupField::Points(0));
        app.type_char('x');
        app.focus_next();
        assert_eq!(app.form().question(0, 0).unwrap().points, 100);
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_count_fields() {
        let mut app = App::new(config());
        app.increment();
        assert_eq!(app.form().team_count(), 3);
        app.type_char('-');
        app.type_char('-');
        app.type_char('-');
        assert_eq!(app.form().team_count(), 0);
        app.start_game();
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_category_tabs_switch_question_fields() {
        let mut app = App::new(config());
        app.form_mut().set_question_text(1, 0, "second tab").unwrap();
        focus_on(&mut app, SetupField::QuestionText(0));
        app.next_category();
        assert_eq!(app.active_category(), 1);
        assert_eq!(app.focused_field(), SetupField::Points(0));
        app.next_category();
        assert_eq!(app.active_category(), 0);
    }

    #[test]
    fn test_remove_focused_question() {
        let mut app = App::new(config());
        focus_on(&mut app, SetupField::AnswerText(1));
        app.remove_focused_question();
        assert_eq!(app.form().question_count(0), 1);
        assert!(app.focused_field().question_index().is_some());
    }

    #[tokio::test]
    async fn test_media_field_attaches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.png");
        std::fs::write(&path, b"png").unwrap();

        let mut app = App::new(config());
        focus_on(&mut app, SetupField::QuestionMedia(0));
        for c in path.display().to_string().chars() {
            app.type_char(c);
        }
        app.commit().await;

        let question = app.form().question(0, 0).unwrap();
        assert_eq!(
            question.question_media.as_ref().unwrap().kind,
            crate::models::MediaKind::Image
        );

        app.detach_focused_media();
        assert!(app.form().question(0, 0).unwrap().question_media.is_none());
    }

    #[test]
    fn test_full_game_flow() {
        let mut app = App::new(config());
        app.start_game();
        assert_eq!(app.screen, Screen::Playing);

        for category in 0..2 {
            for row in 0..2 {
                app.open_question(category, row);
                assert!(app.countdown().is_running());
                app.select_team(1);
                app.score_selected(true);
                assert!(!app.countdown().is_running());
            }
        }

        assert_eq!(app.screen, Screen::GameEnd);
        let outcome = app.session().unwrap().outcome().unwrap();
        assert_eq!(outcome.winner.name, "Team 2");
        assert_eq!(outcome.winner.score, 600);

        app.restart();
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.session().is_none());
    }

    #[test]
    fn test_reveal_cancels_countdown() {
        let mut app = App::new(config());
        app.start_game();
        app.open_selected();
        app.tick();
        app.reveal_answer();
        assert!(!app.countdown().is_running());
        assert!(app.session().unwrap().current().unwrap().answer_revealed);
        app.close_question();
        assert!(app.session().unwrap().is_answered(0, 0));
    }

    #[test]
    fn test_answered_cell_stays_closed() {
        let mut app = App::new(config());
        app.start_game();
        app.open_question(0, 0);
        app.close_question();
        app.open_question(0, 0);
        assert!(app.session().unwrap().current().is_none());
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_board_cursor_is_clamped() {
        let mut app = App::new(config());
        app.start_game();
        app.move_cursor(5, 5);
        assert_eq!(app.board_cursor(), (1, 1));
        app.move_cursor(-9, -1);
        assert_eq!(app.board_cursor(), (0, 0));
    }

    #[tokio::test]
    async fn test_invalid_import_leaves_form_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"categoriesCount\": ").unwrap();

        let mut app = App::new(config());
        app.form_mut().set_team_name(0, "Keep me");
        let before = app.form().clone();

        app.import_from(&path).await;

        assert_eq!(app.form(), &before);
        let status = app.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Invalid file"));
    }

    #[tokio::test]
    async fn test_export_prompt_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");

        let mut app = App::new(config());
        app.form_mut().set_category_name(0, "Rivers");
        app.begin_prompt(PromptKind::Export);
        app.prompt = Some(Prompt {
            kind: PromptKind::Export,
            input: path.display().to_string(),
        });
        app.submit_prompt().await;
        assert!(app.prompt().is_none());

        let mut other = App::new(Config::default());
        other.import_from(&path).await;
        assert_eq!(other.form().category_name(0), Some("Rivers"));
        assert_eq!(other.form().categories_count(), 2);
        assert_eq!(other.status().unwrap().kind, StatusKind::Info);
    }
}
