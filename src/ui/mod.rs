mod board;
mod game_end;
mod modal;
mod setup;

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, PromptKind, StatusKind};
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

    match app.screen {
        Screen::Setup => setup::render(frame, chunks[0], app),
        Screen::Playing => {
            board::render(frame, chunks[0], app);
            if app.session().and_then(|s| s.current()).is_some() {
                modal::render(frame, chunks[0], app);
            }
        }
        Screen::GameEnd => game_end::render(frame, chunks[0], app),
    }

    render_status(frame, chunks[1], app);

    if app.prompt().is_some() {
        render_prompt(frame, area, app);
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = app.status() else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Green,
        StatusKind::Error => Color::Red,
    };
    let widget = Paragraph::new(status.text.as_str())
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, app: &App) {
    let Some(prompt) = app.prompt() else {
        return;
    };
    let title = match prompt.kind {
        PromptKind::Export => " Export setup to ",
        PromptKind::Import => " Import setup from ",
    };

    let popup = centered(area, 60, 3);
    frame.render_widget(Clear, popup);

    let widget = Paragraph::new(Line::from(vec![
        Span::raw(prompt.input.as_str()),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_bottom(Line::from(" enter confirm · esc cancel ").fg(Color::DarkGray)),
    );
    frame.render_widget(widget, popup);
}

/// A rect of `percent_x` width and fixed `height`, centered in `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn controls(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
}
