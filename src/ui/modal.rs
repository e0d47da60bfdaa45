//! Question modal drawn over the board.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::data::media;
use crate::models::Media;
use crate::timer::CountdownState;

use super::controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(current) = session.current() else {
        return;
    };

    let popup = area.inner(Margin::new(area.width / 10, area.height / 10));
    frame.render_widget(Clear, popup);

    let category = session
        .categories()
        .get(current.category)
        .map_or("", String::as_str);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} · {} ", category, current.data.points))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_bottom(countdown_title(app));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    render_side(
        frame,
        chunks[0],
        "Question",
        &current.data.question,
        current.data.question_media.as_ref(),
    );

    if current.answer_revealed {
        render_side(
            frame,
            chunks[1],
            "Answer",
            &current.data.answer,
            current.data.answer_media.as_ref(),
        );
    } else {
        let hidden = Paragraph::new("space to reveal the answer")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(hidden, chunks[1]);
    }

    render_team_buttons(frame, chunks[2], app);
    frame.render_widget(
        controls("←/→ team  ·  1-9 pick team  ·  c correct  ·  x incorrect  ·  esc close"),
        chunks[3],
    );
}

fn render_side(frame: &mut Frame, area: Rect, title: &str, text: &str, attached: Option<&Media>) {
    let mut lines = vec![Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).bold(),
    ))];
    if let Some(attached) = attached {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            media::describe(attached),
            Style::default().fg(Color::Magenta),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_team_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let spans: Vec<Span> = session
        .teams()
        .iter()
        .enumerate()
        .flat_map(|(i, team)| {
            let style = if i == app.selected_team() {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            [
                Span::styled(format!(" {} {} ", i + 1, team.name), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(widget, area);
}

fn countdown_title(app: &App) -> Line<'static> {
    match app.countdown().state() {
        CountdownState::Running(remaining) => {
            let color = if remaining <= 5 { Color::Red } else { Color::Yellow };
            Line::from(format!(" ⏱ {remaining}s ")).fg(color).bold()
        }
        CountdownState::Expired => Line::from(" TIME'S UP ").fg(Color::Red).bold(),
        CountdownState::Idle => Line::from(""),
    }
}
