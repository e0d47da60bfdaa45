//! Game board: scoreboard on top, category grid below.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::game::GameSession;

use super::controls;

const CELL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_scoreboard(frame, chunks[0], session);
    render_headers(frame, chunks[1], session);
    render_grid(frame, chunks[2], session, app.board_cursor());

    let progress = format!(
        "{}/{} answered  ·  arrows move  ·  enter open  ·  q quit",
        session.answered_count(),
        session.total_questions()
    );
    frame.render_widget(controls(&progress), chunks[3]);
}

fn render_scoreboard(frame: &mut Frame, area: Rect, session: &GameSession) {
    let teams = session.teams();
    let constraints = vec![Constraint::Fill(1); teams.len().max(1)];
    let cells = Layout::horizontal(constraints).split(area);

    for (team, cell) in teams.iter().zip(cells.iter()) {
        let score_color = if team.score < 0 { Color::Red } else { Color::Green };
        let content = vec![
            Line::from(Span::styled(team.name.as_str(), Style::default().fg(Color::White).bold())),
            Line::from(Span::styled(
                team.score.to_string(),
                Style::default().fg(score_color).bold(),
            )),
        ];
        let widget = Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(widget, *cell);
    }
}

fn render_headers(frame: &mut Frame, area: Rect, session: &GameSession) {
    let columns = column_layout(area, session.categories_count());
    for (name, column) in session.categories().iter().zip(columns.iter()) {
        let widget = Paragraph::new(name.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).bold())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(widget, *column);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, session: &GameSession, cursor: (usize, usize)) {
    let rows = session.rows();
    let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); rows]).split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let columns = column_layout(*row_area, session.categories_count());
        for (category, cell) in columns.iter().enumerate() {
            let Some(question) = session.question(category, row) else {
                continue;
            };
            let selected = cursor == (category, row);
            let answered = session.is_answered(category, row);

            let (text, style) = if answered {
                ("·".to_string(), Style::default().fg(Color::DarkGray))
            } else {
                (
                    format!("${}", question.points),
                    Style::default().fg(Color::Yellow).bold(),
                )
            };
            let border = if selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            frame.render_widget(widget, *cell);
        }
    }
}

fn column_layout(area: Rect, count: usize) -> std::rc::Rc<[Rect]> {
    Layout::horizontal(vec![Constraint::Fill(1); count.max(1)]).split(area)
}
