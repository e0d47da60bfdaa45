use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

use super::controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let mut summary = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    if let Some(outcome) = session.outcome() {
        summary.push(Line::from(Span::styled(
            format!("Winner: {}", outcome.winner.name),
            Style::default().fg(Color::Green).bold(),
        )));
        summary.push(Line::from(Span::styled(
            format!("{} points", outcome.winner.score),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let winner_index = session.outcome().map(|o| o.winner_index);
    let mut standings: Vec<_> = session.teams().iter().enumerate().collect();
    standings.sort_by(|(ia, a), (ib, b)| b.score.cmp(&a.score).then(ia.cmp(ib)));

    let lines: Vec<Line> = standings
        .iter()
        .enumerate()
        .map(|(rank, (index, team))| {
            let color = if Some(*index) == winner_index {
                Color::Green
            } else {
                Color::Gray
            };
            Line::from(vec![
                Span::styled(format!("{:2}. ", rank + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<24}", team.name), Style::default().fg(color)),
                Span::styled(team.score.to_string(), Style::default().fg(color).bold()),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, chunks[2]);

    frame.render_widget(controls("r restart  ·  q quit"), chunks[3]);
}
