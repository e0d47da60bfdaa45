use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::app::{App, SetupField};
use crate::data::media;
use crate::models::{Media, Team};

use super::controls;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new("TRIVIA BOARD · SETUP")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(title, chunks[0]);

    let columns =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(chunks[1]);
    render_teams_and_categories(frame, columns[0], app);
    render_questions(frame, columns[1], app);

    frame.render_widget(
        controls(
            "↑/↓ field  ·  pgup/pgdn category  ·  ←/→ count  ·  F2 start  ·  F3 export  ·  F4 import  ·  F5 add  ·  F6 delete  ·  del media  ·  esc quit",
        ),
        chunks[2],
    );
}

fn render_teams_and_categories(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let focused = app.focused_field();
    let mut lines = Vec::new();

    lines.push(count_line("Teams", form.team_count(), focused == SetupField::TeamCount));
    for i in 0..form.team_count() {
        let name = form.team_name(i).unwrap_or_default();
        lines.push(text_line(
            &format!("{:>2}. ", i + 1),
            name,
            &Team::default_name(i),
            focused == SetupField::TeamName(i),
        ));
    }
    lines.push(Line::from(""));

    lines.push(count_line(
        "Categories",
        form.categories_count(),
        focused == SetupField::CategoriesCount,
    ));
    for i in 0..form.categories_count() {
        let name = form.category_name(i).unwrap_or_default();
        lines.push(text_line(
            &format!("{:>2}. ", i + 1),
            name,
            &crate::setup::default_category_name(i),
            focused == SetupField::CategoryName(i),
        ));
    }

    let scroll = focus_scroll(&lines, area.height.saturating_sub(2));
    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Teams & Categories ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_questions(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let category = app.active_category();
    let focused = app.focused_field();

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);

    let titles: Vec<String> = (0..form.categories_count())
        .map(|i| form.category_display_name(i))
        .collect();
    let tabs = Tabs::new(titles)
        .select(category)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("│");
    frame.render_widget(tabs, chunks[0]);

    let mut lines = Vec::new();
    for (q, question) in form.questions_in(category).iter().enumerate() {
        let points_focused = focused == SetupField::Points(q);
        let points = match app.edit_buffer() {
            Some(buffer) if points_focused => buffer.to_string(),
            _ => question.points.to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("#{} ", q + 1), Style::default().fg(Color::Cyan).bold()),
            Span::styled("Points: ", label_style(points_focused)),
            Span::styled(points, value_style(points_focused)),
        ]));
        lines.push(text_line(
            "   Q: ",
            &question.question,
            "Question...",
            focused == SetupField::QuestionText(q),
        ));
        lines.push(media_line(
            "   Q media: ",
            question.question_media.as_ref(),
            focused == SetupField::QuestionMedia(q),
            app.edit_buffer(),
        ));
        lines.push(text_line(
            "   A: ",
            &question.answer,
            "Answer...",
            focused == SetupField::AnswerText(q),
        ));
        lines.push(media_line(
            "   A media: ",
            question.answer_media.as_ref(),
            focused == SetupField::AnswerMedia(q),
            app.edit_buffer(),
        ));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from("No questions yet · F5 to add one".fg(Color::DarkGray)));
    }

    let scroll = focus_scroll(&lines, chunks[1].height.saturating_sub(2));
    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", form.category_display_name(category)))
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, chunks[1]);
}

fn count_line(label: &str, count: usize, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style(focused)),
        Span::styled(format!("< {count} >"), value_style(focused)),
    ])
}

fn text_line(prefix: &str, text: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let value = if text.is_empty() && !focused {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(text.to_string(), value_style(focused))
    };
    let mut spans = vec![Span::styled(prefix.to_string(), label_style(focused)), value];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn media_line(prefix: &str, attached: Option<&Media>, focused: bool, buffer: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::styled(prefix.to_string(), label_style(focused))];
    if let Some(attached) = attached {
        spans.push(Span::styled(
            media::describe(attached),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::raw(" "));
    }
    match buffer {
        Some(path) if focused => {
            spans.push(Span::styled(path.to_string(), value_style(true)));
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        _ if attached.is_none() => {
            spans.push(Span::styled("none", Style::default().fg(Color::DarkGray)));
        }
        _ => {}
    }
    Line::from(spans)
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Scroll offset keeping the first highlighted line in view.
fn focus_scroll(lines: &[Line], height: u16) -> u16 {
    let focused_line = lines
        .iter()
        .position(|line| {
            line.spans
                .iter()
                .any(|span| span.style.fg == Some(Color::Yellow))
        })
        .unwrap_or(0) as u16;
    focused_line.saturating_sub(height.saturating_sub(1))
}
