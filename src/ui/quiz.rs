//! Quiz section: progress, question card, and the score screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

pub fn render_quiz(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = &app.state.quiz;

    if app.state.busy && quiz.questions.is_empty() {
        render_message(
            frame,
            area,
            Line::from(Span::styled(
                format!(
                    "{} Preparing your interactive quiz...",
                    spinner_frame(app.tick_count)
                ),
                Style::default().fg(COLOR_ACTIVE),
            )),
        );
        return;
    }

    if quiz.questions.is_empty() {
        render_message(
            frame,
            area,
            Line::from(Span::styled(
                "Choose a topic from the Learn tab to start a quiz!",
                Style::default().fg(COLOR_DIM),
            )),
        );
        return;
    }

    if quiz.finished {
        render_score(frame, area, app);
    } else {
        render_question(frame, area, app);
    }
}

fn render_message(frame: &mut Frame, area: Rect, line: Line<'static>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Quiz ");
    frame.render_widget(Paragraph::new(vec![Line::from(""), line]).block(block), area);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = &app.state.quiz;
    let total = quiz.questions.len();
    let question = &quiz.questions[quiz.index];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress label
            Constraint::Length(1), // progress gauge
            Constraint::Min(3),    // question card
        ])
        .split(area);

    let label = Line::from(Span::styled(
        format!("  Question {}/{}", quiz.index + 1, total),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(label), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_ACTIVE).bg(COLOR_BORDER))
        .ratio((quiz.index + 1) as f64 / total as f64)
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            question.question.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (idx, option) in question.options.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", idx + 1), Style::default().fg(COLOR_DIM)),
            Span::styled(option.clone(), Style::default().fg(COLOR_ACCENT)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Quiz ");

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let quiz = &app.state.quiz;

    let lines: Vec<Line<'static>> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Complete!",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("You scored ".to_string(), Style::default().fg(COLOR_DIM)),
            Span::styled(
                quiz.score.to_string(),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" out of {}", quiz.questions.len()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Try Again    [l] Back to Topics",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Quiz ");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
