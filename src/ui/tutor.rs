//! Tutor section: transcript, typing indicator, and message input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::markdown::render_markdown;
use crate::models::ChatRole;

use super::helpers::{spinner_frame, visible_tail};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_ASSISTANT, COLOR_BORDER, COLOR_DIM, COLOR_USER,
};

pub fn render_tutor(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // transcript
            Constraint::Length(3), // input
        ])
        .split(area);

    render_transcript(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let transcript = &app.state.tutor.transcript;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if transcript.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "I'm MathWhiz, your tutor!",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Ask me any math question, or ask for an explanation of a concept you're stuck on.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    for message in transcript {
        let (name, color) = match message.role {
            ChatRole::User => ("You", COLOR_USER),
            ChatRole::Assistant => ("MathWhiz", COLOR_ASSISTANT),
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{name} "),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                message.sent_at.format("%H:%M").to_string(),
                Style::default().fg(COLOR_DIM),
            ),
        ]));

        match message.role {
            ChatRole::User => {
                lines.push(Line::from(Span::styled(
                    message.text.clone(),
                    Style::default().fg(COLOR_ACCENT),
                )));
            }
            ChatRole::Assistant => {
                lines.extend(render_markdown(&message.text));
            }
        }
        lines.push(Line::from(""));
    }

    if app.state.busy {
        lines.push(Line::from(Span::styled(
            format!("{} MathWhiz is thinking...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        )));
    }

    // Keep the newest turns in view on small terminals.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Tutor ");

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let shown = visible_tail(&app.state.tutor.input, inner_width.saturating_sub(1));

    let cursor = if app.state.busy { " " } else { "█" };
    let line = Line::from(vec![
        Span::styled(shown.to_string(), Style::default().fg(COLOR_ACCENT)),
        Span::styled(cursor.to_string(), Style::default().fg(COLOR_DIM)),
    ]);

    let title = if app.state.busy {
        " Waiting for reply... "
    } else {
        " Ask about algebra, calculus... (Enter to send) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
