//! Learn section: the topic catalog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::MATH_TOPICS;

use super::theme::{topic_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

pub fn render_learn(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "Welcome to MathWhiz!",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Select a topic to start your learning journey today.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
    ];

    for (idx, topic) in MATH_TOPICS.iter().enumerate() {
        let selected = idx == app.state.learn_cursor;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(topic_color(&topic.id))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), title_style),
            Span::styled(format!("{} ", topic.icon), title_style),
            Span::styled(topic.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", topic.description),
            Style::default().fg(COLOR_DIM),
        )));
        if idx < MATH_TOPICS.len() - 1 {
            lines.push(Line::from(""));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Learn ");

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
