//! Solve section: image path input and the solved breakdown.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::{spinner_frame, visible_tail};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_SOLUTION};

pub fn render_solve(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // path input
            Constraint::Min(3),    // result area
        ])
        .split(area);

    render_path_input(frame, chunks[0], app);
    render_result(frame, chunks[1], app);
}

fn render_path_input(frame: &mut Frame, area: Rect, app: &App) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let shown = visible_tail(&app.state.solve.path_input, inner_width.saturating_sub(1));

    let cursor = if app.state.busy { " " } else { "█" };
    let line = Line::from(vec![
        Span::styled(shown.to_string(), Style::default().fg(COLOR_ACCENT)),
        Span::styled(cursor.to_string(), Style::default().fg(COLOR_DIM)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Image path (Enter to solve) ");

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(preview) = &app.state.solve.preview {
        lines.push(Line::from(vec![
            Span::styled("Submitted: ".to_string(), Style::default().fg(COLOR_DIM)),
            Span::styled(preview.summary(), Style::default().fg(COLOR_ACCENT)),
        ]));
        lines.push(Line::from(""));
    }

    if app.state.busy {
        lines.push(Line::from(Span::styled(
            format!(
                "{} Analyzing your math problem...",
                spinner_frame(app.tick_count)
            ),
            Style::default().fg(COLOR_ACTIVE),
        )));
    } else if let Some(solved) = &app.state.solve.solved {
        lines.push(Line::from(Span::styled(
            "Final Solution",
            Style::default()
                .fg(COLOR_SOLUTION)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", solved.solution),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Step-by-step Breakdown",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        for (idx, step) in solved.steps.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", idx + 1), Style::default().fg(COLOR_DIM)),
                Span::styled(step.clone(), Style::default().fg(COLOR_ACCENT)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "The Concept",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  \"{}\"", solved.explanation),
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Type the path to a photo of a math problem to get an instant solution.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Solve ");

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
