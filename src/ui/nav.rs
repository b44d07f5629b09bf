//! Persistent bottom navigation bar.
//!
//! Always visible and always enabled: switching sections never cancels an
//! in-flight call.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::Section;

use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the section selector line.
pub fn render_nav(frame: &mut Frame, area: Rect, active: Section) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, section) in Section::ALL.iter().enumerate() {
        let is_active = *section == active;

        if is_active {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                section.title().to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(
                section.title().to_string(),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx < Section::ALL.len() - 1 {
            spans.push(Span::raw("    "));
        }
    }

    spans.push(Span::styled(
        "    Tab to switch".to_string(),
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
