//! Markdown rendering for tutor replies.
//!
//! Converts the assistant's markdown to styled ratatui Lines. Covers the
//! subset a tutoring reply actually uses: paragraphs, headings, bold,
//! italic, inline code, fenced code blocks, and bullet lists.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Style for fenced code blocks.
const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

/// Style for inline code.
const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Style for headings.
const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Render markdown text to a vector of styled Lines.
///
/// Each newline becomes a separate Line object so step-by-step working and
/// code blocks keep their layout.
fn flush(spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let parser = Parser::new(text);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();

    // Style stack for nested formatting
    let mut style_stack: Vec<Style> = vec![Style::default()];
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(_) => {
                    flush(&mut current_spans, &mut lines);
                    in_code_block = true;
                    style_stack.push(STYLE_CODE_BLOCK);
                }
                Tag::Heading { .. } => {
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::BOLD));
                }
                Tag::Emphasis => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::ITALIC));
                }
                Tag::Paragraph => {
                    if !lines.is_empty() {
                        flush(&mut current_spans, &mut lines);
                        lines.push(Line::from(""));
                    }
                }
                Tag::Item => {
                    flush(&mut current_spans, &mut lines);
                    let current_style = *style_stack.last().unwrap_or(&Style::default());
                    current_spans.push(Span::styled("• ".to_string(), current_style));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::CodeBlock => {
                    flush(&mut current_spans, &mut lines);
                    in_code_block = false;
                    style_stack.pop();
                }
                TagEnd::Heading(_) => {
                    flush(&mut current_spans, &mut lines);
                    style_stack.pop();
                }
                TagEnd::Strong | TagEnd::Emphasis => {
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => {
                    flush(&mut current_spans, &mut lines);
                }
                _ => {}
            },
            Event::Text(text_content) => {
                let current_style = *style_stack.last().unwrap_or(&Style::default());
                let mut first = true;
                for part in text_content.split('\n') {
                    if !first {
                        flush(&mut current_spans, &mut lines);
                        if !in_code_block {
                            lines.push(Line::from(""));
                        }
                    }
                    first = false;
                    if !part.is_empty() {
                        current_spans.push(Span::styled(part.to_string(), current_style));
                    }
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
            }
            Event::SoftBreak | Event::HardBreak => {
                flush(&mut current_spans, &mut lines);
            }
            _ => {}
        }
    }

    flush(&mut current_spans, &mut lines);

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = render_markdown("The derivative measures rate of change.");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "The derivative measures rate of change.");
    }

    #[test]
    fn test_bold_gets_modifier() {
        let lines = render_markdown("This is **important** here.");
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "important")
            .expect("bold span missing");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_inline_code_styled() {
        let lines = render_markdown("Try `x = 4` next.");
        let code = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "x = 4")
            .expect("code span missing");
        assert_eq!(code.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_bullet_list() {
        let lines = render_markdown("- isolate x\n- divide both sides");
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert!(rendered.iter().any(|l| l == "• isolate x"));
        assert!(rendered.iter().any(|l| l == "• divide both sides"));
    }

    #[test]
    fn test_code_block_keeps_lines() {
        let lines = render_markdown("```\n2x = 8\nx = 4\n```");
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert!(rendered.contains(&"2x = 8".to_string()));
        assert!(rendered.contains(&"x = 4".to_string()));
    }

    #[test]
    fn test_empty_input_yields_one_blank_line() {
        let lines = render_markdown("");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "");
    }
}
