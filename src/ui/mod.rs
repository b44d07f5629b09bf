//! UI rendering for the MathWhiz sections.
//!
//! Pure presentation: every function renders from `&App` and emits nothing
//! but widgets. Intents are produced by the key handlers in `crate::app`,
//! never here.

mod helpers;
mod learn;
mod nav;
mod quiz;
mod solve;
pub mod theme;
mod tutor;

pub use helpers::{spinner_frame, visible_tail, SPINNER_FRAMES};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::Section;

use theme::{COLOR_DIM, COLOR_ERROR};

/// Render the full UI for one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // active section
            Constraint::Length(1), // status line
            Constraint::Length(1), // navigation bar
        ])
        .split(frame.area());

    match app.state.section {
        Section::Learn => learn::render_learn(frame, chunks[0], app),
        Section::Solve => solve::render_solve(frame, chunks[0], app),
        Section::Quiz => quiz::render_quiz(frame, chunks[0], app),
        Section::Tutor => tutor::render_tutor(frame, chunks[0], app),
    }

    render_status(frame, chunks[1], app);
    nav::render_nav(frame, chunks[2], app.state.section);
}

/// One-line status: error banner when present, key hints otherwise.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.state.status {
        let color = if status.is_error { COLOR_ERROR } else { COLOR_DIM };
        Line::from(Span::styled(
            format!("  {}", status.text),
            Style::default().fg(color),
        ))
    } else {
        let hint = match app.state.section {
            Section::Learn => "↑/↓ select topic · Enter start quiz · Ctrl+C quit",
            Section::Solve => "Type an image path · Enter solve · Esc back",
            Section::Quiz => "1-4 answer · Esc back",
            Section::Tutor => "Type a message · Enter send · Esc back",
        };
        Line::from(Span::styled(
            format!("  {hint}"),
            Style::default().fg(COLOR_DIM),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockGateway;
    use crate::models::{ChatMessage, QuizQuestion, SolvedProblem};
    use crate::state::StatusMessage;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(Arc::new(MockGateway::new()))
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
        terminal
            .draw(|frame| render(frame, app))
            .expect("Failed to draw frame");

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_learn_section_lists_topics() {
        let app = test_app();
        let screen = draw(&app);

        assert!(screen.contains("Welcome to MathWhiz!"));
        assert!(screen.contains("Arithmetic"));
        assert!(screen.contains("Statistics"));
    }

    #[tokio::test]
    async fn test_nav_shows_all_sections() {
        let app = test_app();
        let screen = draw(&app);

        for section in Section::ALL {
            assert!(screen.contains(section.title()));
        }
    }

    #[tokio::test]
    async fn test_quiz_empty_state() {
        let mut app = test_app();
        app.state.section = Section::Quiz;
        let screen = draw(&app);

        assert!(screen.contains("Choose a topic from the Learn tab"));
    }

    #[tokio::test]
    async fn test_quiz_question_and_progress() {
        let mut app = test_app();
        app.state.section = Section::Quiz;
        app.state.quiz.install(vec![
            QuizQuestion {
                question: "What is 7 * 6?".to_string(),
                options: vec!["42".into(), "36".into(), "48".into(), "40".into()],
                correct_answer: "42".to_string(),
                explanation: String::new(),
            },
            QuizQuestion {
                question: "What is 9 - 4?".to_string(),
                options: vec!["5".into(), "4".into(), "3".into(), "6".into()],
                correct_answer: "5".to_string(),
                explanation: String::new(),
            },
        ]);

        let screen = draw(&app);
        assert!(screen.contains("Question 1/2"));
        assert!(screen.contains("What is 7 * 6?"));
        assert!(screen.contains("[1] 42"));
    }

    #[tokio::test]
    async fn test_quiz_score_screen() {
        let mut app = test_app();
        app.state.section = Section::Quiz;
        app.state.quiz.install(vec![QuizQuestion {
            question: "2+2?".to_string(),
            options: vec!["4".into(), "5".into()],
            correct_answer: "4".to_string(),
            explanation: String::new(),
        }]);
        app.state.quiz.record_answer("4");

        let screen = draw(&app);
        assert!(screen.contains("Quiz Complete!"));
        assert!(screen.contains("Try Again"));
    }

    #[tokio::test]
    async fn test_solve_section_shows_solution() {
        let mut app = test_app();
        app.state.section = Section::Solve;
        app.state.solve.solved = Some(SolvedProblem {
            solution: "x = 4".to_string(),
            steps: vec!["2x = 8".to_string(), "x = 4".to_string()],
            explanation: "Divide both sides by 2.".to_string(),
        });

        let screen = draw(&app);
        assert!(screen.contains("Final Solution"));
        assert!(screen.contains("x = 4"));
        assert!(screen.contains("1. 2x = 8"));
        assert!(screen.contains("Divide both sides by 2."));
    }

    #[tokio::test]
    async fn test_tutor_empty_state_and_transcript() {
        let mut app = test_app();
        app.state.section = Section::Tutor;

        let empty_screen = draw(&app);
        assert!(empty_screen.contains("I'm MathWhiz, your tutor!"));

        app.state.tutor.transcript.push(ChatMessage::user("hi"));
        app.state
            .tutor
            .transcript
            .push(ChatMessage::assistant("Hello! What shall we solve?"));

        let screen = draw(&app);
        assert!(screen.contains("You"));
        assert!(screen.contains("MathWhiz"));
        assert!(screen.contains("Hello! What shall we solve?"));
    }

    #[tokio::test]
    async fn test_error_banner_in_status_line() {
        let mut app = test_app();
        app.state.status = Some(StatusMessage::error("Could not reach the AI service."));

        let screen = draw(&app);
        assert!(screen.contains("Could not reach the AI service."));
    }

    #[tokio::test]
    async fn test_busy_spinner_in_quiz_section() {
        let mut app = test_app();
        app.state.section = Section::Quiz;
        app.state.busy = true;

        let screen = draw(&app);
        assert!(screen.contains("Preparing your interactive quiz"));
    }
}
