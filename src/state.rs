//! View-observable application state.
//!
//! Everything the presentation tree renders lives here. The store is owned
//! by [`crate::app::App`] and mutated only by its intent and completion
//! handlers; the UI receives `&AppState`.

use crate::capture::ImagePreview;
use crate::models::{ChatMessage, QuizQuestion, SolvedProblem};

/// The four mutually exclusive top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Learn,
    Solve,
    Quiz,
    Tutor,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Learn,
        Section::Solve,
        Section::Quiz,
        Section::Tutor,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Learn => "Learn",
            Section::Solve => "Solve",
            Section::Quiz => "Quiz",
            Section::Tutor => "Tutor",
        }
    }

    /// Next section in navigation order, wrapping around.
    pub fn next(self) -> Section {
        match self {
            Section::Learn => Section::Solve,
            Section::Solve => Section::Quiz,
            Section::Quiz => Section::Tutor,
            Section::Tutor => Section::Learn,
        }
    }

    /// Previous section in navigation order, wrapping around.
    pub fn prev(self) -> Section {
        match self {
            Section::Learn => Section::Tutor,
            Section::Solve => Section::Learn,
            Section::Quiz => Section::Solve,
            Section::Tutor => Section::Quiz,
        }
    }
}

/// Transient banner shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/// One quiz run: the generated questions plus progression through them.
///
/// Strict linear state machine: `no questions` -> `in progress` ->
/// `finished`. While in progress, `index` stays within
/// `[0, questions.len())`; `finished` flips exactly when the last question
/// is answered.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub index: usize,
    pub score: usize,
    pub finished: bool,
}

impl QuizSession {
    /// Clear progression and questions ahead of a new generation request.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.index = 0;
        self.score = 0;
        self.finished = false;
    }

    /// Install freshly generated questions, restarting progression.
    pub fn install(&mut self, questions: Vec<QuizQuestion>) {
        self.questions = questions;
        self.index = 0;
        self.score = 0;
        self.finished = false;
    }

    pub fn in_progress(&self) -> bool {
        !self.questions.is_empty() && !self.finished
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.in_progress() {
            self.questions.get(self.index)
        } else {
            None
        }
    }

    /// Record an answer for the current question.
    ///
    /// Exact string comparison against the correct answer; increments the
    /// score on match, then either advances or finishes. Returns whether the
    /// answer was correct, or `None` when no question was answerable.
    pub fn record_answer(&mut self, selected: &str) -> Option<bool> {
        let question = self.current_question()?;
        let correct = selected == question.correct_answer;
        if correct {
            self.score += 1;
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.finished = true;
        }
        Some(correct)
    }
}

/// Transient state of the Solve section.
#[derive(Debug, Clone, Default)]
pub struct SolveState {
    /// Path input buffer.
    pub path_input: String,
    /// Descriptor of the most recently submitted image.
    pub preview: Option<ImagePreview>,
    /// Last successful solve; untouched by failed attempts.
    pub solved: Option<SolvedProblem>,
}

/// Transient state of the Tutor section.
#[derive(Debug, Clone, Default)]
pub struct TutorState {
    /// Append-only conversation transcript.
    pub transcript: Vec<ChatMessage>,
    /// Message input buffer.
    pub input: String,
}

/// The full view-state store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub section: Section,
    /// True strictly between dispatch and resolution of a gateway call.
    pub busy: bool,
    /// Index into [`crate::models::MATH_TOPICS`].
    pub selected_topic: Option<usize>,
    /// Cursor position in the Learn section's topic list.
    pub learn_cursor: usize,
    pub quiz: QuizSession,
    pub solve: SolveState,
    pub tutor: TutorState,
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            section: Section::Learn,
            busy: false,
            selected_topic: None,
            learn_cursor: 0,
            quiz: QuizSession::default(),
            solve: SolveState::default(),
            tutor: TutorState::default(),
            status: None,
        }
    }
}
