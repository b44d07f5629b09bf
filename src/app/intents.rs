//! Intent handlers and completion application.
//!
//! Intents mirror the user actions the presentation tree can emit. Every
//! remote-call intent follows the same discipline: refuse while busy, set
//! busy, spawn the gateway call, release busy in the completion handler on
//! every path.

use std::path::PathBuf;
use std::sync::Arc;

use crate::capture;
use crate::models::{ChatMessage, MATH_TOPICS};
use crate::state::{Section, StatusMessage};

use super::{App, AppMessage};

/// Quiz label used when restarting without a selected topic.
pub const DEFAULT_QUIZ_LABEL: &str = "general math";

/// Assistant turn appended when the tutor returns an empty reply.
pub const CHAT_FALLBACK_REPLY: &str = "I'm not sure how to respond to that.";

/// A user action, emitted by the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Change the active section. Always accepted, busy or not.
    SwitchSection(Section),
    /// Pick a topic from the Learn catalog (index into [`MATH_TOPICS`]).
    SelectTopic(usize),
    /// Generate a quiz for a free-text label.
    StartQuiz(String),
    /// Submit an image file for solving.
    SubmitImage(PathBuf),
    /// Answer the current quiz question (index into its options).
    AnswerQuestion(usize),
    /// Regenerate a quiz for the previously selected topic.
    RestartQuiz,
    /// Send the tutor input buffer as a chat message.
    SendChatMessage,
}

impl App {
    /// Process one user intent.
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::SwitchSection(section) => {
                self.state.section = section;
            }
            Intent::SelectTopic(idx) => self.select_topic(idx),
            Intent::StartQuiz(label) => self.start_quiz(label),
            Intent::SubmitImage(path) => self.submit_image(path),
            Intent::AnswerQuestion(option_idx) => self.answer_question(option_idx),
            Intent::RestartQuiz => self.restart_quiz(),
            Intent::SendChatMessage => self.send_chat_message(),
        }
        self.needs_redraw = true;
    }

    /// Apply one async completion to the store.
    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::QuizReady(questions) => {
                self.state.quiz.install(questions);
            }
            AppMessage::QuizFailed(err) => {
                tracing::warn!(error = %err, "quiz generation failed");
                self.state.status = Some(StatusMessage::error(err.user_message()));
            }
            AppMessage::SolveReady(problem) => {
                self.state.solve.solved = Some(problem);
            }
            AppMessage::SolveFailed(err) => {
                tracing::warn!(error = %err, "image solve failed");
                self.state.status = Some(StatusMessage::error(err.user_message()));
            }
            AppMessage::ChatReply(text) => {
                let text = if text.trim().is_empty() {
                    CHAT_FALLBACK_REPLY.to_string()
                } else {
                    text
                };
                self.state.tutor.transcript.push(ChatMessage::assistant(text));
            }
            AppMessage::ChatFailed(err) => {
                // Chat failures stay out of the transcript and the banner;
                // the unanswered user turn is the signal to resend.
                tracing::warn!(error = %err, "tutor reply failed");
            }
        }
        self.state.busy = false;
        self.needs_redraw = true;
    }

    fn select_topic(&mut self, idx: usize) {
        let Some(topic) = MATH_TOPICS.get(idx) else {
            return;
        };
        self.state.selected_topic = Some(idx);
        self.state.section = Section::Quiz;
        self.start_quiz(topic.title.clone());
    }

    fn start_quiz(&mut self, label: String) {
        if self.state.busy {
            return;
        }
        self.state.quiz.reset();
        self.state.status = None;
        self.state.busy = true;

        tracing::info!(topic = %label, "requesting quiz");
        let gateway = Arc::clone(&self.gateway);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match gateway.generate_quiz(&label).await {
                Ok(questions) => AppMessage::QuizReady(questions),
                Err(err) => AppMessage::QuizFailed(err),
            };
            let _ = tx.send(message);
        });
    }

    fn submit_image(&mut self, path: PathBuf) {
        if self.state.busy {
            return;
        }

        // Capture failures are local and synchronous; busy is never taken.
        let image = match capture::load_image(&path) {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!(error = %err, "image capture failed");
                self.state.status = Some(StatusMessage::error(err.user_message()));
                return;
            }
        };

        self.state.solve.preview = Some(image.preview());
        self.state.status = None;
        self.state.busy = true;

        tracing::info!(file = %image.file_name, "requesting solve");
        let gateway = Arc::clone(&self.gateway);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match gateway.solve_from_image(&image).await {
                Ok(problem) => AppMessage::SolveReady(problem),
                Err(err) => AppMessage::SolveFailed(err),
            };
            let _ = tx.send(message);
        });
    }

    fn answer_question(&mut self, option_idx: usize) {
        let Some(question) = self.state.quiz.current_question() else {
            return;
        };
        let Some(selected) = question.options.get(option_idx).cloned() else {
            return;
        };
        self.state.quiz.record_answer(&selected);
    }

    fn restart_quiz(&mut self) {
        let label = self
            .state
            .selected_topic
            .and_then(|idx| MATH_TOPICS.get(idx))
            .map(|topic| topic.title.clone())
            .unwrap_or_else(|| DEFAULT_QUIZ_LABEL.to_string());
        self.start_quiz(label);
    }

    fn send_chat_message(&mut self) {
        if self.state.busy {
            return;
        }
        let text = self.state.tutor.input.trim().to_string();
        if text.is_empty() {
            return;
        }

        // Optimistic append: the user's turn is visible before the reply.
        let prior = self.state.tutor.transcript.clone();
        self.state.tutor.transcript.push(ChatMessage::user(text.clone()));
        self.state.tutor.input.clear();
        self.state.busy = true;

        tracing::info!("sending tutor message");
        let gateway = Arc::clone(&self.gateway);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match gateway.tutor_reply(&prior, &text).await {
                Ok(reply) => AppMessage::ChatReply(reply),
                Err(err) => AppMessage::ChatFailed(err),
            };
            let _ = tx.send(message);
        });
    }
}
