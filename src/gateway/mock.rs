//! Mock gateway for testing.
//!
//! Scripts per-operation response queues and records every call so tests can
//! verify orchestration without network access.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::capture::CapturedImage;
use crate::error::GatewayError;
use crate::models::{ChatMessage, QuizQuestion, SolvedProblem};

use super::MathGateway;

/// A recorded gateway call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// File name of the submitted image.
    Solve(String),
    /// Topic label the quiz was requested for.
    Quiz(String),
    /// (transcript length at call time, new message).
    Chat(usize, String),
}

/// Scripted test double for [`MathGateway`].
///
/// Each operation pops the next scripted result from its queue; an empty
/// queue yields an upstream error, so a test that forgets to script a
/// response fails loudly instead of hanging.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    solve_responses: Arc<Mutex<VecDeque<Result<SolvedProblem, GatewayError>>>>,
    quiz_responses: Arc<Mutex<VecDeque<Result<Vec<QuizQuestion>, GatewayError>>>>,
    reply_responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_solve(&self, response: Result<SolvedProblem, GatewayError>) {
        self.solve_responses.lock().unwrap().push_back(response);
    }

    pub fn push_quiz(&self, response: Result<Vec<QuizQuestion>, GatewayError>) {
        self.quiz_responses.lock().unwrap().push_back(response);
    }

    pub fn push_reply(&self, response: Result<String, GatewayError>) {
        self.reply_responses.lock().unwrap().push_back(response);
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn unscripted() -> GatewayError {
        GatewayError::upstream("no scripted response")
    }
}

#[async_trait]
impl MathGateway for MockGateway {
    async fn solve_from_image(
        &self,
        image: &CapturedImage,
    ) -> Result<SolvedProblem, GatewayError> {
        self.record(RecordedCall::Solve(image.file_name.clone()));
        self.solve_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted()))
    }

    async fn generate_quiz(&self, topic_label: &str) -> Result<Vec<QuizQuestion>, GatewayError> {
        self.record(RecordedCall::Quiz(topic_label.to_string()));
        self.quiz_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted()))
    }

    async fn tutor_reply(
        &self,
        transcript: &[ChatMessage],
        message: &str,
    ) -> Result<String, GatewayError> {
        self.record(RecordedCall::Chat(transcript.len(), message.to_string()));
        self.reply_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted()))
    }
}
