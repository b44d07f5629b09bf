//! AI gateway: the crate's single seam to the remote generative service.
//!
//! All three remote operations (image solve, quiz generation, tutor chat)
//! live behind the [`MathGateway`] trait so the orchestrator and the UI never
//! see the wire protocol. Production traffic goes through
//! [`GeminiClient`]; tests script a [`MockGateway`].

pub mod gemini;
pub mod mock;

pub use gemini::GeminiClient;
pub use mock::{MockGateway, RecordedCall};

use async_trait::async_trait;

use crate::capture::CapturedImage;
use crate::error::GatewayError;
use crate::models::{ChatMessage, QuizQuestion, SolvedProblem};

/// The three remote operations, each a single request/response exchange with
/// no local retry.
#[async_trait]
pub trait MathGateway: Send + Sync {
    /// Submit a photographed problem and decode the structured solution.
    async fn solve_from_image(
        &self,
        image: &CapturedImage,
    ) -> Result<SolvedProblem, GatewayError>;

    /// Request a multiple-choice quiz for a free-text topic label.
    async fn generate_quiz(&self, topic_label: &str) -> Result<Vec<QuizQuestion>, GatewayError>;

    /// Continue the tutor conversation with one new user message.
    ///
    /// The prior transcript is forwarded for session continuity. An empty
    /// remote reply is returned faithfully; the caller decides on fallbacks.
    async fn tutor_reply(
        &self,
        transcript: &[ChatMessage],
        message: &str,
    ) -> Result<String, GatewayError>;
}

/// Validate a decoded quiz payload at the gateway boundary.
///
/// Rejects quizzes that cannot be played: no questions, a question with
/// fewer than two options, or a correct answer that is not among the
/// options. Question and option counts beyond that are data-driven.
pub(crate) fn validate_quiz(questions: &[QuizQuestion]) -> Result<(), GatewayError> {
    if questions.is_empty() {
        return Err(GatewayError::decode("quiz contained no questions"));
    }
    for (idx, q) in questions.iter().enumerate() {
        if q.options.len() < 2 {
            return Err(GatewayError::decode(format!(
                "question {} has {} option(s); need at least two",
                idx + 1,
                q.options.len()
            )));
        }
        if !q.options.contains(&q.correct_answer) {
            return Err(GatewayError::decode(format!(
                "question {} lists a correct answer that is not among its options",
                idx + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "What is 2 + 2?".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
            explanation: "Addition.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_quiz() {
        let quiz = vec![question(&["3", "4", "5", "6"], "4")];
        assert!(validate_quiz(&quiz).is_ok());
    }

    #[test]
    fn test_validate_accepts_nonstandard_counts() {
        // three questions with three options each still plays
        let quiz = vec![
            question(&["1", "2", "3"], "2"),
            question(&["a", "b", "c"], "c"),
            question(&["x", "y", "z"], "x"),
        ];
        assert!(validate_quiz(&quiz).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_quiz() {
        let err = validate_quiz(&[]).unwrap_err();
        assert!(matches!(err, GatewayError::Decode { .. }));
    }

    #[test]
    fn test_validate_rejects_single_option() {
        let quiz = vec![question(&["4"], "4")];
        assert!(validate_quiz(&quiz).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_correct_answer() {
        let quiz = vec![question(&["3", "5", "6", "7"], "4")];
        let err = validate_quiz(&quiz).unwrap_err();
        assert!(format!("{err}").contains("not among its options"));
    }
}
