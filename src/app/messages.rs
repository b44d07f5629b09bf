//! Completion messages for async gateway calls.

use crate::error::GatewayError;
use crate::models::{QuizQuestion, SolvedProblem};

/// Result of a spawned gateway task, applied to the store on the event loop.
///
/// Exactly one of these arrives per dispatched call; every variant releases
/// the busy flag when applied.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quiz generation succeeded.
    QuizReady(Vec<QuizQuestion>),
    /// Quiz generation failed; the question list stays empty.
    QuizFailed(GatewayError),
    /// Image solve succeeded.
    SolveReady(SolvedProblem),
    /// Image solve failed; prior solved data stays untouched.
    SolveFailed(GatewayError),
    /// Tutor replied (possibly with empty text).
    ChatReply(String),
    /// Tutor call failed; the user's turn stays visible, unanswered.
    ChatFailed(GatewayError),
}
