use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A catalog entry the user can pick a quiz from.
///
/// The catalog is static and defined at process start; topics are never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Single glyph shown next to the title in the Learn section.
    pub icon: String,
}

impl Topic {
    fn new(id: &str, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The built-in topic catalog shown in the Learn section.
pub static MATH_TOPICS: Lazy<Vec<Topic>> = Lazy::new(|| {
    vec![
        Topic::new(
            "arithmetic",
            "Arithmetic",
            "Basic operations, fractions, and decimals.",
            "+",
        ),
        Topic::new(
            "algebra",
            "Algebra",
            "Equations, variables, and polynomials.",
            "x",
        ),
        Topic::new(
            "geometry",
            "Geometry",
            "Shapes, angles, and theorems.",
            "△",
        ),
        Topic::new(
            "calculus",
            "Calculus",
            "Limits, derivatives, and integrals.",
            "∫",
        ),
        Topic::new(
            "statistics",
            "Statistics",
            "Probability, data, and distributions.",
            "Σ",
        ),
    ]
});

/// A solved problem as returned by the image-solve operation.
///
/// All three fields are required; the gateway rejects payloads that omit any
/// of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolvedProblem {
    /// The final answer, e.g. `x = 4`.
    pub solution: String,
    /// Ordered step-by-step breakdown.
    pub steps: Vec<String>,
    /// Short conceptual explanation of the underlying idea.
    pub explanation: String,
}

/// A single multiple-choice question from a generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    /// Answer options; the service is asked for exactly four.
    pub options: Vec<String>,
    /// Must equal one of `options` (enforced at the gateway boundary).
    pub correct_answer: String,
    /// Shown after the quiz as a short rationale.
    pub explanation: String,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the tutor conversation.
///
/// The transcript is append-only for the lifetime of the process; failed
/// exchanges never produce an assistant turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
