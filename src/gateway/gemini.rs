//! Gemini `generateContent` client.
//!
//! Builds one JSON request per operation and decodes the candidate text.
//! The solve and quiz operations negotiate structured output through
//! `responseMimeType`/`responseSchema`; the tutor operation carries a persona
//! `systemInstruction` and the prior transcript for session continuity.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::capture::CapturedImage;
use crate::config::Config;
use crate::error::GatewayError;
use crate::models::{ChatMessage, ChatRole, QuizQuestion, SolvedProblem};

use super::{validate_quiz, MathGateway};

/// Instruction accompanying the photographed problem.
const SOLVE_INSTRUCTION: &str = "Identify the math problem in this image. Provide the final \
     solution, a step-by-step breakdown, and a brief conceptual explanation. Format the \
     response in JSON.";

/// Persona carried on every tutor turn.
const TUTOR_PERSONA: &str = "You are MathWhiz, a friendly and expert math tutor. Your goal is \
     to help students understand concepts, not just give answers. Use clear steps and \
     encourage critical thinking. If asked a non-math question, gently guide the conversation \
     back to mathematics.";

fn quiz_prompt(topic_label: &str) -> String {
    format!(
        "Generate 5 multiple-choice quiz questions for the math topic: {topic_label}. Each \
         question should have 4 options, one correct answer, and a short explanation."
    )
}

/// Client for the Gemini REST API.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// POST one `generateContent` request and return the raw response value.
    async fn generate(&self, body: Value) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "generateContent failed");
            return Err(GatewayError::upstream_status(status.as_u16(), message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::decode(format!("response was not valid JSON: {e}")))
    }
}

#[async_trait]
impl MathGateway for GeminiClient {
    async fn solve_from_image(
        &self,
        image: &CapturedImage,
    ) -> Result<SolvedProblem, GatewayError> {
        let body = solve_request_body(image);
        let response = self.generate(body).await?;
        let text = extract_text(&response)
            .ok_or_else(|| GatewayError::decode("response contained no candidate text"))?;

        serde_json::from_str(&text)
            .map_err(|e| GatewayError::decode(format!("solution payload: {e}")))
    }

    async fn generate_quiz(&self, topic_label: &str) -> Result<Vec<QuizQuestion>, GatewayError> {
        let body = quiz_request_body(topic_label);
        let response = self.generate(body).await?;
        let text = extract_text(&response)
            .ok_or_else(|| GatewayError::decode("response contained no candidate text"))?;

        let questions: Vec<QuizQuestion> = serde_json::from_str(&text)
            .map_err(|e| GatewayError::decode(format!("quiz payload: {e}")))?;
        validate_quiz(&questions)?;
        Ok(questions)
    }

    async fn tutor_reply(
        &self,
        transcript: &[ChatMessage],
        message: &str,
    ) -> Result<String, GatewayError> {
        let body = chat_request_body(transcript, message);
        let response = self.generate(body).await?;
        // Chat has no schema contract; a reply with no text is just empty.
        Ok(extract_text(&response).unwrap_or_default())
    }
}

/// Pull the concatenated text parts out of the first candidate.
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn solve_request_body(image: &CapturedImage) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "inlineData": { "mimeType": image.mime_type, "data": image.to_base64() } },
                { "text": SOLVE_INSTRUCTION }
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "solution": { "type": "STRING" },
                    "steps": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "explanation": { "type": "STRING" }
                },
                "required": ["solution", "steps", "explanation"]
            }
        }
    })
}

fn quiz_request_body(topic_label: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [ { "text": quiz_prompt(topic_label) } ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswer": { "type": "STRING" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer", "explanation"]
                }
            }
        }
    })
}

fn chat_request_body(transcript: &[ChatMessage], message: &str) -> Value {
    let mut contents: Vec<Value> = transcript
        .iter()
        .map(|m| {
            let role = match m.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "model",
            };
            json!({ "role": role, "parts": [ { "text": m.text } ] })
        })
        .collect();
    contents.push(json!({ "role": "user", "parts": [ { "text": message } ] }));

    json!({
        "contents": contents,
        "systemInstruction": { "parts": [ { "text": TUTOR_PERSONA } ] }
    })
}
