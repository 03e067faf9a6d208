//! Chat payload types and interpretation of `/v1/chat/completions` answers.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One conversation turn as sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Raw upstream answer: HTTP status plus the JSON body, whatever its shape.
///
/// Upstream error payloads (`{"error": {...}}`) come with non-2xx statuses,
/// so the body is kept regardless of status and interpreted by
/// [`CompletionOutcome::classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// What an upstream answer means for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// Text of the first choice.
    Reply(String),
    /// Upstream is overloaded (`error.code == 429` or HTTP 429).
    RateLimited,
    /// Body carries no `choices` array; the body is returned for diagnostics.
    MissingChoices(Value),
}

/// Failure to read `choices[0].message.content` from a body that has `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedChoice(pub &'static str);

impl CompletionOutcome {
    /// Interprets an upstream answer.
    ///
    /// Order matters: the rate-limit signal wins over everything else in the
    /// body, then a missing `choices` array, then content extraction.
    ///
    /// # Errors
    /// [`MalformedChoice`] when `choices` exists but its first element has no
    /// string `message.content`.
    pub fn classify(resp: CompletionResponse) -> Result<Self, MalformedChoice> {
        if resp.status == StatusCode::TOO_MANY_REQUESTS || is_rate_limit_code(&resp.body) {
            return Ok(CompletionOutcome::RateLimited);
        }

        let Some(choices) = resp.body.get("choices").and_then(Value::as_array) else {
            return Ok(CompletionOutcome::MissingChoices(resp.body));
        };

        let first = choices
            .first()
            .ok_or(MalformedChoice("`choices` is empty"))?;

        first
            .pointer("/message/content")
            .and_then(Value::as_str)
            .map(|s| CompletionOutcome::Reply(s.to_string()))
            .ok_or(MalformedChoice("expected `choices[0].message.content` string"))
    }
}

/// `error.code` equals 429, as a number or a numeric string.
fn is_rate_limit_code(body: &Value) -> bool {
    match body.pointer("/error/code") {
        Some(Value::Number(n)) => n.as_f64() == Some(429.0),
        Some(Value::String(s)) => s.trim() == "429",
        _ => false,
    }
}
