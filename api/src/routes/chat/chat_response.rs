use local_qa::LocalQaEntry;
use serde::{Deserialize, Serialize};

/// Reply sent when the upstream free tier is overloaded.
pub const RATE_LIMIT_REPLY: &str =
    "Hiện tại máy chủ Gemini miễn phí đang quá tải. Bạn vui lòng thử lại sau vài phút nhé!";

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Built-in Q&A table.
    Local,
    /// Chat-completion API.
    #[serde(rename = "gemini")]
    Remote,
    /// Upstream overloaded; reply is [`RATE_LIMIT_REPLY`].
    RateLimit,
}

/// Response payload for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
}

/// Successful resolution of a chat request, before it is shaped for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Local(&'static LocalQaEntry),
    Remote(String),
    RateLimited,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        match outcome {
            ChatOutcome::Local(entry) => ChatResponse {
                reply: entry.answer.to_string(),
                source: ReplySource::Local,
            },
            ChatOutcome::Remote(reply) => ChatResponse {
                reply,
                source: ReplySource::Remote,
            },
            ChatOutcome::RateLimited => ChatResponse {
                reply: RATE_LIMIT_REPLY.to_string(),
                source: ReplySource::RateLimit,
            },
        }
    }
}
