use crate::config::llm_provider::LlmProvider;

/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `provider`: Which backend serves the request (OpenRouter, OpenAI).
/// - `model`: The model identifier (e.g., `"google/gemini-2.0-flash-exp:free"`).
/// - `endpoint`: Base URL; `/v1/chat/completions` is appended.
/// - `api_key`: Bearer token.
/// - `timeout_secs`: Optional request timeout in seconds (default 60).
/// - `referer`, `title`: OpenRouter attribution headers.
///
/// # Examples
///
/// ```
/// use ai_llm_service::{LlmModelConfig, LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::OpenRouter,
///     model: "google/gemini-2.0-flash-exp:free".to_string(),
///     endpoint: "https://openrouter.ai/api".to_string(),
///     api_key: Some("sk-or-...".to_string()),
///     timeout_secs: Some(30),
///     referer: Some("localhost".to_string()),
///     title: Some("Wound-AI-Assistant".to_string()),
/// };
/// assert!(cfg.chat_url().ends_with("/v1/chat/completions"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// Base URL of the API.
    pub endpoint: String,

    /// API key for bearer authentication.
    pub api_key: Option<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,

    /// `HTTP-Referer` sent to OpenRouter.
    pub referer: Option<String>,

    /// `X-Title` sent to OpenRouter.
    pub title: Option<String>,
}

impl LlmModelConfig {
    /// Default outbound timeout when `timeout_secs` is unset.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// Full chat-completions URL derived from `endpoint`.
    pub fn chat_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim().trim_end_matches('/')
        )
    }

    /// Effective timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }
}
