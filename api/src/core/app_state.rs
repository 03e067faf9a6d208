use ai_llm_service::{ChatCompletionService, LlmModelConfig};
use local_qa::LocalMatcher;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Read-only after construction; handlers receive it as `Arc<AppState>`.
#[derive(Debug)]
pub struct AppState {
    /// Built-in keyword answers checked before any LLM call.
    pub matcher: LocalMatcher,
    /// Client for the chat-completion API (one reusable connection pool).
    pub llm: ChatCompletionService,
}

impl AppState {
    /// Builds state with the built-in Q&A table and a client for `llm`.
    pub fn new(llm: LlmModelConfig) -> Result<Self, AppError> {
        Self::with_matcher(LocalMatcher::builtin(), llm)
    }

    /// Builds state with a custom matcher.
    pub fn with_matcher(matcher: LocalMatcher, llm: LlmModelConfig) -> Result<Self, AppError> {
        Ok(Self {
            matcher,
            llm: ChatCompletionService::new(llm)?,
        })
    }
}
