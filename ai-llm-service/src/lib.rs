//! Chat-completion client for OpenAI-compatible APIs.
//!
//! - [`config`]: model config, provider kind, env-driven defaults.
//! - [`ChatCompletionService`]: one reusable HTTP client, one request per call.
//! - [`CompletionOutcome`]: reply / rate-limited / missing-choices classification.
//! - [`telemetry`]: log layer and filter used by the backend binary.
//!
//! # Example
//! ```no_run
//! use ai_llm_service::{ChatCompletionService, ChatMessage, CompletionOutcome, config_chat};
//!
//! # #[tokio::main] async fn main() -> Result<(), ai_llm_service::AiLlmError> {
//! let svc = ChatCompletionService::new(config_chat()?)?;
//! let outcome = svc
//!     .ask(&[ChatMessage::system("Trả lời bằng tiếng Việt."), ChatMessage::user("Xin chào")])
//!     .await?;
//! if let CompletionOutcome::Reply(text) = outcome {
//!     println!("{text}");
//! }
//! # Ok(()) }
//! ```

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use chat::{ChatMessage, ChatRole, CompletionOutcome, CompletionResponse};
pub use config::{
    default_config::{config_chat, config_chat_with},
    llm_model_config::LlmModelConfig,
    llm_provider::LlmProvider,
};
pub use error_handler::{AiLlmError, ConfigError};
pub use services::chat_completion_service::ChatCompletionService;
