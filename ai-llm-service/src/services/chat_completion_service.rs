//! Chat-completion service for OpenAI-compatible APIs (OpenRouter, OpenAI).
//!
//! Minimal, non-streaming client. The endpoint is derived from
//! `LlmModelConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions: chat completion
//!
//! Constructor validation:
//! - `cfg.api_key` must be present and non-blank
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.model` must not be empty
//!
//! One call, one request: nothing here retries.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::{
    chat::{ChatMessage, CompletionOutcome, CompletionResponse},
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, ConfigError, make_snippet, validate_http_endpoint},
};

/// Thin client for `/v1/chat/completions`.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (timeout, bearer auth, attribution headers).
///
/// High-level operations:
/// - [`ChatCompletionService::complete`]: raw status + JSON body
/// - [`ChatCompletionService::ask`]: `complete` followed by classification
#[derive(Debug)]
pub struct ChatCompletionService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl ChatCompletionService {
    /// Creates a new [`ChatCompletionService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::MissingApiKey`] if `cfg.api_key` is `None` or blank
    /// - [`ConfigError::InvalidFormat`] if `cfg.endpoint` is not http(s)
    /// - [`ConfigError::EmptyModel`] if `cfg.model` is blank
    /// - [`ConfigError::InvalidHeader`] if a header value has invalid characters
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        // 1) API key must be present.
        let api_key = cfg
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        // 2) Endpoint must use http/https.
        validate_http_endpoint("LLM_ENDPOINT", cfg.endpoint.trim())?;

        // 3) Model must be named.
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }

        // 4) HTTP client: timeout + default headers.
        let timeout = Duration::from_secs(cfg.timeout_secs());

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| ConfigError::InvalidHeader("Authorization"))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if cfg.provider.sends_attribution() {
            if let Some(referer) = cfg.referer.as_deref() {
                headers.insert(
                    header::HeaderName::from_static("http-referer"),
                    header::HeaderValue::from_str(referer)
                        .map_err(|_| ConfigError::InvalidHeader("HTTP-Referer"))?,
                );
            }
            if let Some(title) = cfg.title.as_deref() {
                headers.insert(
                    header::HeaderName::from_static("x-title"),
                    header::HeaderValue::from_str(title)
                        .map_err(|_| ConfigError::InvalidHeader("X-Title"))?,
                );
            }
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let url_chat = cfg.chat_url();

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = timeout.as_secs(),
            "ChatCompletionService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Config this service was built from.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Sends one `{model, messages}` request and returns status plus JSON body.
    ///
    /// Non-2xx statuses are *not* errors: OpenRouter reports overload and auth
    /// problems as JSON bodies, which the caller needs to inspect.
    ///
    /// # Errors
    /// - [`AiLlmError::HttpTransport`] for connect/timeout/body-read failures
    /// - [`AiLlmError::Decode`] if the body is not JSON
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest {
            model: &self.cfg.model,
            messages,
        };

        debug!(
            model = %self.cfg.model,
            messages = messages.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                let snippet = make_snippet(&text);
                error!(
                    %status,
                    error = %e,
                    %snippet,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "chat completion returned a non-JSON body"
                );
                return Err(AiLlmError::Decode {
                    url: self.url_chat.clone(),
                    reason: format!("invalid JSON ({e}): {snippet}"),
                });
            }
        };

        if status.is_success() {
            info!(
                %status,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion completed"
            );
        } else {
            warn!(
                %status,
                snippet = %make_snippet(&text),
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );
        }

        Ok(CompletionResponse { status, body })
    }

    /// [`complete`](Self::complete) followed by [`CompletionOutcome::classify`].
    ///
    /// # Errors
    /// Everything `complete` returns, plus [`AiLlmError::Decode`] when
    /// `choices` is present but holds no usable content.
    pub async fn ask(&self, messages: &[ChatMessage]) -> Result<CompletionOutcome, AiLlmError> {
        let resp = self.complete(messages).await?;
        CompletionOutcome::classify(resp).map_err(|e| AiLlmError::Decode {
            url: self.url_chat.clone(),
            reason: e.0.to_string(),
        })
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::llm_provider::LlmProvider;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::OpenRouter,
            model: "google/gemini-2.0-flash-exp:free".into(),
            endpoint: "https://openrouter.ai/api".into(),
            api_key: Some("sk-or-test".into()),
            timeout_secs: Some(5),
            referer: Some("localhost".into()),
            title: Some("Wound-AI-Assistant".into()),
        }
    }

    #[test]
    fn builds_with_valid_config() {
        let svc = ChatCompletionService::new(cfg()).unwrap();
        assert_eq!(svc.url_chat, "https://openrouter.ai/api/v1/chat/completions");
        assert_eq!(svc.config().model, "google/gemini-2.0-flash-exp:free");
    }

    #[test]
    fn rejects_missing_or_blank_key() {
        for key in [None, Some("  ".to_string())] {
            let err = ChatCompletionService::new(LlmModelConfig {
                api_key: key,
                ..cfg()
            })
            .unwrap_err();
            assert!(matches!(err, AiLlmError::Config(ConfigError::MissingApiKey)));
        }
    }

    #[test]
    fn rejects_bad_endpoint_and_model() {
        let err = ChatCompletionService::new(LlmModelConfig {
            endpoint: "ftp://example.com".into(),
            ..cfg()
        })
        .unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::InvalidFormat { .. })));

        let err = ChatCompletionService::new(LlmModelConfig {
            model: " ".into(),
            ..cfg()
        })
        .unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::EmptyModel)));
    }

    #[test]
    fn rejects_header_breaking_key() {
        let err = ChatCompletionService::new(LlmModelConfig {
            api_key: Some("sk\nbroken".into()),
            ..cfg()
        })
        .unwrap_err();
        assert!(matches!(err, AiLlmError::Config(ConfigError::InvalidHeader(_))));
    }

    #[test]
    fn request_body_is_model_and_messages_only() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hi")];
        let body = ChatCompletionRequest {
            model: "m",
            messages: &messages,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "m",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }
}
