//! Default chat-completion config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENROUTER_API_KEY` = bearer token (mandatory)
//! - `LLM_PROVIDER`       = `openrouter` (default) or `openai`
//! - `LLM_MODEL`          = model id, default [`DEFAULT_MODEL`]
//! - `LLM_ENDPOINT`       = base URL, default [`DEFAULT_ENDPOINT`]
//! - `LLM_TIMEOUT_SECS`   = outbound timeout, default 60
//! - `LLM_REFERER`        = OpenRouter `HTTP-Referer`, default `localhost`
//! - `LLM_TITLE`          = OpenRouter `X-Title`, default `Wound-AI-Assistant`

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, env_opt_u64, env_or, must_env, process_env,
        validate_http_endpoint,
    },
};

/// Free Gemini 2.0 Flash tier on OpenRouter.
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";

/// OpenRouter API base; `/v1/chat/completions` is appended by the service.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api";

/// Constructs the chat model config from the process environment.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if `OPENROUTER_API_KEY` is absent
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_PROVIDER`
/// - [`ConfigError::InvalidFormat`] if `LLM_ENDPOINT` is not http(s)
/// - [`ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is not a number
pub fn config_chat() -> Result<LlmModelConfig, AiLlmError> {
    config_chat_with(&process_env)
}

/// Same as [`config_chat`], reading variables through `lookup`.
pub fn config_chat_with<F>(lookup: &F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider: LlmProvider = env_or(lookup, "LLM_PROVIDER", "openrouter").parse()?;
    let api_key = must_env(lookup, "OPENROUTER_API_KEY")?;

    let endpoint = env_or(lookup, "LLM_ENDPOINT", DEFAULT_ENDPOINT);
    validate_http_endpoint("LLM_ENDPOINT", &endpoint)?;

    let model = env_or(lookup, "LLM_MODEL", DEFAULT_MODEL);
    let timeout_secs =
        env_opt_u64(lookup, "LLM_TIMEOUT_SECS")?.or(Some(LlmModelConfig::DEFAULT_TIMEOUT_SECS));

    Ok(LlmModelConfig {
        provider,
        model,
        endpoint,
        api_key: Some(api_key),
        timeout_secs,
        referer: Some(env_or(lookup, "LLM_REFERER", "localhost")),
        title: Some(env_or(lookup, "LLM_TITLE", "Wound-AI-Assistant")),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error_handler::ConfigError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_target_openrouter_gemini() {
        let cfg = config_chat_with(&lookup_from(&[("OPENROUTER_API_KEY", "sk-or-test")])).unwrap();

        assert_eq!(cfg.provider, LlmProvider::OpenRouter);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.chat_url(), "https://openrouter.ai/api/v1/chat/completions");
        assert_eq!(cfg.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(cfg.timeout_secs, Some(60));
        assert_eq!(cfg.referer.as_deref(), Some("localhost"));
        assert_eq!(cfg.title.as_deref(), Some("Wound-AI-Assistant"));
    }

    #[test]
    fn missing_key_is_reported() {
        let err = config_chat_with(&lookup_from(&[])).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::MissingVar("OPENROUTER_API_KEY"))
        ));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_chat_with(&lookup_from(&[
            ("OPENROUTER_API_KEY", "k"),
            ("LLM_PROVIDER", "openai"),
            ("LLM_MODEL", "gpt-4o-mini"),
            ("LLM_ENDPOINT", "http://127.0.0.1:8080/"),
            ("LLM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(cfg.provider, LlmProvider::OpenAI);
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.chat_url(), "http://127.0.0.1:8080/v1/chat/completions");
        assert_eq!(cfg.timeout_secs(), 5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_endpoint = config_chat_with(&lookup_from(&[
            ("OPENROUTER_API_KEY", "k"),
            ("LLM_ENDPOINT", "openrouter.ai"),
        ]));
        assert!(bad_endpoint.is_err());

        let bad_timeout = config_chat_with(&lookup_from(&[
            ("OPENROUTER_API_KEY", "k"),
            ("LLM_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(
            bad_timeout,
            Err(AiLlmError::Config(ConfigError::InvalidNumber { .. }))
        ));

        let bad_provider = config_chat_with(&lookup_from(&[
            ("OPENROUTER_API_KEY", "k"),
            ("LLM_PROVIDER", "ollama"),
        ]));
        assert!(matches!(
            bad_provider,
            Err(AiLlmError::Config(ConfigError::UnsupportedProvider(_)))
        ));
    }
}
