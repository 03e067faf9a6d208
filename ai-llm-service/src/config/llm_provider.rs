use std::str::FromStr;

use crate::error_handler::ConfigError;

/// Represents the provider (backend) serving OpenAI-compatible chat completions.
///
/// Both providers share the `/v1/chat/completions` wire format and bearer
/// authentication. OpenRouter additionally receives attribution headers
/// (`HTTP-Referer`, `X-Title`).
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmProvider;
///
/// let p: LlmProvider = "openrouter".parse().unwrap();
/// assert_eq!(p, LlmProvider::OpenRouter);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// OpenRouter gateway (`https://openrouter.ai/api`).
    OpenRouter,
    /// OpenAI API or any compatible server.
    OpenAI,
}

impl LlmProvider {
    /// Whether requests carry the OpenRouter attribution headers.
    pub fn sends_attribution(self) -> bool {
        matches!(self, LlmProvider::OpenRouter)
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openrouter" => Ok(LlmProvider::OpenRouter),
            "openai" | "chatgpt" => Ok(LlmProvider::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers_case_insensitively() {
        assert_eq!(" OpenRouter ".parse::<LlmProvider>().unwrap(), LlmProvider::OpenRouter);
        assert_eq!("openai".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
        assert_eq!("ChatGPT".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAI);
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = "ollama".parse::<LlmProvider>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "ollama"));
    }
}
