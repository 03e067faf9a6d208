//! Process configuration assembled once at startup.

use ai_llm_service::{
    ConfigError, LlmModelConfig, config_chat_with,
    error_handler::{env_or, process_env},
};

use crate::error_handler::AppError;

/// Everything the backend needs to boot: where to listen and which model to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host, e.g. `0.0.0.0`.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Chat-completion model used when no local answer matches.
    pub llm: LlmModelConfig,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 3001;

    /// Reads configuration from environment variables.
    ///
    /// | Variable | Default   |
    /// |----------|-----------|
    /// | `HOST`   | `0.0.0.0` |
    /// | `PORT`   | `3001`    |
    ///
    /// LLM variables are documented in `ai_llm_service::config::default_config`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&process_env)
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = env_or(lookup, "HOST", Self::DEFAULT_HOST);
        let port = env_or(lookup, "PORT", &Self::DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "PORT",
                reason: "expected u16 (0..=65535)",
            })?;
        let llm = config_chat_with(lookup).map_err(AppError::from)?;

        Ok(Self { host, port, llm })
    }

    /// `host:port` for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
