//! Configuration management for the analyst assistant.
//!
//! Configuration is set via environment variables:
//! - `TOGETHER_API_KEY` - Required. Together AI API key for the LLM.
//! - `LANGSEARCH_API_KEY` - Required. LangSearch API key for web search.
//! - `DEFAULT_MODEL` - Optional. The LLM model to use. Defaults to
//!   `deepseek-ai/DeepSeek-R1-Distill-Llama-70B-free`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `8`.
//! - `SEARCH_COUNT` - Optional. Results requested per web search. Defaults to `5`.
//!
//! Both API keys are validated here, at startup, so a missing credential
//! fails the process immediately instead of surfacing later as an HTTP
//! authentication error mid-request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration, constructed once and passed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    /// Together AI API key (LLM provider)
    pub together_api_key: String,

    /// LangSearch API key (search provider)
    pub langsearch_api_key: String,

    /// LLM model identifier
    pub model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,

    /// Number of results requested from the search API per query
    pub search_count: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `TOGETHER_API_KEY` or
    /// `LANGSEARCH_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let together_api_key = std::env::var("TOGETHER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("TOGETHER_API_KEY".to_string()))?;

        let langsearch_api_key = std::env::var("LANGSEARCH_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("LANGSEARCH_API_KEY".to_string()))?;

        let model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| "deepseek-ai/DeepSeek-R1-Distill-Llama-70B-free".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "8".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        let search_count = std::env::var("SEARCH_COUNT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("SEARCH_COUNT".to_string(), format!("{}", e)))?;

        Ok(Self {
            together_api_key,
            langsearch_api_key,
            model,
            host,
            port,
            max_iterations,
            search_count,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(together_api_key: String, langsearch_api_key: String, model: String) -> Self {
        Self {
            together_api_key,
            langsearch_api_key,
            model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_iterations: 8,
            search_count: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sole test touching the process environment; keep it that way so no
    // serialization with other tests is needed.
    #[test]
    fn test_from_env_requires_both_keys() {
        std::env::remove_var("TOGETHER_API_KEY");
        std::env::remove_var("LANGSEARCH_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "TOGETHER_API_KEY"));

        std::env::set_var("TOGETHER_API_KEY", "t-key");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "LANGSEARCH_API_KEY"));

        std::env::remove_var("TOGETHER_API_KEY");
    }

    #[test]
    fn test_new_uses_service_defaults() {
        let config = Config::new(
            "together-key".to_string(),
            "langsearch-key".to_string(),
            "some/model".to_string(),
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_iterations, 8);
        assert_eq!(config.search_count, 5);
    }
}
