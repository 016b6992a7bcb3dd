use std::time::Duration;

use crate::error::{AgentError, Result};

pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Startup configuration, populated once from flags and environment.
///
/// Credentials live here for the duration of the run; nothing is written back
/// into the process environment.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout: Duration,
    pub max_iterations: usize,
    /// API key for the web search tool; only required when search is enabled.
    pub search_api_key: Option<String>,
}

impl AgentConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            search_api_key: None,
        }
    }

    /// Build a configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; its absence is a fatal configuration
    /// error raised before any loop starts. `OPENAI_BASE_URL` (or
    /// `OPENROUTER_BASE_URL`), `MODEL` and `TAVILY_API_KEY` are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            AgentError::Config(
                "OPENAI_API_KEY environment variable must be set before starting the agent"
                    .to_string(),
            )
        })?;

        Ok(Self::new(api_key).with_env_overrides())
    }

    /// Overlay the optional environment settings onto this configuration.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) =
            std::env::var("OPENAI_BASE_URL").or_else(|_| std::env::var("OPENROUTER_BASE_URL"))
        {
            self.base_url = base_url;
        }
        if let Ok(model) = std::env::var("MODEL") {
            self.model = model;
        }
        if let Ok(search_key) = std::env::var("TAVILY_API_KEY") {
            if !search_key.trim().is_empty() {
                self.search_api_key = Some(search_key);
            }
        }
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_search_api_key(mut self, key: impl Into<String>) -> Self {
        self.search_api_key = Some(key.into());
        self
    }
}
