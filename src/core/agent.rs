use std::time::Duration;

use serde_json::Value;

use crate::{
    config::AgentConfig,
    error::Result,
    services::openai_client::OpenAIClient,
    tools::ToolRegistry,
};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful travel agent. Reason step by step and use \
the available tools when they help you produce concrete numbers: cost breakdowns, itineraries, \
packing checklists, and currency conversions. Be clear and concise.";

/// Main agent
#[derive(Debug)]
pub struct Agent {
    client: OpenAIClient,
    tools: ToolRegistry,
    model: String,
    system_prompt: String,
    max_iterations: usize,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    timeout: Duration,
}

impl Agent {
    pub fn new(api_key: String, tools: ToolRegistry) -> Self {
        let defaults = AgentConfig::new(api_key);
        Self::from_config(&defaults, tools)
    }

    /// Build an agent from an explicit startup configuration.
    pub fn from_config(config: &AgentConfig, tools: ToolRegistry) -> Self {
        let mut client = OpenAIClient::new(config.api_key.clone());
        client.set_base_url(config.base_url.clone());

        Self {
            client,
            tools,
            model: config.model.clone(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_iterations: config.max_iterations,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub(crate) fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub(crate) fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub(crate) fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }

    pub(crate) fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) async fn make_raw_request(&self, request_body: &Value) -> Result<Value> {
        self.client.chat_completion(request_body, self.timeout).await
    }
}
