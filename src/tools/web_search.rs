use super::Tool;
use crate::schemas::validation::deserialize_params;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

const DEFAULT_ENDPOINT: &str = "https://api.tavily.com/search";
const DEFAULT_MAX_RESULTS: u8 = 5;

/// Parameters accepted by the web search tool
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WebSearchParams {
    /// Search query, e.g. "best time to visit Patagonia"
    pub query: String,
    /// Number of results to return (1-10)
    #[serde(default)]
    pub max_results: Option<u8>,
}

/// A single search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Tool that queries the Tavily search API and returns titled results
#[derive(Debug, Clone)]
pub struct WebSearchTool {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl WebSearchTool {
    /// Create a new tool using the provided API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: Client::new(),
        }
    }

    /// Override the search endpoint (used by tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, crate::AgentError> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|err| {
        crate::AgentError::ToolExecution(format!("Failed to parse search response: {}", err))
    })?;
    Ok(response.results)
}

impl Tool for WebSearchTool {
    fn name(&self) -> &'static str {
        "web_search"
    }

    fn description(&self) -> &'static str {
        "Search the web for travel information; returns titled results with URLs and snippets"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10,
                    "description": "Number of results to return"
                }
            },
            "required": ["query"]
        })
    }

    fn execute(
        &self,
        parameters: serde_json::Value,
    ) -> Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, crate::AgentError>>
                + Send
                + '_,
        >,
    > {
        let client = self.client.clone();
        let api_key = self.api_key.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            let params: WebSearchParams = deserialize_params(parameters)?;

            let body = serde_json::json!({
                "api_key": api_key,
                "query": params.query,
                "max_results": params.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
            });

            let response = client.post(&endpoint).json(&body).send().await.map_err(|err| {
                crate::AgentError::ToolExecution(format!("Failed to call search API: {}", err))
            })?;

            if !response.status().is_success() {
                return Err(crate::AgentError::ToolExecution(format!(
                    "Search API returned status {}",
                    response.status()
                )));
            }

            let text = response.text().await.map_err(|err| {
                crate::AgentError::ToolExecution(format!("Failed to read search response: {}", err))
            })?;

            let results = parse_search_response(&text)?;

            Ok(serde_json::json!({
                "query": params.query,
                "results": results
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> String {
        json!({
            "query": "hotels in Lima",
            "results": [
                {
                    "title": "Where to stay in Lima",
                    "url": "https://example.com/lima",
                    "content": "Miraflores and Barranco are the usual picks."
                },
                {
                    "title": "Lima travel guide",
                    "url": "https://example.com/guide"
                }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_parse_search_response() {
        let results = parse_search_response(&sample_body()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Where to stay in Lima");
        assert_eq!(results[0].url, "https://example.com/lima");
        assert!(results[0].content.contains("Miraflores"));
        // content is optional in the API response
        assert_eq!(results[1].content, "");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(parse_search_response("not json").is_err());
    }

    #[tokio::test]
    async fn test_execute_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_body())
            .create_async()
            .await;

        let tool = WebSearchTool::new("tvly-test")
            .with_endpoint(format!("{}/search", server.url()));

        let result = tool
            .execute(json!({"query": "hotels in Lima"}))
            .await
            .unwrap();

        assert_eq!(result["query"], "hotels in Lima");
        assert_eq!(result["results"].as_array().unwrap().len(), 2);
        assert_eq!(result["results"][0]["title"], "Where to stay in Lima");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_surfaces_http_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(500)
            .create_async()
            .await;

        let tool = WebSearchTool::new("tvly-test")
            .with_endpoint(format!("{}/search", server.url()));

        let err = tool
            .execute(json!({"query": "anything"}))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::AgentError::ToolExecution(_)));
    }
}
