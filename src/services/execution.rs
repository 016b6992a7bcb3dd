use serde_json::{json, Value};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::{
    core::{agent::Agent, conversation::ChatHistory},
    error::{AgentError, Result},
    services::openai_client::ChatCompletionRequest,
};

impl Agent {
    /// Answer one user turn given the accumulated conversation history.
    ///
    /// The history is caller-owned and read-only here; appending the exchange
    /// afterwards is the caller's job.
    pub async fn respond(&self, history: &ChatHistory, input: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(json!({
            "role": "system",
            "content": self.system_prompt()
        }));
        messages.extend(history.as_messages());
        messages.push(json!({
            "role": "user",
            "content": input
        }));

        self.run_with_messages(messages).await
    }

    /// Tool-calling executor loop.
    ///
    /// Each iteration sends the transcript with the tool descriptors, runs any
    /// requested tool calls through the registry (schema-validated), and feeds
    /// results back as `tool` messages. A plain assistant reply is the final
    /// response. Tool and validation failures go back to the model as
    /// structured error payloads; transport failures propagate.
    pub(crate) async fn run_with_messages(&self, mut messages: Vec<Value>) -> Result<String> {
        let mut iteration = 0;

        while iteration < self.max_iterations() {
            iteration += 1;

            let tools = self.tools().to_openai_tools();

            let mut chat_request =
                ChatCompletionRequest::new(self.model().to_owned(), messages.clone())
                    .with_max_tokens(self.max_tokens())
                    .with_temperature(self.temperature());

            if !tools.is_empty() {
                chat_request = chat_request
                    .with_tools(tools)
                    .with_tool_choice(json!("auto"));
            }

            let request_body = chat_request.into_value();

            let response = timeout(self.timeout(), self.make_raw_request(&request_body))
                .await
                .map_err(|_| AgentError::Timeout("Chat completion call timed out".to_string()))??;

            let choices = response
                .get("choices")
                .and_then(|value| value.as_array())
                .ok_or_else(|| {
                    AgentError::Unknown(
                        "Missing 'choices' array in completion response".to_string(),
                    )
                })?;

            let first_choice = choices.first().ok_or_else(|| {
                AgentError::Unknown("Completion response contained no choices".to_string())
            })?;

            let assistant_message = first_choice.get("message").cloned().ok_or_else(|| {
                AgentError::Unknown("Completion response missing assistant message".to_string())
            })?;

            let tool_calls_array = assistant_message
                .get("tool_calls")
                .and_then(|value| value.as_array())
                .cloned();

            let Some(tool_calls_array) = tool_calls_array else {
                let answer = assistant_message
                    .get("content")
                    .and_then(|value| value.as_str())
                    .unwrap_or("")
                    .trim()
                    .to_string();

                if answer.is_empty() {
                    return Err(AgentError::Unknown(
                        "Assistant returned neither content nor tool calls".to_string(),
                    ));
                }

                return Ok(answer);
            };

            messages.push(json!({
                "role": "assistant",
                "content": assistant_message.get("content").unwrap_or(&json!("")),
                "tool_calls": tool_calls_array
            }));

            for tool_call in &tool_calls_array {
                let (tool_call_id, parsed) = parse_tool_call(tool_call);

                let result = match parsed {
                    Ok((function_name, arguments_str)) => {
                        self.execute_tool_call(&function_name, &arguments_str).await
                    }
                    Err(error) => error.to_error_payload(),
                };

                messages.push(json!({
                    "role": "tool",
                    "tool_call_id": tool_call_id,
                    "content": result.to_string()
                }));
            }
        }

        Err(AgentError::MaxIterations(self.max_iterations()))
    }

    /// Parse the raw argument string and dispatch through the registry.
    ///
    /// Failures come back as structured error payloads so the model can
    /// recover within the same turn.
    async fn execute_tool_call(&self, function_name: &str, arguments_str: &str) -> Value {
        let arguments_json: Value = match serde_json::from_str(arguments_str) {
            Ok(value) => value,
            Err(err) => {
                return AgentError::InvalidFunctionCall(format!(
                    "Failed to parse arguments for tool '{}': {}",
                    function_name, err
                ))
                .to_error_payload()
            }
        };

        info!(
            target: "travel_agent::tools",
            tool = %function_name,
            "dispatching tool call"
        );

        match self.tools().dispatch(function_name, arguments_json).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    target: "travel_agent::tools",
                    tool = %function_name,
                    error = %e,
                    "tool call failed"
                );
                e.to_error_payload()
            }
        }
    }
}

/// Pull the call id, function name, and raw argument string out of one
/// tool-call object. Malformed calls keep their id so the error payload can
/// still be attributed.
fn parse_tool_call(tool_call: &Value) -> (String, Result<(String, String)>) {
    let id = tool_call
        .get("id")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string();

    let Some(function) = tool_call.get("function") else {
        return (
            id,
            Err(AgentError::InvalidFunctionCall(
                "Tool call missing function".to_string(),
            )),
        );
    };

    let name = function
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    if name.is_empty() {
        return (
            id,
            Err(AgentError::InvalidFunctionCall(
                "Tool call missing function name".to_string(),
            )),
        );
    }

    let arguments = function
        .get("arguments")
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .to_string();

    (id, Ok((name.to_string(), arguments)))
}
