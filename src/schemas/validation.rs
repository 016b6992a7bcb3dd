use crate::error::{AgentError, Result};
use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate model-generated tool arguments against the tool's JSON Schema.
///
/// This runs before the tool body executes, so constraint violations (negative
/// costs, out-of-range day counts, unrecognized enum literals) never reach the
/// tool itself. Values are rejected, not clamped.
pub fn validate_tool_arguments(tool_name: &str, schema: &Value, arguments: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            AgentError::Validation(format!(
                "Failed to prepare `{}` parameter schema for validation: {}",
                tool_name, err
            ))
        })?;

    if let Err(errors) = validator.validate(arguments) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "arguments failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(AgentError::Validation(format!(
            "Arguments for `{}` do not match its parameter schema: {}",
            tool_name, detail_str
        )));
    }

    Ok(())
}

/// Deserialize validated arguments into the tool's typed params struct.
///
/// Failures name the offending field path.
pub fn deserialize_params<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_path_to_error::deserialize(arguments).map_err(|e| {
        AgentError::Validation(format!("Parameter validation failed at {}: {}", e.path(), e))
    })
}
