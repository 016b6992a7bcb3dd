//! Schema handling for tool parameters

pub mod validation;

pub use validation::{deserialize_params, validate_tool_arguments};
