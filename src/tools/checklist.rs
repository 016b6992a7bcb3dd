use super::Tool;
use crate::schemas::validation::deserialize_params;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Document reminders, prepended when requested
pub const DOCUMENT_ITEMS: [&str; 3] = ["Passport / ID", "Boarding pass", "Travel insurance"];

/// Items packed on every trip
pub const COMMON_ITEMS: [&str; 6] = [
    "Comfortable clothes",
    "Footwear",
    "Chargers",
    "Plug adapter",
    "Reusable bottle",
    "Medication",
];

/// Parameters for the checklist builder
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ChecklistParams {
    #[serde(default = "default_trip_type")]
    pub trip_type: String,
    #[serde(default = "default_include_documents")]
    pub include_documents: bool,
}

fn default_trip_type() -> String {
    "leisure".to_string()
}

fn default_include_documents() -> bool {
    true
}

/// Extras for the known trip styles. Unknown styles get no extras rather than
/// an error; the checklist degrades to the shared items.
fn type_specific_items(trip_type: &str) -> &'static [&'static str] {
    match trip_type {
        "business" => &["Laptop", "Presentations", "Business cards"],
        "leisure" => &["Sunglasses", "Sunscreen", "Cap"],
        "mixed" => &["Light laptop", "Semi-formal outfit"],
        _ => &[],
    }
}

/// Assemble the checklist in fixed order: documents (when requested), then
/// common items, then trip-type extras.
pub fn build_checklist(params: &ChecklistParams) -> Vec<String> {
    let mut items = Vec::new();

    if params.include_documents {
        items.extend(DOCUMENT_ITEMS.iter().map(|s| s.to_string()));
    }
    items.extend(COMMON_ITEMS.iter().map(|s| s.to_string()));
    items.extend(
        type_specific_items(&params.trip_type)
            .iter()
            .map(|s| s.to_string()),
    );

    items
}

/// Render the checklist as a bulleted block.
pub fn render_checklist(items: &[String]) -> String {
    format!("Travel checklist:\n- {}", items.join("\n- "))
}

/// Tool that builds a packing checklist for a trip style
#[derive(Debug)]
pub struct ChecklistTool;

impl Default for ChecklistTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ChecklistTool {
    fn name(&self) -> &'static str {
        "checklist"
    }

    fn description(&self) -> &'static str {
        "Build a basic packing checklist for a trip style (business, leisure, mixed)"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "trip_type": {
                    "type": "string",
                    "default": "leisure",
                    "description": "Trip style; business, leisure, and mixed have dedicated extras"
                },
                "include_documents": {
                    "type": "boolean",
                    "default": true,
                    "description": "Include the travel documents reminder block"
                }
            }
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
        Box::pin(async move {
            let params: ChecklistParams = deserialize_params(parameters)?;
            let items = build_checklist(&params);
            let rendered = render_checklist(&items);

            Ok(serde_json::json!({
                "trip_type": params.trip_type,
                "items": items,
                "checklist": rendered
            }))
        })
    }
}
