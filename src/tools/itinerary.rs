use super::Tool;
use crate::schemas::validation::deserialize_params;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Suggestion templates cycled over the trip days, indexed by `(day - 1) % 5`.
pub const DAY_TEMPLATES: [&str; 5] = [
    "Arrival, check-in, light walk around the center",
    "Free tour / main squares and museums",
    "Landmark neighborhood + local market",
    "Themed activity (food/history/beach/nature)",
    "Free day / shopping / viewpoints",
];

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 14;

/// Interest used to frame the itinerary header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Food,
    History,
    Beach,
    Nature,
    #[default]
    Mixed,
}

impl Interest {
    pub fn label(&self) -> &'static str {
        match self {
            Interest::Food => "food",
            Interest::History => "history",
            Interest::Beach => "beach",
            Interest::Nature => "nature",
            Interest::Mixed => "mixed",
        }
    }
}

/// Parameters for the itinerary generator
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ItineraryParams {
    pub destination: String,
    pub days: u32,
    #[serde(default)]
    pub interest: Interest,
}

/// Render a day-by-day plan as multi-line text.
///
/// One entry per day, 1-based and contiguous, each drawn from the fixed
/// template cycle. Deterministic for identical inputs. Day counts outside
/// [1,14] are rejected by the parameter schema before this runs.
pub fn build_itinerary(params: &ItineraryParams) -> String {
    let mut lines = Vec::with_capacity(params.days as usize + 1);
    lines.push(format!(
        "Suggested itinerary for {} ({} days, interest: {}):",
        params.destination,
        params.days,
        params.interest.label()
    ));

    for day in 1..=params.days {
        let suggestion = DAY_TEMPLATES[((day - 1) as usize) % DAY_TEMPLATES.len()];
        lines.push(format!("Day {}: {}", day, suggestion));
    }

    lines.join("\n")
}

/// Tool that generates a simple N-day itinerary for a destination
#[derive(Debug)]
pub struct ItineraryTool;

impl Default for ItineraryTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ItineraryTool {
    fn name(&self) -> &'static str {
        "itinerary"
    }

    fn description(&self) -> &'static str {
        "Generate a simple day-by-day itinerary for a destination (1-14 days)"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "Destination city or country, e.g. 'Lima'"
                },
                "days": {
                    "type": "integer",
                    "minimum": MIN_DAYS,
                    "maximum": MAX_DAYS,
                    "description": "Trip length in days (1-14)"
                },
                "interest": {
                    "type": "string",
                    "enum": ["food", "history", "beach", "nature", "mixed"],
                    "default": "mixed",
                    "description": "Interest to bias suggestions toward"
                }
            },
            "required": ["destination", "days"]
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
            let params: ItineraryParams = deserialize_params(parameters)?;
            let plan = build_itinerary(&params);

            Ok(serde_json::json!({
                "destination": params.destination,
                "days": params.days,
                "interest": params.interest.label(),
                "itinerary": plan
            }))
        })
    }
}
