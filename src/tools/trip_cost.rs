use super::Tool;
use crate::schemas::validation::deserialize_params;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Parameters for the trip cost aggregator
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TripCostParams {
    pub flights: f64,
    pub lodging: f64,
    pub food: f64,
    #[serde(default)]
    pub extras: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Cost breakdown returned to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub flights: f64,
    pub lodging: f64,
    pub food: f64,
    pub extras: f64,
    pub total: f64,
    pub currency: String,
}

/// Sum the cost categories into a breakdown record.
///
/// The total is the exact sum of the four inputs; the currency code is
/// normalized to uppercase. Negative inputs never reach this function, the
/// parameter schema rejects them first.
pub fn cost_breakdown(params: &TripCostParams) -> CostBreakdown {
    CostBreakdown {
        flights: params.flights,
        lodging: params.lodging,
        food: params.food,
        extras: params.extras,
        total: params.flights + params.lodging + params.food + params.extras,
        currency: params.currency.to_uppercase(),
    }
}

/// Tool that computes a breakdown and total of trip costs
#[derive(Debug)]
pub struct TripCostTool;

impl Default for TripCostTool {
    fn default() -> Self {
        Self::new()
    }
}

impl TripCostTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for TripCostTool {
    fn name(&self) -> &'static str {
        "trip_cost"
    }

    fn description(&self) -> &'static str {
        "Compute a breakdown and total of trip costs (flights, lodging, food, extras)"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "flights": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Flight cost in the base currency"
                },
                "lodging": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Total lodging cost"
                },
                "food": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Estimated food cost"
                },
                "extras": {
                    "type": "number",
                    "minimum": 0,
                    "default": 0,
                    "description": "Other costs (local transport, tickets, etc.)"
                },
                "currency": {
                    "type": "string",
                    "default": "USD",
                    "description": "Base currency code, e.g. USD, EUR, CLP"
                }
            },
            "required": ["flights", "lodging", "food"]
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
            let params: TripCostParams = deserialize_params(parameters)?;
            let breakdown = cost_breakdown(&params);

            serde_json::to_value(breakdown).map_err(|e| {
                crate::AgentError::ToolExecution(format!("Failed to serialize result: {}", e))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_exact_sum() {
        let params = TripCostParams {
            flights: 650.0,
            lodging: 420.5,
            food: 180.25,
            extras: 49.25,
            currency: "usd".to_string(),
        };

        let breakdown = cost_breakdown(&params);
        assert_eq!(breakdown.total, 650.0 + 420.5 + 180.25 + 49.25);
        assert_eq!(breakdown.currency, "USD");
    }

    #[test]
    fn test_extras_defaults_to_zero() {
        let params: TripCostParams = serde_json::from_value(serde_json::json!({
            "flights": 100.0,
            "lodging": 50.0,
            "food": 25.0
        }))
        .unwrap();

        assert_eq!(params.extras, 0.0);
        assert_eq!(params.currency, "USD");
        assert_eq!(cost_breakdown(&params).total, 175.0);
    }

    #[test]
    fn test_inputs_echoed_in_breakdown() {
        let params = TripCostParams {
            flights: 1.0,
            lodging: 2.0,
            food: 3.0,
            extras: 4.0,
            currency: "clp".to_string(),
        };

        let breakdown = cost_breakdown(&params);
        assert_eq!(breakdown.flights, 1.0);
        assert_eq!(breakdown.lodging, 2.0);
        assert_eq!(breakdown.food, 3.0);
        assert_eq!(breakdown.extras, 4.0);
        assert_eq!(breakdown.currency, "CLP");
    }
}
