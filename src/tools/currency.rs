use super::Tool;
use crate::schemas::validation::deserialize_params;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Demo conversion multipliers, keyed by ordered (source, target) pair.
///
/// Each direction is stored separately and the table is intentionally tiny.
/// Not authoritative, never use these figures for real finances.
pub const DEMO_RATES: [((&str, &str), f64); 4] = [
    (("USD", "CLP"), 950.0),
    (("CLP", "USD"), 1.0 / 950.0),
    (("USD", "EUR"), 0.9),
    (("EUR", "USD"), 1.1),
];

/// Look up the demo rate for an ordered currency pair.
pub fn demo_rate(from: &str, to: &str) -> Option<f64> {
    DEMO_RATES
        .iter()
        .find(|((f, t), _)| *f == from && *t == to)
        .map(|(_, rate)| *rate)
}

/// Parameters for the currency converter
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ConversionParams {
    pub amount: f64,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub rate: Option<f64>,
}

/// Outcome of a conversion.
///
/// `RateUnavailable` is a designed fallback, not an error: the caller gets a
/// descriptive result asking for a manual rate instead of a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Conversion {
    Converted {
        amount: f64,
        from: String,
        to: String,
        rate: f64,
        converted: f64,
    },
    RateUnavailable {
        from: String,
        to: String,
    },
}

impl Conversion {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Conversion::RateUnavailable { .. })
    }

    /// Human-readable summary of the outcome.
    pub fn render(&self) -> String {
        match self {
            Conversion::Converted {
                amount,
                from,
                to,
                rate,
                converted,
            } => format!(
                "{:.2} {} = {:.2} {} (rate used: {})",
                amount, from, converted, to, rate
            ),
            Conversion::RateUnavailable { from, to } => format!(
                "No demo rate for {}->{}. Pass a manual 'rate', e.g. rate=950.",
                from, to
            ),
        }
    }
}

/// Convert an amount between currencies.
///
/// A manual rate always wins; otherwise the ordered pair is looked up in the
/// demo table. Currency codes are normalized to uppercase before the lookup.
pub fn convert(params: &ConversionParams) -> Conversion {
    let from = params.from.to_uppercase();
    let to = params.to.to_uppercase();

    let rate = params.rate.or_else(|| demo_rate(&from, &to));

    match rate {
        Some(rate) => Conversion::Converted {
            amount: params.amount,
            converted: params.amount * rate,
            from,
            to,
            rate,
        },
        None => Conversion::RateUnavailable { from, to },
    }
}

/// Tool that converts amounts between currencies with demo or manual rates
#[derive(Debug)]
pub struct CurrencyTool;

impl Default for CurrencyTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for CurrencyTool {
    fn name(&self) -> &'static str {
        "convert_currency"
    }

    fn description(&self) -> &'static str {
        "Convert an amount between currencies using a demo rate table or a manual rate"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "amount": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Amount to convert"
                },
                "from": {
                    "type": "string",
                    "description": "Source currency code, e.g. 'USD'"
                },
                "to": {
                    "type": "string",
                    "description": "Target currency code, e.g. 'CLP'"
                },
                "rate": {
                    "type": "number",
                    "minimum": 0,
                    "description": "Optional manual rate (1 from = rate to)"
                }
            },
            "required": ["amount", "from", "to"]
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
            let params: ConversionParams = deserialize_params(parameters)?;
            let outcome = convert(&params);
            let summary = outcome.render();

            let mut value = serde_json::to_value(outcome).map_err(|e| {
                crate::AgentError::ToolExecution(format!("Failed to serialize result: {}", e))
            })?;
            value["summary"] = serde_json::Value::String(summary);

            Ok(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(amount: f64, from: &str, to: &str, rate: Option<f64>) -> ConversionParams {
        ConversionParams {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            rate,
        }
    }

    #[test]
    fn test_demo_table_lookup() {
        let outcome = convert(&params(120.0, "USD", "CLP", None));
        match outcome {
            Conversion::Converted {
                converted, rate, ..
            } => {
                assert_eq!(rate, 950.0);
                assert_eq!(converted, 120.0 * 950.0);
            }
            other => panic!("expected a converted outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_codes_normalized_to_uppercase() {
        let outcome = convert(&params(10.0, "usd", "eur", None));
        match outcome {
            Conversion::Converted { from, to, rate, .. } => {
                assert_eq!(from, "USD");
                assert_eq!(to, "EUR");
                assert_eq!(rate, 0.9);
            }
            other => panic!("expected a converted outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_rate_always_wins() {
        // USD->CLP is tabulated, but the manual rate must be used instead
        let outcome = convert(&params(10.0, "USD", "CLP", Some(2.0)));
        match outcome {
            Conversion::Converted {
                converted, rate, ..
            } => {
                assert_eq!(rate, 2.0);
                assert_eq!(converted, 20.0);
            }
            other => panic!("expected a converted outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_untabulated_pair_is_fallback_not_error() {
        let outcome = convert(&params(10.0, "USD", "JPY", None));
        assert!(outcome.is_fallback());

        let message = outcome.render();
        assert!(message.contains("USD"));
        assert!(message.contains("JPY"));
        assert!(message.contains("rate"));
    }

    #[test]
    fn test_render_formats_two_decimals() {
        let outcome = convert(&params(1.5, "USD", "CLP", None));
        let rendered = outcome.render();
        assert!(rendered.contains("1.50 USD"));
        assert!(rendered.contains("1425.00 CLP"));
        assert!(rendered.contains("rate used: 950"));
    }

    #[test]
    fn test_round_trip_directions_stored_separately() {
        assert_eq!(demo_rate("USD", "EUR"), Some(0.9));
        assert_eq!(demo_rate("EUR", "USD"), Some(1.1));
        assert_eq!(demo_rate("CLP", "EUR"), None);
    }
}
