//! Schema-layer rejection tests: constraint violations surface before any
//! tool body runs, and they reject rather than clamp.

use serde_json::json;
use travel_agent_rs::{
    tools::{ChecklistTool, CurrencyTool, ItineraryTool, TripCostTool},
    AgentError, Tool, ToolRegistry,
};

fn travel_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(TripCostTool::new());
    registry.register(ItineraryTool::new());
    registry.register(ChecklistTool::new());
    registry.register(CurrencyTool::new());
    registry
}

/// Probe tool whose body reports that it ran; used to show validation fires
/// first.
#[derive(Debug)]
struct ProbeTool;

impl Tool for ProbeTool {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn description(&self) -> &'static str {
        "Reports when its body executes"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "count": {"type": "integer", "minimum": 1, "maximum": 14}
            },
            "required": ["count"]
        })
    }

    fn execute(
        &self,
        _parameters: serde_json::Value,
    ) -> std::pin::Pin<
        Box<
            dyn std::future::Future<Output = Result<serde_json::Value, AgentError>> + Send + '_,
        >,
    > {
        Box::pin(async move { Err(AgentError::ToolExecution("tool body ran".to_string())) })
    }
}

#[tokio::test]
async fn test_validation_runs_before_tool_body() {
    let mut registry = ToolRegistry::new();
    registry.register(ProbeTool);

    // out-of-range: rejected by the schema, body never runs
    let err = registry.dispatch("probe", json!({"count": 15})).await.unwrap_err();
    assert!(matches!(err, AgentError::Validation(_)), "got {:?}", err);

    // in-range: reaches the body
    let err = registry.dispatch("probe", json!({"count": 3})).await.unwrap_err();
    assert!(matches!(err, AgentError::ToolExecution(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_negative_costs_rejected() {
    let registry = travel_registry();

    let err = registry
        .dispatch(
            "trip_cost",
            json!({"flights": -1.0, "lodging": 20.0, "food": 30.0}),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Validation(_)));
    assert!(err.to_string().contains("trip_cost"));
}

#[tokio::test]
async fn test_day_count_bounds_rejected_not_clamped() {
    let registry = travel_registry();

    for days in [0, 15] {
        let err = registry
            .dispatch("itinerary", json!({"destination": "Lima", "days": days}))
            .await
            .unwrap_err();
        assert!(
            matches!(err, AgentError::Validation(_)),
            "days={} should fail validation, got {:?}",
            days,
            err
        );
    }

    for days in [1, 14] {
        let result = registry
            .dispatch("itinerary", json!({"destination": "Lima", "days": days}))
            .await
            .unwrap();
        assert_eq!(result["days"], days);
    }
}

#[tokio::test]
async fn test_unrecognized_interest_rejected() {
    let registry = travel_registry();

    let err = registry
        .dispatch(
            "itinerary",
            json!({"destination": "Lima", "days": 3, "interest": "shopping"}),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Validation(_)));
}

#[tokio::test]
async fn test_unrecognized_trip_type_is_not_a_schema_error() {
    // trip_type is a free string on purpose; unknown styles degrade inside
    // the tool instead of failing validation
    let registry = travel_registry();

    let result = registry
        .dispatch("checklist", json!({"trip_type": "safari"}))
        .await
        .unwrap();

    assert_eq!(result["items"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_negative_amount_and_rate_rejected() {
    let registry = travel_registry();

    let err = registry
        .dispatch(
            "convert_currency",
            json!({"amount": -5.0, "from": "USD", "to": "CLP"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::Validation(_)));

    let err = registry
        .dispatch(
            "convert_currency",
            json!({"amount": 5.0, "from": "USD", "to": "CLP", "rate": -2.0}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::Validation(_)));
}

#[tokio::test]
async fn test_unknown_tool_reported() {
    let registry = travel_registry();

    let err = registry
        .dispatch("teleport", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::ToolNotFound(_)));
    assert_eq!(err.error_code(), "TOOL_NOT_FOUND");
}
