//! travel-agent-rs: a demo travel-agent chat assistant built on LLM tool calling
//!
//! The crate wires a chat model to a small set of deterministic trip-planning
//! tools (cost breakdown, itinerary, packing checklist, currency conversion)
//! plus an optional web search tool, and drives them from an interactive
//! console loop. Tool arguments are validated against their JSON Schemas
//! before any tool body runs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use travel_agent_rs::{Agent, ToolRegistry, tools::TripCostTool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("OPENAI_API_KEY")?;
//!     let mut tools = ToolRegistry::new();
//!     tools.register(TripCostTool::new());
//!
//!     let agent = Agent::new(api_key, tools).with_max_iterations(5);
//!
//!     let history = travel_agent_rs::ChatHistory::new();
//!     let reply = agent.respond(&history, "What does a $900 flight plus $400 lodging come to?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub(crate) mod services;
pub mod tools;

pub use config::AgentConfig;
pub use core::{Agent, ChatHistory, ConversationTurn, Role};
pub use error::{AgentError, Result};
pub use schemas::validation::{deserialize_params, validate_tool_arguments};
pub use tools::{Tool, ToolRegistry};

#[cfg(feature = "cli")]
pub mod cli;
