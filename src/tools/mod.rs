//! Tools module containing tool abstractions and the travel tool set

pub mod checklist;
pub mod currency;
pub mod itinerary;
pub mod tool;
pub mod trip_cost;
pub mod web_search;

pub use checklist::ChecklistTool;
pub use currency::CurrencyTool;
pub use itinerary::ItineraryTool;
pub use tool::{Tool, ToolRegistry};
pub use trip_cost::TripCostTool;
pub use web_search::WebSearchTool;
