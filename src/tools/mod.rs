//! NutriPlan tools module
//!
//! MCP tool implementations for the meal planner.

pub mod advisor;
pub mod planning;
pub mod status;
