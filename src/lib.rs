//! NutriPlan Library
//!
//! Core functionality for daily calorie planning and meal recommendations.

pub mod build_info;
pub mod catalog;
pub mod mcp;
pub mod models;
pub mod planner;
pub mod tools;
