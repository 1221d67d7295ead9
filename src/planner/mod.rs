//! Planning module
//!
//! The computation core: energy expenditure, meal-time allocation, and
//! tolerance-based catalog matching. Every function here is pure.

pub mod allocate;
pub mod energy;
pub mod matcher;
pub mod pipeline;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Planning error types
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed or out-of-enum profile, activity, goal, or calorie value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catalog is missing a required column
    #[error("column '{column}' not found in the catalog")]
    Schema { column: String },

    /// The external catalog failed to load or parse
    #[error(transparent)]
    Source(#[from] CatalogError),
}

/// Result type for planning operations
pub type PlanResult<T> = Result<T, PlanError>;

pub use allocate::allocate;
pub use energy::{basal_rate, total_daily_energy};
pub use matcher::recommend;
pub use pipeline::{plan, MealPlan, SlotRecommendations};
