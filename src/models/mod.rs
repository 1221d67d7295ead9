//! Data models
//!
//! Rust structs representing planning inputs and outputs.

mod meal;
mod profile;
mod record;

pub use meal::{MealBudget, MealSlot};
pub use profile::{ActivityLevel, BodyProfile, Goal, Sex};
pub use record::Recommendation;
