//! Recommendation model
//!
//! A catalog row projected down to the fields the planner reports.

use serde::{Deserialize, Serialize};

/// A recommended food item: name and calorie value only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub calories: f64,
}

impl Recommendation {
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}
