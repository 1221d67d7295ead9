//! Planning pipeline
//!
//! Composes energy estimation, meal-time allocation, and catalog matching
//! into a single stateless call.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{ActivityLevel, BodyProfile, Goal, MealBudget, MealSlot, Recommendation};

use super::{allocate, recommend, total_daily_energy, PlanResult};

/// A complete daily meal plan
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    /// Total daily calorie target, rounded to two decimals
    pub total_calories: f64,
    /// Per-slot calorie budgets
    pub budget: MealBudget,
    /// Per-slot catalog matches, in slot order
    pub recommendations: Vec<SlotRecommendations>,
}

/// Catalog matches for one meal slot
#[derive(Debug, Clone, Serialize)]
pub struct SlotRecommendations {
    pub slot: MealSlot,
    pub calorie_target: u32,
    pub matches: Vec<Recommendation>,
}

/// Build a full plan: metrics -> total calories -> budgets -> matches
///
/// Each slot is matched independently against the same catalog snapshot.
/// The first failing step aborts the whole call; no partial plan is
/// returned.
pub fn plan(
    catalog: &Catalog,
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: Goal,
    tolerance: f64,
    category: Option<&str>,
) -> PlanResult<MealPlan> {
    let total_calories = total_daily_energy(profile, activity, goal)?;
    let budget = allocate(total_calories)?;

    let mut recommendations = Vec::with_capacity(MealSlot::ALL.len());
    for (slot, calorie_target) in budget.iter() {
        let matches = recommend(catalog, f64::from(calorie_target), tolerance, category)?;
        recommendations.push(SlotRecommendations {
            slot,
            calorie_target,
            matches,
        });
    }

    Ok(MealPlan {
        total_calories,
        budget,
        recommendations,
    })
}
