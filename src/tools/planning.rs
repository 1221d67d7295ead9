//! Planning MCP tools
//!
//! Response shaping for the calorie and recommendation tools.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{ActivityLevel, BodyProfile, Goal, MealBudget, Recommendation};
use crate::planner;
use crate::planner::pipeline::SlotRecommendations;

/// Response for daily_calories
#[derive(Debug, Serialize)]
pub struct DailyCaloriesResponse {
    pub basal_rate: f64,
    pub total_calories: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Response for split_calories
#[derive(Debug, Serialize)]
pub struct SplitCaloriesResponse {
    pub total_calories: f64,
    pub budget: MealBudget,
    /// Sum of the rounded slot budgets; may drift a few kcal from the total
    pub budget_sum: u32,
}

/// Response for recommend_meals
#[derive(Debug, Serialize)]
pub struct RecommendMealsResponse {
    pub calorie_target: f64,
    pub tolerance: f64,
    pub category: Option<String>,
    pub matches: Vec<Recommendation>,
    pub total: usize,
}

/// Response for plan_meals
#[derive(Debug, Serialize)]
pub struct PlanMealsResponse {
    pub total_calories: f64,
    pub budget: MealBudget,
    pub tolerance: f64,
    pub category: Option<String>,
    pub recommendations: Vec<SlotRecommendations>,
}

/// Compute basal rate and daily calorie target for a profile
pub fn daily_calories(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: Goal,
) -> Result<DailyCaloriesResponse, String> {
    let basal = planner::basal_rate(profile).map_err(|e| e.to_string())?;
    let total =
        planner::total_daily_energy(profile, activity, goal).map_err(|e| e.to_string())?;

    Ok(DailyCaloriesResponse {
        basal_rate: basal,
        total_calories: total,
        activity_level: activity,
        goal,
    })
}

/// Split a daily total into per-slot budgets
pub fn split_calories(total_calories: f64) -> Result<SplitCaloriesResponse, String> {
    let budget = planner::allocate(total_calories).map_err(|e| e.to_string())?;

    Ok(SplitCaloriesResponse {
        total_calories,
        budget_sum: budget.total(),
        budget,
    })
}

/// Match catalog rows against a single calorie target
pub fn recommend_meals(
    catalog: &Catalog,
    calorie_target: f64,
    tolerance: f64,
    category: Option<&str>,
) -> Result<RecommendMealsResponse, String> {
    let matches = planner::recommend(catalog, calorie_target, tolerance, category)
        .map_err(|e| e.to_string())?;

    Ok(RecommendMealsResponse {
        calorie_target,
        tolerance,
        category: category.map(str::to_string),
        total: matches.len(),
        matches,
    })
}

/// Build a full meal plan for a profile
pub fn plan_meals(
    catalog: &Catalog,
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: Goal,
    tolerance: f64,
    category: Option<&str>,
) -> Result<PlanMealsResponse, String> {
    let plan = planner::plan(catalog, profile, activity, goal, tolerance, category)
        .map_err(|e| e.to_string())?;

    Ok(PlanMealsResponse {
        total_calories: plan.total_calories,
        budget: plan.budget,
        tolerance,
        category: category.map(str::to_string),
        recommendations: plan.recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;
    use serde_json::json;

    #[test]
    fn test_daily_calories_response() {
        let profile = BodyProfile::new(70.0, 175.0, 25, Sex::Male);
        let resp =
            daily_calories(&profile, ActivityLevel::Moderate, Goal::Maintenance).unwrap();
        assert!((resp.basal_rate - 1673.75).abs() < 1e-9);
        assert_eq!(resp.total_calories, 2594.31);
    }

    #[test]
    fn test_split_reports_budget_sum() {
        let resp = split_calories(2000.0).unwrap();
        assert_eq!(resp.budget_sum, 2000);
        assert_eq!(resp.budget.lunch, 700);
    }

    #[test]
    fn test_recommend_meals_error_is_readable() {
        let catalog = Catalog::from_rows(vec![json!({"title": "A"})]).unwrap();
        let err = recommend_meals(&catalog, 500.0, 100.0, None).unwrap_err();
        assert!(err.contains("'name'"), "got: {}", err);
    }
}
