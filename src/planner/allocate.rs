//! Meal-time calorie allocation
//!
//! Splits a daily total into the four fixed meal-slot proportions.

use crate::models::{MealBudget, MealSlot};

use super::{PlanError, PlanResult};

/// Split a daily calorie total into per-slot budgets
///
/// Each slot's share is rounded to the nearest whole kcal independently
/// (half away from zero). The rounded values are not re-balanced, so their
/// sum can drift a few kcal from the input total; that drift is a known
/// property of the split, not corrected here.
pub fn allocate(total_calories: f64) -> PlanResult<MealBudget> {
    if !total_calories.is_finite() || total_calories < 0.0 {
        return Err(PlanError::InvalidInput(
            "total calories must be a finite non-negative number".to_string(),
        ));
    }

    let slot = |s: MealSlot| (total_calories * s.proportion()).round() as u32;

    Ok(MealBudget {
        breakfast: slot(MealSlot::Breakfast),
        lunch: slot(MealSlot::Lunch),
        dinner: slot(MealSlot::Dinner),
        snack: slot(MealSlot::Snack),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_2000() {
        let budget = allocate(2000.0).unwrap();
        assert_eq!(budget.breakfast, 500);
        assert_eq!(budget.lunch, 700);
        assert_eq!(budget.dinner, 600);
        assert_eq!(budget.snack, 200);
        assert_eq!(budget.total(), 2000);
    }

    #[test]
    fn test_allocate_fractional_total() {
        // 2695.06: 673.765 -> 674, 943.271 -> 943, 808.518 -> 809, 269.506 -> 270
        let budget = allocate(2695.06).unwrap();
        assert_eq!(budget.breakfast, 674);
        assert_eq!(budget.lunch, 943);
        assert_eq!(budget.dinner, 809);
        assert_eq!(budget.snack, 270);
        // Independent rounding drifts the sum slightly from the input
        assert_eq!(budget.total(), 2696);
    }

    #[test]
    fn test_sum_stays_within_rounding_slack() {
        for total in [1.0, 123.0, 1437.5, 1800.25, 2200.0, 3521.99] {
            let budget = allocate(total).unwrap();
            let drift = (f64::from(budget.total()) - total).abs();
            assert!(drift <= 2.0, "total {} drifted by {}", total, drift);
        }
    }

    #[test]
    fn test_allocate_zero() {
        let budget = allocate(0.0).unwrap();
        assert_eq!(budget.total(), 0);
    }

    #[test]
    fn test_allocate_rejects_invalid() {
        assert!(allocate(-1.0).is_err());
        assert!(allocate(f64::NAN).is_err());
        assert!(allocate(f64::INFINITY).is_err());
    }
}
