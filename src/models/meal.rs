//! Meal slot model
//!
//! The four meal times and the per-slot calorie budget produced by the
//! allocator.

use serde::{Deserialize, Serialize};

/// Meal slot enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// All slots in presentation order
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Fixed share of the daily total assigned to this slot.
    /// The four proportions sum to 1.0.
    pub fn proportion(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

/// Per-slot calorie budget in whole kilocalories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBudget {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snack: u32,
}

impl MealBudget {
    /// Budget for a single slot
    pub fn get(&self, slot: MealSlot) -> u32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    /// Iterate the slots with their budgets, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, u32)> + '_ {
        MealSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Sum of the four slot budgets. Because each slot is rounded
    /// independently this may differ from the allocated total by a few kcal.
    pub fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportions_sum_to_one() {
        let sum: f64 = MealSlot::ALL.iter().map(|s| s.proportion()).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_budget_accessors() {
        let budget = MealBudget {
            breakfast: 500,
            lunch: 700,
            dinner: 600,
            snack: 200,
        };
        assert_eq!(budget.get(MealSlot::Lunch), 700);
        assert_eq!(budget.total(), 2000);

        let slots: Vec<_> = budget.iter().collect();
        assert_eq!(slots[0], (MealSlot::Breakfast, 500));
        assert_eq!(slots[3], (MealSlot::Snack, 200));
    }
}
