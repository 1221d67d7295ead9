//! Energy expenditure estimation
//!
//! Mifflin-St Jeor basal rate scaled by activity level and dietary goal.

use crate::models::{ActivityLevel, BodyProfile, Goal, Sex};

use super::PlanResult;

/// Basal metabolic rate in kcal/day
///
/// Mifflin-St Jeor:
/// - male:   `10*weight + 6.25*height - 5*age + 5`
/// - female: `10*weight + 6.25*height - 5*age - 161`
pub fn basal_rate(profile: &BodyProfile) -> PlanResult<f64> {
    profile.validate()?;

    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
        - 5.0 * f64::from(profile.age_years);

    Ok(match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

/// Total daily energy expenditure in kcal/day
///
/// Basal rate times the activity factor times the goal multiplier, rounded
/// to two decimal places (half away from zero, `f64::round` semantics).
pub fn total_daily_energy(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: Goal,
) -> PlanResult<f64> {
    let bmr = basal_rate(profile)?;
    let calories = bmr * activity.factor() * goal.multiplier();
    Ok(round2(calories))
}

/// Round to two decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn male_profile() -> BodyProfile {
        BodyProfile::new(70.0, 175.0, 25, Sex::Male)
    }

    #[test]
    fn test_basal_rate_male() {
        // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
        let bmr = basal_rate(&male_profile()).unwrap();
        assert!((bmr - 1673.75).abs() < 1e-9);
    }

    #[test]
    fn test_basal_rate_female() {
        // Same metrics, female offset: 10*70 + 6.25*175 - 5*25 - 161 = 1507.75
        let profile = BodyProfile::new(70.0, 175.0, 25, Sex::Female);
        let bmr = basal_rate(&profile).unwrap();
        assert!((bmr - 1507.75).abs() < 1e-9);
    }

    #[test]
    fn test_total_daily_energy_moderate_maintenance() {
        // 1673.75 * 1.55 = 2594.3125 -> 2594.31
        let total =
            total_daily_energy(&male_profile(), ActivityLevel::Moderate, Goal::Maintenance)
                .unwrap();
        assert_eq!(total, 2594.31);
    }

    #[test]
    fn test_goal_scales_total() {
        let profile = male_profile();
        let maintenance =
            total_daily_energy(&profile, ActivityLevel::Moderate, Goal::Maintenance).unwrap();
        let bulking =
            total_daily_energy(&profile, ActivityLevel::Moderate, Goal::Bulking).unwrap();
        let cutting =
            total_daily_energy(&profile, ActivityLevel::Moderate, Goal::Cutting).unwrap();

        assert!(cutting < maintenance && maintenance < bulking);
        assert!((bulking - round2(maintenance * 1.2)).abs() < 0.02);
        assert!((cutting - round2(maintenance * 0.8)).abs() < 0.02);
    }

    #[test]
    fn test_monotonic_in_activity() {
        let profile = male_profile();
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];
        let totals: Vec<f64> = levels
            .iter()
            .map(|&l| total_daily_energy(&profile, l, Goal::Maintenance).unwrap())
            .collect();
        assert!(totals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let profile = BodyProfile::new(-70.0, 175.0, 25, Sex::Male);
        assert!(basal_rate(&profile).is_err());
        assert!(total_daily_energy(&profile, ActivityLevel::Light, Goal::Cutting).is_err());
    }
}
