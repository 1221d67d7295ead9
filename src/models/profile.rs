//! Body profile model
//!
//! Typed inputs for the energy calculation: body metrics plus the
//! activity-level and goal selections.

use serde::{Deserialize, Serialize};

use crate::planner::{PlanError, PlanResult};

/// Biological sex category used by the Mifflin-St Jeor formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse from string, rejecting anything outside the two variants
    pub fn parse(s: &str) -> PlanResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(PlanError::InvalidInput(
                "sex category must be male or female".to_string(),
            )),
        }
    }
}

/// Activity level with its fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// The multiplicative factor applied to the basal rate
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse from string, rejecting unknown levels
    pub fn parse(s: &str) -> PlanResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(PlanError::InvalidInput("invalid activity level".to_string())),
        }
    }
}

/// Dietary goal with its fixed calorie multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maintenance,
    Bulking,
    Cutting,
}

impl Goal {
    /// The multiplier applied on top of the activity-scaled calories
    pub fn multiplier(&self) -> f64 {
        match self {
            Goal::Maintenance => 1.0,
            Goal::Bulking => 1.2,
            Goal::Cutting => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintenance => "maintenance",
            Goal::Bulking => "bulking",
            Goal::Cutting => "cutting",
        }
    }

    /// Parse from string, rejecting unknown goals
    pub fn parse(s: &str) -> PlanResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" => Ok(Goal::Maintenance),
            "bulking" => Ok(Goal::Bulking),
            "cutting" => Ok(Goal::Cutting),
            _ => Err(PlanError::InvalidInput("invalid goal".to_string())),
        }
    }
}

/// Body metrics for a single planning request
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
}

impl BodyProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// Check that the numeric metrics are finite and positive
    pub fn validate(&self) -> PlanResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(PlanError::InvalidInput(
                "weight must be a positive number of kilograms".to_string(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(PlanError::InvalidInput(
                "height must be a positive number of centimeters".to_string(),
            ));
        }
        if self.age_years == 0 {
            return Err(PlanError::InvalidInput(
                "age must be a positive number of years".to_string(),
            ));
        }
        Ok(())
    }
}
