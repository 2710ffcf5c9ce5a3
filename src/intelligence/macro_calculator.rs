// ABOUTME: Daily calorie and macronutrient target calculation from a user profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled maintenance, goal offset, bodyweight macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Calculator
//!
//! Targets are derived in four steps:
//!
//! 1. BMR = 10 x `weight_kg` + 6.25 x `height_cm` - 5 x age + 5
//! 2. maintenance = BMR x activity factor
//! 3. calories = maintenance +/- goal offset (or the profile's calorie override)
//! 4. protein and fat from bodyweight ratios; carbs fill the remaining calories
//!
//! Every value is rounded to a whole number. Carbs are solved as the remainder so
//! `calories ~= 4p + 4c + 9f` holds by construction, and are clamped at zero
//! when protein and fat alone exceed the calorie target.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig, ProfileBoundsConfig};
use macroplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use macroplan_core::constants::units::INCHES_PER_FOOT;
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{ActivityLevel, MacroTargets, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of a target computation, with the intermediate energy values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargetCalculation {
    /// Final daily targets
    pub targets: MacroTargets,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Maintenance calories before the goal offset (kcal/day)
    pub maintenance: f64,
    /// Adjustments the user should know about (clamped values)
    pub warnings: Vec<String>,
}

/// Reject profiles the formula cannot be applied to
///
/// # Errors
///
/// Returns `InvalidInput` for non-positive weight, inches >= 12, or age / height
/// outside the configured bounds, and for a non-positive calorie override.
pub fn validate_profile(profile: &UserProfile, bounds: &ProfileBoundsConfig) -> AppResult<()> {
    if !profile.weight_lbs.is_finite()
        || profile.weight_lbs <= 0.0
        || profile.weight_lbs > bounds.max_weight_lbs
    {
        return Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {} lbs",
            bounds.max_weight_lbs
        )));
    }
    if profile.height_inches >= INCHES_PER_FOOT {
        return Err(AppError::invalid_input(
            "Height inches must be between 0 and 11",
        ));
    }
    let total_inches = profile.total_height_inches();
    if !(bounds.min_height_inches..=bounds.max_height_inches).contains(&total_inches) {
        return Err(AppError::invalid_input(format!(
            "Height must be between {} and {} inches",
            bounds.min_height_inches, bounds.max_height_inches
        )));
    }
    if !(bounds.min_age..=bounds.max_age).contains(&profile.age) {
        return Err(AppError::invalid_input(format!(
            "Age must be between {} and {} years",
            bounds.min_age, bounds.max_age
        )));
    }
    if let Some(calories) = profile.calorie_override {
        if !calories.is_finite() || calories <= 0.0 {
            return Err(AppError::invalid_input(
                "Calorie override must be a positive number",
            ));
        }
    }
    Ok(())
}

/// Mifflin-St Jeor BMR (kcal/day)
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    config.msj_age_coef.mul_add(
        f64::from(profile.age),
        config.msj_weight_coef.mul_add(
            profile.weight_kg(),
            config.msj_height_coef * profile.height_cm(),
        ),
    ) + config.msj_constant
}

/// Maintenance calories: BMR scaled by the activity factor
#[must_use]
pub fn calculate_maintenance(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Compute daily macro targets for a profile
///
/// # Errors
///
/// Returns `InvalidInput` if the profile fails [`validate_profile`].
pub fn compute_targets(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> AppResult<MacroTargetCalculation> {
    validate_profile(profile, &config.profile_bounds)?;

    let mut warnings = Vec::new();

    let bmr = calculate_bmr(profile, &config.bmr);
    let maintenance = calculate_maintenance(bmr, profile.activity_level, &config.activity_factors);

    let mut calories = profile
        .calorie_override
        .unwrap_or_else(|| maintenance + config.goal.offset_for(profile.goal))
        .round();
    if calories < 0.0 {
        warn!(calories, "Calorie target below zero, clamping to 0");
        warnings.push(format!(
            "Calorie target of {calories} kcal was below zero and has been set to 0"
        ));
        calories = 0.0;
    }

    let ratios = &config.macronutrients;
    let protein = (profile.weight_lbs * ratios.protein_g_per_lb).round();
    let fats = (profile.weight_lbs * ratios.fat_ratio_for(profile.goal)).round();

    let remaining = fats.mul_add(-KCAL_PER_G_FAT, protein.mul_add(-KCAL_PER_G_PROTEIN, calories));
    let mut carbs = (remaining / KCAL_PER_G_CARBS).round();
    if carbs < 0.0 {
        warn!(
            calories,
            protein, fats, carbs, "Protein and fat exceed the calorie target, clamping carbs to 0"
        );
        warnings.push(format!(
            "Protein ({protein} g) and fat ({fats} g) exceed {calories} kcal; carbs set to 0"
        ));
        carbs = 0.0;
    }

    let targets = MacroTargets {
        calories,
        protein,
        carbs,
        fats,
    };

    debug!(
        bmr,
        maintenance,
        calories,
        protein,
        carbs,
        fats,
        goal = %profile.goal,
        "Computed macro targets"
    );

    Ok(MacroTargetCalculation {
        targets,
        bmr,
        maintenance,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroplan_core::models::Goal;

    fn profile() -> UserProfile {
        UserProfile {
            weight_lbs: 180.0,
            height_feet: 5,
            height_inches: 10,
            age: 25,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            calorie_override: None,
        }
    }

    #[test]
    fn test_bmr_matches_hand_calculation() {
        let bmr = calculate_bmr(&profile(), &BmrConfig::default());
        // 10 * 81.64656 + 6.25 * 177.8 - 5 * 25 + 5
        assert!((bmr - 1807.7156).abs() < 1e-3);
    }

    #[test]
    fn test_inches_must_be_below_twelve() {
        let mut p = profile();
        p.height_inches = 12;
        let err = validate_profile(&p, &ProfileBoundsConfig::default()).unwrap_err();
        assert!(err.message.contains("inches"));
    }
}
