// ABOUTME: Nutrition configuration for macro target computation
// ABOUTME: Configures BMR coefficients, activity factors, macro ratios, goal offset, and profile bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use macroplan_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Bodyweight-based protein and fat ratios
    pub macronutrients: MacroRatioConfig,
    /// Calorie offset applied for bulk (+) and cut (-)
    pub goal: GoalAdjustmentConfig,
    /// Accepted ranges for profile fields
    pub profile_bounds: ProfileBoundsConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0 per kg)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25 per cm)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0 per year)
    pub msj_age_coef: f64,
    /// Sex constant (+5)
    pub msj_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_constant: 5.0,
        }
    }
}

/// Activity factor multipliers for maintenance calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little or no exercise: 1.2
    pub minimal: f64,
    /// 1-3 days/week: 1.375
    pub light: f64,
    /// 3-5 days/week: 1.55
    pub moderate: f64,
    /// 6-7 days/week: 1.725
    pub active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            minimal: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Minimal => self.minimal,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.minimal < 1.0 || self.active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if self.minimal >= self.light || self.light >= self.moderate || self.moderate >= self.active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

/// Grams of protein and fat per pound of bodyweight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Protein (g/lb): 1.0
    pub protein_g_per_lb: f64,
    /// Fat while cutting (g/lb): 0.35
    pub fat_g_per_lb_cut: f64,
    /// Fat for bulk and maintain (g/lb): 0.45
    pub fat_g_per_lb: f64,
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb: 1.0,
            fat_g_per_lb_cut: 0.35,
            fat_g_per_lb: 0.45,
        }
    }
}

impl MacroRatioConfig {
    /// Fat ratio for a goal
    #[must_use]
    pub const fn fat_ratio_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Cut => self.fat_g_per_lb_cut,
            Goal::Bulk | Goal::Maintain => self.fat_g_per_lb,
        }
    }
}

/// Calorie adjustment applied on top of maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Magnitude of the surplus/deficit (kcal)
    pub calorie_offset: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            calorie_offset: 400.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Signed offset for a goal
    #[must_use]
    pub fn offset_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Bulk => self.calorie_offset,
            Goal::Maintain => 0.0,
            Goal::Cut => -self.calorie_offset,
        }
    }
}

/// Accepted ranges for profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBoundsConfig {
    /// Minimum age (years)
    pub min_age: u32,
    /// Maximum age (years)
    pub max_age: u32,
    /// Minimum total height (inches)
    pub min_height_inches: u32,
    /// Maximum total height (inches)
    pub max_height_inches: u32,
    /// Maximum weight (lbs)
    pub max_weight_lbs: f64,
}

impl Default for ProfileBoundsConfig {
    fn default() -> Self {
        Self {
            min_age: 10,
            max_age: 120,
            min_height_inches: 36,
            max_height_inches: 96,
            max_weight_lbs: 1000.0,
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when coefficients, factors, ratios or bounds are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        self.activity_factors.validate()?;

        let ratios = &self.macronutrients;
        if ratios.protein_g_per_lb <= 0.0 || ratios.fat_g_per_lb_cut <= 0.0 || ratios.fat_g_per_lb <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Protein and fat ratios must be positive",
            ));
        }

        if self.goal.calorie_offset < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie offset must be non-negative",
            ));
        }

        let bounds = &self.profile_bounds;
        if bounds.min_age >= bounds.max_age {
            return Err(ConfigError::InvalidRange("min_age must be < max_age"));
        }
        if bounds.min_height_inches >= bounds.max_height_inches {
            return Err(ConfigError::InvalidRange(
                "min_height_inches must be < max_height_inches",
            ));
        }

        Ok(())
    }
}
