// ABOUTME: User profile and derived macro target models
// ABOUTME: Defines ActivityLevel, Goal, UserProfile with unit conversion, and MacroTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::Macros;
use crate::constants::{
    energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN},
    units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB},
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity level used to scale BMR into maintenance calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Minimal,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
}

impl ActivityLevel {
    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" | "sedentary" => Ok(Self::Minimal),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level '{other}' (expected minimal, light, moderate, or active)"
            ))),
        }
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric surplus
    Bulk,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric deficit
    Cut,
}

impl Goal {
    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Maintain => "maintain",
            Self::Cut => "cut",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bulk" => Ok(Self::Bulk),
            "maintain" => Ok(Self::Maintain),
            "cut" => Ok(Self::Cut),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal '{other}' (expected bulk, maintain, or cut)"
            ))),
        }
    }
}

/// User body metrics and goal, the sole input to target computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in pounds
    #[serde(rename = "weight")]
    pub weight_lbs: f64,
    /// Height, whole feet
    pub height_feet: u32,
    /// Height, remaining inches (0-11)
    pub height_inches: u32,
    /// Age in years
    pub age: u32,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
    /// Total calories the user set by hand; replaces the formula's calorie target
    #[serde(default, rename = "calories", skip_serializing_if = "Option::is_none")]
    pub calorie_override: Option<f64>,
}

impl UserProfile {
    /// Body weight in kilograms
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_lbs * KG_PER_LB
    }

    /// Total height in inches
    #[must_use]
    pub const fn total_height_inches(&self) -> u32 {
        self.height_feet * INCHES_PER_FOOT + self.height_inches
    }

    /// Height in centimeters
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        f64::from(self.total_height_inches()) * CM_PER_INCH
    }
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily calories (kcal)
    pub calories: f64,
    /// Daily protein (g)
    pub protein: f64,
    /// Daily carbohydrates (g)
    pub carbs: f64,
    /// Daily fat (g)
    pub fats: f64,
}

impl MacroTargets {
    /// View the targets as a macro profile for comparisons against plan totals
    #[must_use]
    pub const fn as_macros(&self) -> Macros {
        Macros::new(self.protein, self.carbs, self.fats, self.calories)
    }

    /// Energy implied by the three macronutrients
    #[must_use]
    pub fn energy_from_macros(&self) -> f64 {
        self.fats.mul_add(
            KCAL_PER_G_FAT,
            self.protein
                .mul_add(KCAL_PER_G_PROTEIN, self.carbs * KCAL_PER_G_CARBS),
        )
    }
}
