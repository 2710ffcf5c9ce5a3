// ABOUTME: Core data models for the meal-planning domain
// ABOUTME: Re-exports recipe, profile, plan, preference, and tracking types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! - `meal`: `MealType` and `Weekday`
//! - `recipe`: `Recipe`, `RecipeId`, `Macros`
//! - `profile`: `UserProfile`, `MacroTargets`
//! - `plan`: daily, weekly, multi-recipe and saved plans
//! - `preferences`: `FoodPreferences`
//! - `tracking`: `DailyTracking`

/// Meal type and weekday enums
pub mod meal;
/// Meal plans and saved snapshots
pub mod plan;
/// Food preference selections
pub mod preferences;
/// User profile and macro targets
pub mod profile;
/// Recipe catalog entries
pub mod recipe;
/// Daily intake tracking
pub mod tracking;

pub use meal::{MealType, Weekday};
pub use plan::{DailyMealPlan, MealPlan, PlanSnapshot, PlanType, SavedMealPlan, WeeklyMealPlan};
pub use preferences::{FoodCategory, FoodPreferences};
pub use profile::{ActivityLevel, Goal, MacroTargets, UserProfile};
pub use recipe::{Ingredient, Macros, Recipe, RecipeId};
pub use tracking::{Checklist, DailyTracking, LoggedMeal};
