// ABOUTME: Profile, target, food preference, and reset commands for macroplan-cli
// ABOUTME: Profile changes recompute and persist the daily macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use macroplan::catalog::foods;
use macroplan::errors::{AppError, AppResult};
use macroplan::models::{FoodCategory, FoodPreferences, UserProfile};
use macroplan::services::MealPlanService;
use tracing::info;

use crate::helpers::display::{display_calculation, display_profile, display_targets};

/// Replace the profile and print the new targets
pub async fn set(service: &mut MealPlanService, profile: UserProfile) -> AppResult<()> {
    info!("Updating profile");
    let calculation = service.set_profile(profile).await?;
    display_calculation(&calculation);
    Ok(())
}

/// Print the stored profile
pub fn show(service: &MealPlanService) -> AppResult<()> {
    let profile = service
        .profile()
        .ok_or_else(|| AppError::not_found("Profile"))?;
    display_profile(profile);
    Ok(())
}

/// Print the stored targets
pub fn targets(service: &MealPlanService) -> AppResult<()> {
    let targets = service.targets().ok_or_else(|| {
        AppError::missing_field("Macro targets are not set; run `macroplan-cli profile set`")
    })?;
    display_targets(targets);
    Ok(())
}

/// Replace the food preferences
pub async fn set_preferences(
    service: &mut MealPlanService,
    preferences: FoodPreferences,
) -> AppResult<()> {
    service.set_preferences(preferences).await?;
    println!("Food preferences saved.");
    show_preferences(service);
    Ok(())
}

/// Print the preferences next to every available food
pub fn show_preferences(service: &MealPlanService) {
    let preferences = service.preferences();
    for category in FoodCategory::ALL {
        println!("\n{category}:");
        for food in foods::foods_in(category) {
            let mark = if preferences.contains(food) { "x" } else { " " };
            println!("   [{mark}] {food}");
        }
    }
}

/// Delete every stored value
pub async fn reset(service: &mut MealPlanService) -> AppResult<()> {
    service.reset_all(Local::now().date_naive()).await?;
    println!("All data cleared.");
    Ok(())
}
