// ABOUTME: Saved meal plan commands for macroplan-cli
// ABOUTME: Saves, loads, deletes, and lists named plan snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use macroplan::errors::AppResult;
use macroplan::services::MealPlanService;
use tracing::info;

use crate::helpers::display::display_saved_plans;

/// Save the active plan under a name
pub async fn save(service: &mut MealPlanService, name: &str) -> AppResult<()> {
    let saved = service.save_plan(name, Utc::now()).await?;
    info!(plan_id = %saved.id, "Saved plan from CLI");
    println!("Saved \"{}\" as {}.", saved.name, saved.id);
    Ok(())
}

/// Load a saved plan over the matching plan
pub async fn load(service: &mut MealPlanService, id: &str) -> AppResult<()> {
    let plan_type = service.load_saved(id).await?;
    println!("Loaded plan {id} ({plan_type:?}).");
    Ok(())
}

/// Delete a saved plan
pub async fn delete(service: &mut MealPlanService, id: &str) -> AppResult<()> {
    let removed = service.delete_saved(id).await?;
    println!("Deleted \"{}\".", removed.name);
    Ok(())
}

/// List saved plans
pub fn list(service: &MealPlanService) {
    display_saved_plans(service.plans().saved());
}
