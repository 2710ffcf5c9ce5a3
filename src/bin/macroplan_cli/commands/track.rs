// ABOUTME: Daily tracking commands for macroplan-cli
// ABOUTME: Water glasses, hand-logged meals, completed main meals, checklists, and today's progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate};
use macroplan::constants::tracking::WATER_GLASSES_GOAL;
use macroplan::errors::AppResult;
use macroplan::models::{Checklist, MealType};
use macroplan::services::MealPlanService;

use crate::helpers::display::{display_tracking, format_macros};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Add or remove a glass of water
pub async fn water(service: &mut MealPlanService, remove: bool) -> AppResult<()> {
    let glasses = if remove {
        service.remove_water(today()).await?
    } else {
        service.add_water(today()).await?
    };
    println!("Water: {glasses}/{WATER_GLASSES_GOAL} glasses");
    Ok(())
}

/// Log a meal eaten today
pub async fn log_meal(
    service: &mut MealPlanService,
    name: &str,
    time: &str,
    macros: (f64, f64, f64),
) -> AppResult<()> {
    let logged = service.log_meal(today(), name, time, macros).await?;
    println!(
        "Logged {} at {}: {}",
        logged.name,
        logged.time,
        format_macros(&logged.macros())
    );
    Ok(())
}

/// Delete a logged meal by its 1-based position
pub async fn delete_meal(service: &mut MealPlanService, position: usize) -> AppResult<()> {
    let removed = service
        .delete_logged_meal(today(), position.saturating_sub(1))
        .await?;
    println!("Deleted {} at {}.", removed.name, removed.time);
    Ok(())
}

/// Mark a main meal as eaten or not
pub async fn complete(
    service: &mut MealPlanService,
    meal_type: MealType,
    undo: bool,
) -> AppResult<()> {
    service
        .set_meal_completed(today(), meal_type, !undo)
        .await?;
    println!(
        "{} marked {}.",
        meal_type.label(),
        if undo { "not eaten" } else { "eaten" }
    );
    Ok(())
}

/// Tick or untick a checklist item by its 1-based position
pub async fn check(
    service: &mut MealPlanService,
    list: Checklist,
    position: usize,
) -> AppResult<()> {
    let index = position.saturating_sub(1);
    let done = service.toggle_checklist_item(today(), list, index).await?;
    let item = list.items().get(index).copied().unwrap_or_default();
    println!("{}: {item} {}", list.label(), if done { "done" } else { "not done" });
    Ok(())
}

/// Tick or untick the after-lunch fiber habit
pub async fn fiber(service: &mut MealPlanService) -> AppResult<()> {
    let done = service.toggle_after_lunch_fiber(today()).await?;
    println!("After-lunch fiber {}.", if done { "done" } else { "not done" });
    Ok(())
}

/// Show today's record and progress
pub fn show(service: &MealPlanService) {
    let tracking = service.tracking();
    if tracking.date != today() {
        println!("No tracking recorded today.");
    }
    display_tracking(&service.tracking_progress());
    for (position, meal) in tracking.meals.iter().enumerate() {
        println!(
            "   {}. {} at {}: {}",
            position + 1,
            meal.name,
            meal.time,
            format_macros(&meal.macros())
        );
    }
}
