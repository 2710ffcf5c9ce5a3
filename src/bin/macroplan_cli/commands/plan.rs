// ABOUTME: Meal plan commands for macroplan-cli
// ABOUTME: Generates days and weeks with live stage output, and edits daily and weekly plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan::errors::AppResult;
use macroplan::intelligence::{GenerationProgress, StageStatus};
use macroplan::models::{MealType, PlanType, RecipeId, Weekday};
use macroplan::services::MealPlanService;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::helpers::display::{
    display_day, display_generated_day, display_meal_plan, display_week, format_macros,
};

/// Print each stage as it becomes active or complete, until all stages finish
fn spawn_progress_printer(
    mut receiver: broadcast::Receiver<GenerationProgress>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut printed = Vec::new();
        while let Ok(progress) = receiver.recv().await {
            for (stage, status) in progress.stages() {
                if status != StageStatus::Pending && !printed.contains(&(stage, status)) {
                    let marker = if status == StageStatus::Active {
                        "..."
                    } else {
                        "done"
                    };
                    println!("   {} {marker}", stage.label());
                    printed.push((stage, status));
                }
            }
            if progress.is_complete() {
                break;
            }
        }
    })
}

/// Generate one day of the weekly plan
pub async fn generate_day(service: &mut MealPlanService, day: Weekday) -> AppResult<()> {
    println!("Generating {day}...");
    let printer = spawn_progress_printer(service.subscribe_progress());
    let generated = match service.generate_day(day).await {
        Ok(generated) => {
            // Printer exits after the final stage completes
            printer.await.ok();
            generated
        }
        Err(e) => {
            printer.abort();
            return Err(e);
        }
    };

    display_generated_day(service.catalog(), day, &generated);
    Ok(())
}

/// Generate the whole week
pub async fn generate_week(service: &mut MealPlanService) -> AppResult<()> {
    println!("Generating weekly plan...");
    let printer = spawn_progress_printer(service.subscribe_progress());
    let generated = match service.generate_week().await {
        Ok(generated) => {
            // Printer exits after the final stage completes
            printer.await.ok();
            generated
        }
        Err(e) => {
            printer.abort();
            return Err(e);
        }
    };

    for (day, result) in &generated.days {
        display_generated_day(service.catalog(), *day, result);
    }
    Ok(())
}

/// Show the plan of the current (or requested) plan type
pub async fn show(service: &mut MealPlanService, plan_type: Option<PlanType>) -> AppResult<()> {
    if let Some(generated) = service.auto_generate_if_needed().await? {
        println!(
            "Generated a weekly plan from your targets ({} days).",
            generated.days.len()
        );
    }

    match plan_type.unwrap_or_else(|| service.plan_type()) {
        PlanType::Weekly => display_week(service.catalog(), service.plans().weekly()),
        PlanType::Daily => {
            display_meal_plan(service.catalog(), service.plans().current());
            if let Some(targets) = service.targets() {
                println!("   Targets:   {}", format_macros(&targets.as_macros()));
            }
        }
    }
    Ok(())
}

/// Show one day of the weekly plan
pub fn show_day(service: &MealPlanService, day: Weekday) {
    display_day(service.catalog(), day, service.plans().weekly().day(day));
}

/// Switch between the daily and weekly plan
pub async fn set_type(service: &mut MealPlanService, plan_type: PlanType) -> AppResult<()> {
    service.set_plan_type(plan_type).await?;
    println!("Plan type set to {plan_type:?}.");
    Ok(())
}

/// Add a recipe to the daily plan
pub async fn add(service: &mut MealPlanService, meal_type: MealType, id: RecipeId) -> AppResult<()> {
    service.add_recipe(meal_type, id).await?;
    println!("Added #{id} to {}.", meal_type.label());
    Ok(())
}

/// Remove a recipe from the daily plan
pub async fn remove(
    service: &mut MealPlanService,
    meal_type: MealType,
    id: RecipeId,
) -> AppResult<()> {
    if service.remove_recipe(meal_type, id).await? {
        println!("Removed #{id} from {}.", meal_type.label());
    } else {
        println!("#{id} is not in {}.", meal_type.label());
    }
    Ok(())
}

/// Replace a recipe in the daily plan
pub async fn replace(
    service: &mut MealPlanService,
    meal_type: MealType,
    old: RecipeId,
    new: RecipeId,
) -> AppResult<()> {
    service.replace_recipe(meal_type, old, new).await?;
    println!("Replaced #{old} with #{new} in {}.", meal_type.label());
    Ok(())
}

/// Set or clear one slot of the weekly plan
pub async fn set_slot(
    service: &mut MealPlanService,
    day: Weekday,
    meal_type: MealType,
    id: Option<RecipeId>,
) -> AppResult<()> {
    service.set_weekly_slot(day, meal_type, id).await?;
    show_day(service, day);
    Ok(())
}

/// Swap a weekly slot for a random alternative
pub async fn swap(service: &mut MealPlanService, day: Weekday, meal_type: MealType) -> AppResult<()> {
    match service.swap_weekly_slot(day, meal_type).await? {
        Some(id) => {
            println!("Swapped {} on {day} to #{id}.", meal_type.label());
            show_day(service, day);
        }
        None => println!("No other {} recipe to swap in.", meal_type.catalog_tag()),
    }
    Ok(())
}

/// Clear the daily plan, or the whole week with `weekly`
pub async fn clear(service: &mut MealPlanService, weekly: bool) -> AppResult<()> {
    if weekly {
        service.clear_week().await?;
        println!("Weekly plan cleared.");
    } else {
        service.clear_current().await?;
        println!("Daily plan cleared.");
    }
    Ok(())
}

/// Clear one day of the weekly plan
pub async fn clear_day(service: &mut MealPlanService, day: Weekday) -> AppResult<()> {
    service.clear_day(day).await?;
    println!("{day} cleared.");
    Ok(())
}

/// Copy one day to the rest of the week
pub async fn copy_day(service: &mut MealPlanService, day: Weekday) -> AppResult<()> {
    service.copy_day_to_week(day).await?;
    println!("Copied {day} to every day of the week.");
    Ok(())
}
