// ABOUTME: AI meal command for macroplan-cli
// ABOUTME: Describes a meal to the AI collaborator and optionally logs the result for today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use macroplan::errors::AppResult;
use macroplan::services::MealPlanService;

use crate::helpers::display::format_macros;

/// Generate a meal from a description
pub async fn generate(
    service: &mut MealPlanService,
    description: &str,
    log_at: Option<&str>,
) -> AppResult<()> {
    let meal = service.generate_ai_meal(description).await?;

    println!("\n{} ({})", meal.name, meal.meal_type.label());
    println!("{}", "=".repeat(50));
    println!("   {}", format_macros(&meal.macros()));
    if let Some(instructions) = &meal.instructions {
        println!("   {instructions}");
    }

    if let Some(time) = log_at {
        service
            .log_meal(
                Local::now().date_naive(),
                &meal.name,
                time,
                (meal.protein, meal.carbs, meal.fat),
            )
            .await?;
        println!("Logged for today at {time}.");
    }
    Ok(())
}
