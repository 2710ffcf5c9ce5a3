// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for macroplan-cli
// ABOUTME: Provides consistent display functions for targets, recipes, plans, and tracking

use macroplan::catalog::RecipeCatalog;
use macroplan::intelligence::{GeneratedDay, MacroTargetCalculation};
use macroplan::models::{
    DailyMealPlan, MacroTargets, Macros, MealPlan, MealType, Recipe, RecipeId, SavedMealPlan,
    UserProfile, Weekday, WeeklyMealPlan,
};
use macroplan::tracking::TrackingProgress;

fn recipe_label(catalog: &RecipeCatalog, id: Option<RecipeId>) -> String {
    match id {
        None => "-".to_owned(),
        Some(id) => catalog
            .get(id)
            .map_or_else(|| format!("#{id} (unknown)"), |recipe| format!("#{id} {}", recipe.name)),
    }
}

/// One-line macro summary
pub fn format_macros(macros: &Macros) -> String {
    format!(
        "{:.0} kcal | P {:.0}g | C {:.0}g | F {:.0}g",
        macros.calories, macros.protein, macros.carbs, macros.fats
    )
}

/// Display a profile
pub fn display_profile(profile: &UserProfile) {
    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Weight: {} lbs", profile.weight_lbs);
    println!(
        "   Height: {}'{}\"",
        profile.height_feet, profile.height_inches
    );
    println!("   Age: {}", profile.age);
    println!("   Activity: {}", profile.activity_level);
    println!("   Goal: {}", profile.goal);
    if let Some(calories) = profile.calorie_override {
        println!("   Calorie override: {calories:.0} kcal");
    }
}

/// Display daily targets
pub fn display_targets(targets: &MacroTargets) {
    println!("\nDaily Targets");
    println!("{}", "=".repeat(50));
    println!("   Calories: {:.0} kcal", targets.calories);
    println!("   Protein:  {:.0} g", targets.protein);
    println!("   Carbs:    {:.0} g", targets.carbs);
    println!("   Fats:     {:.0} g", targets.fats);
}

/// Display a target calculation with its intermediates and warnings
pub fn display_calculation(calculation: &MacroTargetCalculation) {
    display_targets(&calculation.targets);
    println!("   BMR: {:.0} kcal", calculation.bmr);
    println!("   Maintenance: {:.0} kcal", calculation.maintenance);
    for warning in &calculation.warnings {
        println!("   WARNING {warning}");
    }
}

/// Display a compact recipe list
pub fn display_recipe_list<'a>(
    recipes: impl IntoIterator<Item = &'a Recipe>,
    favorites: &[RecipeId],
) {
    for recipe in recipes {
        let star = if favorites.contains(&recipe.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{star} #{:<3} {:<10} {:<45} {}",
            recipe.id,
            recipe.meal_type,
            recipe.name,
            format_macros(&recipe.macros)
        );
    }
}

/// Display one recipe in full
pub fn display_recipe(recipe: &Recipe) {
    println!("\n#{} {}", recipe.id, recipe.name);
    println!("{}", "=".repeat(60));
    println!("   Meal type: {}", recipe.meal_type.label());
    println!("   Serving: {}", recipe.serving_size);
    println!("   Prep: {} | Cook: {}", recipe.prep_time, recipe.cook_time);
    println!("   Macros: {}", format_macros(&recipe.macros));

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("   - {} ({})", ingredient.name, ingredient.amount);
    }

    println!("\nInstructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("   {}. {instruction}", step + 1);
    }
}

/// Display one single-recipe day
pub fn display_day(catalog: &RecipeCatalog, day: Weekday, plan: &DailyMealPlan) {
    println!("\n{}", day.name().to_uppercase());
    for meal_type in MealType::ALL {
        println!(
            "   {:<10} {}",
            meal_type.label(),
            recipe_label(catalog, plan.slot(meal_type))
        );
    }
    println!("   Totals:    {}", format_macros(&catalog.day_totals(plan)));
}

/// Display a generated day with its score terms
pub fn display_generated_day(catalog: &RecipeCatalog, day: Weekday, generated: &GeneratedDay) {
    display_day(catalog, day, &generated.plan);
    println!(
        "   Score: {:.1} (weighted {:.1}, bonus {:.0}, variety {:.0}; {} candidates)",
        generated.score.score,
        generated.score.weighted_diff,
        generated.score.bonus,
        generated.score.variety_penalty,
        generated.candidates_evaluated
    );
}

/// Display the weekly plan
pub fn display_week(catalog: &RecipeCatalog, week: &WeeklyMealPlan) {
    if week.is_empty() {
        println!("Weekly plan is empty. Run `macroplan-cli plan generate-week`.");
        return;
    }
    for (day, plan) in week.days() {
        display_day(catalog, day, plan);
    }
}

/// Display the multi-recipe daily plan
pub fn display_meal_plan(catalog: &RecipeCatalog, plan: &MealPlan) {
    if plan.is_empty() {
        println!("Daily plan is empty. Add recipes with `macroplan-cli plan add`.");
        return;
    }
    for meal_type in MealType::ALL {
        let labels: Vec<String> = plan
            .slot(meal_type)
            .iter()
            .map(|id| recipe_label(catalog, Some(*id)))
            .collect();
        let joined = if labels.is_empty() {
            "-".to_owned()
        } else {
            labels.join(", ")
        };
        println!("   {:<10} {joined}", meal_type.label());
    }
    println!(
        "   Totals:    {}",
        format_macros(&catalog.meal_plan_totals(plan))
    );
}

/// Display saved plans
pub fn display_saved_plans(saved: &[SavedMealPlan]) {
    if saved.is_empty() {
        println!("No saved plans.");
        return;
    }
    for plan in saved {
        println!(
            "   {}  {:<30} {:<7} {}",
            plan.id,
            plan.name,
            format!("{:?}", plan.plan.plan_type()).to_lowercase(),
            plan.created_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

/// Display today's tracking progress
pub fn display_tracking(progress: &TrackingProgress) {
    println!("\nToday");
    println!("{}", "=".repeat(50));
    println!(
        "   Water: {}/{} glasses ({}%)",
        progress.water_glasses,
        progress.water_goal,
        progress.water_percent()
    );
    println!("   Main meals completed: {}/3", progress.meals_completed);
    println!("   Logged: {}", format_macros(&progress.totals));
    if let Some((calories, protein, carbs, fats)) = progress.macro_percents() {
        println!(
            "   Of target: kcal {calories:.0}% | P {protein:.0}% | C {carbs:.0}% | F {fats:.0}%"
        );
    }
    for (list, done, total) in &progress.checklists {
        println!("   {}: {done}/{total}", list.label());
    }
    println!(
        "   After-lunch fiber: {}",
        if progress.after_lunch_fiber { "done" } else { "not done" }
    );
}
