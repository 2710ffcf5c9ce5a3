// ABOUTME: Recipe catalog, favorite, and selection commands for macroplan-cli
// ABOUTME: Lists, searches, and shows recipes; toggles favorites and selected recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan::errors::AppResult;
use macroplan::models::{MealType, Recipe, RecipeId};
use macroplan::services::MealPlanService;

use crate::helpers::display::{display_recipe, display_recipe_list};

/// List recipes, optionally limited to one meal type, favorites, or preference matches
pub fn list(
    service: &MealPlanService,
    meal_type: Option<MealType>,
    favorites_only: bool,
    matching_preferences: bool,
) {
    let catalog = service.catalog();
    let favorites = service.favorite_set();

    let mut recipes: Vec<&Recipe> = if matching_preferences {
        catalog.matching_preferences(service.preferences())
    } else {
        catalog.recipes().iter().collect()
    };
    if let Some(meal_type) = meal_type {
        recipes.retain(|recipe| recipe.meal_type == meal_type);
    }
    if favorites_only {
        recipes.retain(|recipe| favorites.contains(&recipe.id));
    }

    if recipes.is_empty() {
        println!("No recipes match.");
        return;
    }
    display_recipe_list(recipes, service.favorites());
}

/// Search by name or ingredient, optionally requiring a food
pub fn search(service: &MealPlanService, query: &str, food: Option<&str>) {
    let mut results = service.catalog().search(query);
    if let Some(food) = food {
        results.retain(|recipe| recipe.requires_food(food));
    }

    println!("{} recipe(s) found", results.len());
    display_recipe_list(results, service.favorites());
}

/// Show one recipe in full
pub fn show(service: &MealPlanService, id: RecipeId) -> AppResult<()> {
    let recipe = service.catalog().require(id)?;
    display_recipe(recipe);
    Ok(())
}

/// Toggle a favorite
pub async fn toggle_favorite(service: &mut MealPlanService, id: RecipeId) -> AppResult<()> {
    let favorite = service.toggle_favorite(id).await?;
    if favorite {
        println!("Recipe #{id} added to favorites.");
    } else {
        println!("Recipe #{id} removed from favorites.");
    }
    Ok(())
}

/// List favorites in the order they were added
pub fn list_favorites(service: &MealPlanService) {
    let catalog = service.catalog();
    let recipes: Vec<&Recipe> = service
        .favorites()
        .iter()
        .filter_map(|id| catalog.get(*id))
        .collect();
    if recipes.is_empty() {
        println!("No favorites yet.");
        return;
    }
    display_recipe_list(recipes, service.favorites());
}

/// Toggle a recipe in the selection
pub async fn toggle_selected(service: &mut MealPlanService, id: RecipeId) -> AppResult<()> {
    let selected = service.toggle_selected(id).await?;
    println!(
        "Recipe #{id} {}. {} recipe(s) selected.",
        if selected { "selected" } else { "deselected" },
        service.selected_recipes().len()
    );
    Ok(())
}

/// Mark meal selection finished
pub async fn finish_selection(service: &mut MealPlanService, done: bool) -> AppResult<()> {
    service.set_meals_selected(done).await?;
    println!(
        "Meal selection marked {}.",
        if done { "finished" } else { "open" }
    );
    Ok(())
}
