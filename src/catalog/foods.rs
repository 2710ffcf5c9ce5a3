// ABOUTME: Fixed food lists the user picks preferences from
// ABOUTME: Validates that preferences cover every category with known foods only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macroplan_core::constants::preferences::MIN_FOODS_PER_CATEGORY;
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{FoodCategory, FoodPreferences};

/// Protein sources
pub const PROTEINS: [&str; 12] = [
    "Beef Liver",
    "Whole Eggs",
    "Ribeye Steak",
    "Ground Beef (10-20% Fat)",
    "Salmon",
    "Chicken Thighs",
    "Chicken Breast",
    "Turkey",
    "Sardines",
    "Greek Yogurt (Full Fat)",
    "Whey Protein Powder",
    "Cottage Cheese",
];

/// Carbohydrate sources
pub const CARBS: [&str; 12] = [
    "White Rice",
    "Jasmine/Basmati Rice",
    "Sweet Potatoes",
    "White Potatoes",
    "Oats",
    "Sourdough Bread",
    "Pasta",
    "Quinoa",
    "Bananas",
    "Berries",
    "Honey",
    "Brown Rice",
];

/// Fat sources
pub const FATS: [&str; 10] = [
    "Grass-Fed Butter",
    "Egg Yolks",
    "Avocado",
    "Avocado Oil",
    "Extra Virgin Olive Oil",
    "Almonds",
    "Macadamia Nuts",
    "Coconut Oil",
    "Ghee",
    "Cashews",
];

/// Food list for a category
#[must_use]
pub const fn foods_in(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::Proteins => &PROTEINS,
        FoodCategory::Carbs => &CARBS,
        FoodCategory::Fats => &FATS,
    }
}

/// Check that each category has enough picks and every pick is a listed food
///
/// # Errors
///
/// Returns `InvalidInput` naming the first offending category or food.
pub fn validate_preferences(preferences: &FoodPreferences) -> AppResult<()> {
    for category in FoodCategory::ALL {
        let known = foods_in(category);
        let selected = preferences.category(category);

        if let Some(unknown) = selected
            .iter()
            .find(|food| !known.iter().any(|k| k.eq_ignore_ascii_case(food)))
        {
            return Err(AppError::invalid_input(format!(
                "'{unknown}' is not a known food in {category}"
            )));
        }

        if selected.len() < MIN_FOODS_PER_CATEGORY {
            return Err(AppError::invalid_input(format!(
                "Select at least {MIN_FOODS_PER_CATEGORY} {category} (got {})",
                selected.len()
            )));
        }
    }
    Ok(())
}
