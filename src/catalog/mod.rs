// ABOUTME: Immutable recipe catalog embedded at build time
// ABOUTME: Lookup, meal-type partitions, search, preference filters, and plan totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe catalog
//!
//! The catalog is a fixed list of recipes shipped with the binary. It is parsed
//! once at startup and never mutated. Plans only hold recipe ids; macro totals
//! are always resolved against the catalog.

/// Fixed food lists and preference validation
pub mod foods;

use std::collections::{BTreeMap, HashSet};

use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{
    DailyMealPlan, FoodPreferences, Macros, MealPlan, MealType, Recipe, RecipeId,
};
use tracing::debug;

const BUILTIN_RECIPES: &str = include_str!("data/recipes.json");

/// Recipes grouped by meal type, every meal type present (possibly empty)
pub type MealPartitions<'a> = BTreeMap<MealType, Vec<&'a Recipe>>;

/// Fixed, read-only recipe collection
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Parse the catalog shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the embedded data is malformed, or
    /// `InvalidInput` if it contains duplicate ids.
    pub fn builtin() -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(BUILTIN_RECIPES)?;
        Self::from_recipes(recipes)
    }

    /// Build a catalog from an explicit recipe list
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if two recipes share an id.
    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate recipe id {} in catalog",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Look up a recipe by id, failing with `ResourceNotFound`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe has this id.
    pub fn require(&self, id: RecipeId) -> AppResult<&Recipe> {
        self.get(id)
            .ok_or_else(|| AppError::not_found("Recipe").with_resource_id(id.to_string()))
    }

    /// Recipes tagged with one meal type, in catalog order
    pub fn by_meal_type(&self, meal_type: MealType) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.meal_type == meal_type)
    }

    /// Partition the catalog by meal type
    #[must_use]
    pub fn partition(&self) -> MealPartitions<'_> {
        MealType::ALL
            .into_iter()
            .map(|meal_type| (meal_type, self.by_meal_type(meal_type).collect()))
            .collect()
    }

    /// Case-insensitive search on recipe name or ingredient names
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.matches_query(query))
            .collect()
    }

    /// Recipes that list `food` as a required food
    #[must_use]
    pub fn requiring_food(&self, food: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.requires_food(food))
            .collect()
    }

    /// Recipes whose id is in `favorites`
    #[must_use]
    pub fn favorites(&self, favorites: &HashSet<RecipeId>) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| favorites.contains(&recipe.id))
            .collect()
    }

    /// Recipes whose required foods are all among the user's selections
    #[must_use]
    pub fn matching_preferences(&self, preferences: &FoodPreferences) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| {
                recipe
                    .required_foods
                    .iter()
                    .all(|food| preferences.contains(food))
            })
            .collect()
    }

    /// Sum the macros of the given recipe ids; unknown ids contribute nothing
    pub fn totals<I>(&self, ids: I) -> Macros
    where
        I: IntoIterator<Item = RecipeId>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let recipe = self.get(id);
                if recipe.is_none() {
                    debug!(recipe_id = %id, "Skipping unknown recipe id in totals");
                }
                recipe.map(|recipe| recipe.macros)
            })
            .sum()
    }

    /// Totals of the filled slots of a single-recipe day
    #[must_use]
    pub fn day_totals(&self, day: &DailyMealPlan) -> Macros {
        self.totals(day.recipe_ids())
    }

    /// Totals of every recipe in a multi-recipe plan
    #[must_use]
    pub fn meal_plan_totals(&self, plan: &MealPlan) -> Macros {
        self.totals(plan.recipe_ids())
    }
}
