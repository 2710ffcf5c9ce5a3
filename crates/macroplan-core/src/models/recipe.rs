// ABOUTME: Recipe catalog entry and macro profile types
// ABOUTME: Defines RecipeId, Ingredient, Macros, and Recipe with macro arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Unique numeric identifier of a catalog recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecipeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Macro content of a recipe or a sum of recipes
///
/// Calories are carried independently of the three macronutrients. Catalog values
/// do not always satisfy `4p + 4c + 9f` exactly and must not be recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fats: f64,
    /// Energy in kcal
    pub calories: f64,
}

impl Macros {
    /// All-zero macro profile
    pub const ZERO: Self = Self {
        protein: 0.0,
        carbs: 0.0,
        fats: 0.0,
        calories: 0.0,
    };

    /// Create a macro profile
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fats: f64, calories: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
            calories,
        }
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
            calories: self.calories + rhs.calories,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Macros {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (matches a food list entry where possible)
    pub name: String,
    /// Free-form amount ("6 large eggs", "1 tbsp")
    pub amount: String,
}

/// Immutable catalog recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique id
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Meal type tag
    pub meal_type: MealType,
    /// Ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Serving size description
    pub serving_size: String,
    /// Macro profile per serving
    pub macros: Macros,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Preparation time ("5 min")
    pub prep_time: String,
    /// Cooking time ("12 min")
    pub cook_time: String,
    /// Foods that must be among the user's preferences for this recipe to match
    #[serde(default)]
    pub required_foods: Vec<String>,
}

impl Recipe {
    /// Case-insensitive match on name or any ingredient name
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.to_lowercase().contains(&query))
    }

    /// Whether the recipe lists `food` among its required foods
    #[must_use]
    pub fn requires_food(&self, food: &str) -> bool {
        self.required_foods
            .iter()
            .any(|required| required.eq_ignore_ascii_case(food))
    }
}
