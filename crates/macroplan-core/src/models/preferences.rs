// ABOUTME: Food preference selections grouped by macronutrient category
// ABOUTME: Defines FoodCategory and FoodPreferences used to filter the recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macronutrient category a food is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Protein sources
    Proteins,
    /// Carbohydrate sources
    Carbs,
    /// Fat sources
    Fats,
}

impl FoodCategory {
    /// All categories
    pub const ALL: [Self; 3] = [Self::Proteins, Self::Carbs, Self::Fats];
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Proteins => "proteins",
            Self::Carbs => "carbs",
            Self::Fats => "fats",
        })
    }
}

/// Foods the user picked in each category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FoodPreferences {
    /// Selected protein sources
    #[serde(default)]
    pub proteins: Vec<String>,
    /// Selected carbohydrate sources
    #[serde(default)]
    pub carbs: Vec<String>,
    /// Selected fat sources
    #[serde(default)]
    pub fats: Vec<String>,
}

impl FoodPreferences {
    /// Selections in one category
    #[must_use]
    pub fn category(&self, category: FoodCategory) -> &[String] {
        match category {
            FoodCategory::Proteins => &self.proteins,
            FoodCategory::Carbs => &self.carbs,
            FoodCategory::Fats => &self.fats,
        }
    }

    /// Whether `food` is selected in any category
    #[must_use]
    pub fn contains(&self, food: &str) -> bool {
        FoodCategory::ALL.into_iter().any(|category| {
            self.category(category)
                .iter()
                .any(|selected| selected.eq_ignore_ascii_case(food))
        })
    }
}
