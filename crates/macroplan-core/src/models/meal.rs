// ABOUTME: Meal type and weekday enums shared by the catalog, planner, and plan store
// ABOUTME: Holds the single mapping between catalog tags ("snack") and plan slot keys ("snacks")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of meal, used both as a recipe tag and as a plan slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

/// `(meal type, catalog tag, plan slot key, display label)`
///
/// Catalog entries are tagged in the singular while plan slots are keyed in the
/// plural for snacks. Every conversion goes through this table.
const MEAL_TYPE_NAMES: [(MealType, &str, &str, &str); 4] = [
    (MealType::Breakfast, "breakfast", "breakfast", "Breakfast"),
    (MealType::Lunch, "lunch", "lunch", "Lunch"),
    (MealType::Dinner, "dinner", "dinner", "Dinner"),
    (MealType::Snack, "snack", "snacks", "Snacks"),
];

impl MealType {
    /// All meal types in slot order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    const fn names(self) -> (Self, &'static str, &'static str, &'static str) {
        MEAL_TYPE_NAMES[self as usize]
    }

    /// Tag used on catalog recipes (`snack`)
    #[must_use]
    pub const fn catalog_tag(self) -> &'static str {
        self.names().1
    }

    /// Key used for plan slots (`snacks`)
    #[must_use]
    pub const fn slot_key(self) -> &'static str {
        self.names().2
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.names().3
    }

    /// Parse either a catalog tag or a plan slot key, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        MEAL_TYPE_NAMES
            .iter()
            .find(|(_, tag, slot, _)| *tag == name || *slot == name)
            .map(|(meal_type, ..)| *meal_type)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_tag())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown meal type '{s}' (expected breakfast, lunch, dinner, or snack)"
            ))
        })
    }
}

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All weekdays in generation order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase name used as the storage key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.name() == lowered || day.name()[..3] == lowered)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown weekday '{s}'")))
    }
}
