// ABOUTME: Daily intake tracking models stamped with the calendar date they belong to
// ABOUTME: Defines LoggedMeal, the daily checklists, and DailyTracking with running macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealType;
use super::recipe::Macros;
use crate::constants::checklists::{BEFORE_BED_RITUAL, MORNING_PROTOCOL, SUPPLEMENTS};
use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A meal the user logged by hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Meal name
    pub name: String,
    /// Free-form time of day ("12:30")
    pub time: String,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
    /// Energy (kcal), derived from the macros
    pub calories: f64,
}

impl LoggedMeal {
    /// Create a logged meal; calories are `4p + 4c + 9f`
    #[must_use]
    pub fn new(name: impl Into<String>, time: impl Into<String>, protein: f64, carbs: f64, fats: f64) -> Self {
        let calories = fats.mul_add(
            KCAL_PER_G_FAT,
            protein.mul_add(KCAL_PER_G_PROTEIN, carbs * KCAL_PER_G_CARBS),
        );
        Self {
            name: name.into(),
            time: time.into(),
            protein,
            carbs,
            fats,
            calories,
        }
    }

    /// Macro profile of this meal
    #[must_use]
    pub const fn macros(&self) -> Macros {
        Macros::new(self.protein, self.carbs, self.fats, self.calories)
    }
}

/// A fixed list of daily habits ticked off item by item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Checklist {
    /// Upon waking
    MorningProtocol,
    /// Daily supplements
    Supplements,
    /// Before sleep
    BeforeBedRitual,
}

impl Checklist {
    /// Every checklist in display order
    pub const ALL: [Self; 3] = [Self::MorningProtocol, Self::Supplements, Self::BeforeBedRitual];

    /// Item descriptions
    #[must_use]
    pub const fn items(self) -> &'static [&'static str] {
        match self {
            Self::MorningProtocol => &MORNING_PROTOCOL,
            Self::Supplements => &SUPPLEMENTS,
            Self::BeforeBedRitual => &BEFORE_BED_RITUAL,
        }
    }

    /// Heading for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MorningProtocol => "Morning protocol",
            Self::Supplements => "Supplements",
            Self::BeforeBedRitual => "Before bed ritual",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::MorningProtocol => "morning",
            Self::Supplements => "supplements",
            Self::BeforeBedRitual => "bedtime",
        }
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Checklist {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|list| list.name() == name)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown checklist '{s}' (expected morning, supplements, or bedtime)"
                ))
            })
    }
}

/// Tracking record for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTracking {
    /// Day this record belongs to
    pub date: NaiveDate,
    /// Glasses of water drunk
    #[serde(default)]
    pub water_glasses: u32,
    /// Meals logged by hand
    #[serde(default)]
    pub meals: Vec<LoggedMeal>,
    /// Breakfast marked as eaten
    #[serde(default)]
    pub breakfast_completed: bool,
    /// Lunch marked as eaten
    #[serde(default)]
    pub lunch_completed: bool,
    /// Dinner marked as eaten
    #[serde(default)]
    pub dinner_completed: bool,
    /// Morning protocol items done
    #[serde(default)]
    pub morning_protocol: [bool; MORNING_PROTOCOL.len()],
    /// Supplements taken
    #[serde(default)]
    pub supplements: [bool; SUPPLEMENTS.len()],
    /// Fruit or fiber after lunch
    #[serde(default)]
    pub after_lunch_fiber: bool,
    /// Before bed ritual items done
    #[serde(default)]
    pub before_bed_ritual: [bool; BEFORE_BED_RITUAL.len()],
}

impl DailyTracking {
    /// Empty record for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            water_glasses: 0,
            meals: Vec::new(),
            breakfast_completed: false,
            lunch_completed: false,
            dinner_completed: false,
            morning_protocol: [false; MORNING_PROTOCOL.len()],
            supplements: [false; SUPPLEMENTS.len()],
            after_lunch_fiber: false,
            before_bed_ritual: [false; BEFORE_BED_RITUAL.len()],
        }
    }

    /// Sum of all logged meals
    #[must_use]
    pub fn totals(&self) -> Macros {
        self.meals.iter().map(LoggedMeal::macros).sum()
    }

    /// Done flags of one checklist, in item order
    #[must_use]
    pub const fn checklist(&self, list: Checklist) -> &[bool] {
        match list {
            Checklist::MorningProtocol => &self.morning_protocol,
            Checklist::Supplements => &self.supplements,
            Checklist::BeforeBedRitual => &self.before_bed_ritual,
        }
    }

    /// Mutable done flags of one checklist
    pub fn checklist_mut(&mut self, list: Checklist) -> &mut [bool] {
        match list {
            Checklist::MorningProtocol => &mut self.morning_protocol,
            Checklist::Supplements => &mut self.supplements,
            Checklist::BeforeBedRitual => &mut self.before_bed_ritual,
        }
    }

    /// Mark a main meal as eaten; snacks are not tracked this way
    pub fn set_completed(&mut self, meal_type: MealType, completed: bool) {
        match meal_type {
            MealType::Breakfast => self.breakfast_completed = completed,
            MealType::Lunch => self.lunch_completed = completed,
            MealType::Dinner => self.dinner_completed = completed,
            MealType::Snack => {}
        }
    }
}
