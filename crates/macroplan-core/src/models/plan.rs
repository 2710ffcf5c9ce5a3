// ABOUTME: Meal plan models for single-recipe days, weeks, and multi-recipe plans
// ABOUTME: Defines DailyMealPlan, WeeklyMealPlan, MealPlan, PlanSnapshot, and SavedMealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::{MealType, Weekday};
use super::recipe::RecipeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One nullable recipe per slot. A `None` slot is unfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyMealPlan {
    /// Breakfast slot
    pub breakfast: Option<RecipeId>,
    /// Lunch slot
    pub lunch: Option<RecipeId>,
    /// Dinner slot
    pub dinner: Option<RecipeId>,
    /// Snack slot
    pub snacks: Option<RecipeId>,
}

impl DailyMealPlan {
    /// Recipe in a slot
    #[must_use]
    pub const fn slot(&self, meal_type: MealType) -> Option<RecipeId> {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snacks,
        }
    }

    /// Replace the recipe in a slot
    pub fn set_slot(&mut self, meal_type: MealType, recipe_id: Option<RecipeId>) {
        let slot = match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snacks,
        };
        *slot = recipe_id;
    }

    /// Reset every slot to unfilled
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no slot is filled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipe_ids().is_empty()
    }

    /// Filled recipe ids in slot order
    #[must_use]
    pub fn recipe_ids(&self) -> Vec<RecipeId> {
        MealType::ALL
            .into_iter()
            .filter_map(|meal_type| self.slot(meal_type))
            .collect()
    }
}

/// Seven daily plans keyed by weekday
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    /// Monday
    pub monday: DailyMealPlan,
    /// Tuesday
    pub tuesday: DailyMealPlan,
    /// Wednesday
    pub wednesday: DailyMealPlan,
    /// Thursday
    pub thursday: DailyMealPlan,
    /// Friday
    pub friday: DailyMealPlan,
    /// Saturday
    pub saturday: DailyMealPlan,
    /// Sunday
    pub sunday: DailyMealPlan,
}

impl WeeklyMealPlan {
    /// Plan for one day
    #[must_use]
    pub const fn day(&self, day: Weekday) -> &DailyMealPlan {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Mutable plan for one day
    pub fn day_mut(&mut self, day: Weekday) -> &mut DailyMealPlan {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Days in Monday-to-Sunday order
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DailyMealPlan)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Whether every slot of every day is unfilled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days().all(|(_, plan)| plan.is_empty())
    }
}

/// Multi-recipe plan: each slot holds an ordered list of recipe ids
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    /// Breakfast recipes
    #[serde(default)]
    pub breakfast: Vec<RecipeId>,
    /// Lunch recipes
    #[serde(default)]
    pub lunch: Vec<RecipeId>,
    /// Dinner recipes
    #[serde(default)]
    pub dinner: Vec<RecipeId>,
    /// Snack recipes
    #[serde(default)]
    pub snacks: Vec<RecipeId>,
}

impl MealPlan {
    /// Recipes in a slot
    #[must_use]
    pub fn slot(&self, meal_type: MealType) -> &[RecipeId] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snacks,
        }
    }

    /// Mutable recipe list of a slot
    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut Vec<RecipeId> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snacks,
        }
    }

    /// Whether every slot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        MealType::ALL
            .into_iter()
            .all(|meal_type| self.slot(meal_type).is_empty())
    }

    /// All recipe ids in slot order
    pub fn recipe_ids(&self) -> impl Iterator<Item = RecipeId> + '_ {
        MealType::ALL
            .into_iter()
            .flat_map(move |meal_type| self.slot(meal_type).iter().copied())
    }
}

/// Snapshot stored inside a saved plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "plan", rename_all = "snake_case")]
pub enum PlanSnapshot {
    /// Multi-recipe day plan
    Daily(MealPlan),
    /// Week of single-recipe day plans
    Weekly(WeeklyMealPlan),
}

impl PlanSnapshot {
    /// Plan type the snapshot belongs to
    #[must_use]
    pub const fn plan_type(&self) -> PlanType {
        match self {
            Self::Daily(_) => PlanType::Daily,
            Self::Weekly(_) => PlanType::Weekly,
        }
    }
}

/// Named, immutable copy of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMealPlan {
    /// Timestamp-derived identifier, unique within the saved list
    pub id: String,
    /// User-given name
    pub name: String,
    /// Plan contents at save time
    pub plan: PlanSnapshot,
    /// When the plan was saved
    pub created_at: DateTime<Utc>,
}

/// Which plan the user works with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Multi-recipe single day
    Daily,
    /// Seven single-recipe days
    #[default]
    Weekly,
}
