// ABOUTME: Mutable plan state: the current multi-recipe plan, the weekly plan, and saved plans
// ABOUTME: Slot edits, day operations, and save/load/delete of named plan snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan store
//!
//! All mutations are last-write-wins on a single owner. The store knows nothing
//! about persistence; the session service writes it back after each change.

use chrono::{DateTime, Utc};
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{
    DailyMealPlan, MealPlan, MealType, PlanSnapshot, PlanType, RecipeId, SavedMealPlan, Weekday,
    WeeklyMealPlan,
};
use tracing::info;

/// Current, weekly, and saved plans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStore {
    current: MealPlan,
    weekly: WeeklyMealPlan,
    saved: Vec<SavedMealPlan>,
}

impl PlanStore {
    /// Rebuild a store from persisted parts
    #[must_use]
    pub const fn new(current: MealPlan, weekly: WeeklyMealPlan, saved: Vec<SavedMealPlan>) -> Self {
        Self {
            current,
            weekly,
            saved,
        }
    }

    /// Current multi-recipe plan
    #[must_use]
    pub const fn current(&self) -> &MealPlan {
        &self.current
    }

    /// Weekly plan
    #[must_use]
    pub const fn weekly(&self) -> &WeeklyMealPlan {
        &self.weekly
    }

    /// Saved plans, oldest first
    #[must_use]
    pub fn saved(&self) -> &[SavedMealPlan] {
        &self.saved
    }

    // ------------------------------------------------------------------
    // Current plan
    // ------------------------------------------------------------------

    /// Append a recipe to a slot of the current plan
    pub fn add_recipe(&mut self, meal_type: MealType, recipe_id: RecipeId) {
        self.current.slot_mut(meal_type).push(recipe_id);
    }

    /// Remove every occurrence of a recipe from a slot; returns whether anything was removed
    pub fn remove_recipe(&mut self, meal_type: MealType, recipe_id: RecipeId) -> bool {
        let slot = self.current.slot_mut(meal_type);
        let before = slot.len();
        slot.retain(|id| *id != recipe_id);
        slot.len() != before
    }

    /// Replace every occurrence of `old` with `new` in a slot; returns the number replaced
    pub fn replace_recipe(&mut self, meal_type: MealType, old: RecipeId, new: RecipeId) -> usize {
        let mut replaced = 0;
        for id in self
            .current
            .slot_mut(meal_type)
            .iter_mut()
            .filter(|id| **id == old)
        {
            *id = new;
            replaced += 1;
        }
        replaced
    }

    /// Empty every slot of the current plan
    pub fn clear_current(&mut self) {
        self.current = MealPlan::default();
    }

    /// Replace the current plan wholesale
    pub fn set_current(&mut self, plan: MealPlan) {
        self.current = plan;
    }

    // ------------------------------------------------------------------
    // Weekly plan
    // ------------------------------------------------------------------

    /// Replace the weekly plan wholesale
    pub fn set_weekly(&mut self, plan: WeeklyMealPlan) {
        self.weekly = plan;
    }

    /// Replace one day's plan
    pub fn set_weekly_day(&mut self, day: Weekday, plan: DailyMealPlan) {
        *self.weekly.day_mut(day) = plan;
    }

    /// Set one slot of one day
    pub fn set_weekly_slot(&mut self, day: Weekday, meal_type: MealType, recipe: Option<RecipeId>) {
        self.weekly.day_mut(day).set_slot(meal_type, recipe);
    }

    /// Reset one day to unfilled; idempotent
    pub fn clear_day(&mut self, day: Weekday) {
        self.weekly.day_mut(day).clear();
    }

    /// Reset the whole week to unfilled
    pub fn clear_week(&mut self) {
        self.weekly = WeeklyMealPlan::default();
    }

    /// Copy one day's plan onto every other day
    pub fn copy_day_to_week(&mut self, source: Weekday) {
        let template: DailyMealPlan = *self.weekly.day(source);
        for day in Weekday::ALL {
            *self.weekly.day_mut(day) = template;
        }
    }

    // ------------------------------------------------------------------
    // Saved plans
    // ------------------------------------------------------------------

    /// Snapshot the current (daily) or weekly plan under `name`
    ///
    /// The id is the creation time in milliseconds, bumped until unique.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name.
    pub fn save_plan(
        &mut self,
        name: &str,
        plan_type: PlanType,
        now: DateTime<Utc>,
    ) -> AppResult<&SavedMealPlan> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Plan name must not be blank"));
        }

        let plan = match plan_type {
            PlanType::Daily => PlanSnapshot::Daily(self.current.clone()),
            PlanType::Weekly => PlanSnapshot::Weekly(self.weekly.clone()),
        };

        let mut millis = now.timestamp_millis();
        while self.find_saved(&millis.to_string()).is_some() {
            millis += 1;
        }

        let saved = SavedMealPlan {
            id: millis.to_string(),
            name: name.to_owned(),
            plan,
            created_at: now,
        };
        info!(plan_id = %saved.id, name = %saved.name, kind = ?plan_type, "Saved meal plan");

        let index = self.saved.len();
        self.saved.push(saved);
        Ok(&self.saved[index])
    }

    /// Look up a saved plan
    #[must_use]
    pub fn find_saved(&self, id: &str) -> Option<&SavedMealPlan> {
        self.saved.iter().find(|plan| plan.id == id)
    }

    /// Overwrite the matching current or weekly plan with a saved snapshot
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id.
    pub fn load_saved(&mut self, id: &str) -> AppResult<PlanType> {
        let snapshot = self
            .find_saved(id)
            .map(|saved| saved.plan.clone())
            .ok_or_else(|| AppError::not_found("Saved meal plan").with_resource_id(id))?;

        let plan_type = snapshot.plan_type();
        match snapshot {
            PlanSnapshot::Daily(plan) => self.current = plan,
            PlanSnapshot::Weekly(plan) => self.weekly = plan,
        }
        info!(plan_id = %id, kind = ?plan_type, "Loaded saved meal plan");
        Ok(plan_type)
    }

    /// Delete a saved plan; the rest keep their order
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id.
    pub fn delete_saved(&mut self, id: &str) -> AppResult<SavedMealPlan> {
        let index = self
            .saved
            .iter()
            .position(|plan| plan.id == id)
            .ok_or_else(|| AppError::not_found("Saved meal plan").with_resource_id(id))?;
        let removed = self.saved.remove(index);
        info!(plan_id = %id, "Deleted saved meal plan");
        Ok(removed)
    }

    /// Drop every saved plan
    pub fn clear_saved(&mut self) {
        self.saved.clear();
    }
}
