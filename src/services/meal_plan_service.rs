// ABOUTME: Session service owning all user state and orchestrating targets, generation, and plans
// ABOUTME: Loads every entity from a key-value store and writes it back after each mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan session
//!
//! `MealPlanService` is the single writer for one user's data. It is an explicit
//! value passed by reference; there is no ambient session state. Every mutation
//! updates memory first and then persists the affected key.

use crate::catalog::{foods, RecipeCatalog};
use crate::config::MacroplanConfig;
use crate::external::{GeneratedMeal, MealGenerator};
use crate::intelligence::{
    compute_targets, planner_rng, GeneratedDay, GeneratedWeek, GenerationLock, GenerationProgress,
    MacroTargetCalculation, MealPlanner, StagedProgress,
};
use crate::persistence::{self, KeyValueStore};
use crate::store::PlanStore;
use crate::tracking::{self, TrackingProgress};
use chrono::{DateTime, NaiveDate, Utc};
use macroplan_core::constants::service_names::AI_MEAL_SERVICE;
use macroplan_core::constants::storage_keys;
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{
    Checklist, DailyTracking, FoodPreferences, LoggedMeal, MacroTargets, Macros, MealPlan, MealType,
    PlanType, RecipeId, SavedMealPlan, UserProfile, Weekday, WeeklyMealPlan,
};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// One user's planning session
pub struct MealPlanService {
    store: Arc<dyn KeyValueStore>,
    catalog: Arc<RecipeCatalog>,
    config: MacroplanConfig,
    profile: Option<UserProfile>,
    targets: Option<MacroTargets>,
    preferences: FoodPreferences,
    selected: Vec<RecipeId>,
    favorites: Vec<RecipeId>,
    meals_selected: bool,
    plan_type: PlanType,
    plans: PlanStore,
    tracking: DailyTracking,
    lock: GenerationLock,
    progress: StagedProgress,
    rng: ChaCha8Rng,
    meal_generator: Option<Arc<dyn MealGenerator>>,
}

impl MealPlanService {
    /// Restore a session from `store`
    ///
    /// Missing or unreadable keys fall back to defaults; tracking from another
    /// day than `today` starts fresh.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<RecipeCatalog>,
        config: MacroplanConfig,
        today: NaiveDate,
    ) -> Self {
        let kv = store.as_ref();
        let profile: Option<UserProfile> = persistence::load(kv, storage_keys::USER_PROFILE).await;
        let mut targets = persistence::load(kv, storage_keys::MACROS).await;
        if targets.is_none() {
            if let Some(profile) = &profile {
                targets = recompute_targets(kv, profile, &config).await;
            }
        }
        let preferences = persistence::load_or_default(kv, storage_keys::FOOD_PREFERENCES).await;
        let selected = persistence::load_or_default(kv, storage_keys::SELECTED_RECIPES).await;
        let favorites = persistence::load_or_default(kv, storage_keys::FAVORITE_RECIPES).await;
        let meals_selected = persistence::load_or_default(kv, storage_keys::MEALS_SELECTED).await;
        let plan_type = persistence::load_or_default(kv, storage_keys::PLAN_TYPE).await;
        let current = persistence::load_or_default(kv, storage_keys::CURRENT_MEAL_PLAN).await;
        let weekly = persistence::load_or_default(kv, storage_keys::WEEKLY_MEAL_PLAN).await;
        let saved = persistence::load_or_default(kv, storage_keys::SAVED_MEAL_PLANS).await;
        let stored_tracking = persistence::load(kv, storage_keys::DAILY_TRACKING).await;

        let progress = StagedProgress::new(Duration::from_millis(config.planner.stage_delay_ms));
        let rng = planner_rng(&config.planner);

        info!(
            has_profile = profile.is_some(),
            has_targets = targets.is_some(),
            "Loaded meal plan session"
        );

        Self {
            store,
            catalog,
            profile,
            targets,
            preferences,
            selected,
            favorites,
            meals_selected,
            plan_type,
            plans: PlanStore::new(current, weekly, saved),
            tracking: tracking::tracking_for_day(stored_tracking, today),
            lock: GenerationLock::new(),
            progress,
            rng,
            meal_generator: None,
            config,
        }
    }

    /// Attach the AI meal collaborator
    #[must_use]
    pub fn with_meal_generator(mut self, generator: Arc<dyn MealGenerator>) -> Self {
        self.meal_generator = Some(generator);
        self
    }

    async fn persist<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        persistence::save(self.store.as_ref(), key, value).await
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Recipe catalog
    #[must_use]
    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &MacroplanConfig {
        &self.config
    }

    /// Stored profile
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Current macro targets
    #[must_use]
    pub const fn targets(&self) -> Option<&MacroTargets> {
        self.targets.as_ref()
    }

    /// Food preferences
    #[must_use]
    pub const fn preferences(&self) -> &FoodPreferences {
        &self.preferences
    }

    /// Selected recipe ids in selection order
    #[must_use]
    pub fn selected_recipes(&self) -> &[RecipeId] {
        &self.selected
    }

    /// Favorite recipe ids in the order they were added
    #[must_use]
    pub fn favorites(&self) -> &[RecipeId] {
        &self.favorites
    }

    /// Whether meal selection is finished
    #[must_use]
    pub const fn meals_selected(&self) -> bool {
        self.meals_selected
    }

    /// Daily or weekly
    #[must_use]
    pub const fn plan_type(&self) -> PlanType {
        self.plan_type
    }

    /// Plan state
    #[must_use]
    pub const fn plans(&self) -> &PlanStore {
        &self.plans
    }

    /// Today's tracking record
    #[must_use]
    pub const fn tracking(&self) -> &DailyTracking {
        &self.tracking
    }

    /// Handle to the generation lock, shared with any clone
    #[must_use]
    pub fn generation_lock(&self) -> GenerationLock {
        self.lock.clone()
    }

    /// Subscribe to generation stage transitions
    #[must_use]
    pub fn subscribe_progress(&self) -> broadcast::Receiver<GenerationProgress> {
        self.progress.subscribe()
    }

    // ------------------------------------------------------------------
    // Profile, targets, preferences
    // ------------------------------------------------------------------

    /// Replace the profile and recompute targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid profile, or a storage error.
    pub async fn set_profile(&mut self, profile: UserProfile) -> AppResult<MacroTargetCalculation> {
        let calculation = compute_targets(&profile, &self.config.nutrition)?;

        // Targets first: a failed profile write leaves usable targets behind
        self.persist(storage_keys::MACROS, &calculation.targets).await?;
        self.targets = Some(calculation.targets);
        self.persist(storage_keys::USER_PROFILE, &profile).await?;
        self.profile = Some(profile);

        info!(
            calories = calculation.targets.calories,
            protein = calculation.targets.protein,
            carbs = calculation.targets.carbs,
            fats = calculation.targets.fats,
            "Updated profile and macro targets"
        );
        Ok(calculation)
    }

    /// Replace the food preferences
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown foods or too few picks per category.
    pub async fn set_preferences(&mut self, preferences: FoodPreferences) -> AppResult<()> {
        foods::validate_preferences(&preferences)?;
        self.persist(storage_keys::FOOD_PREFERENCES, &preferences)
            .await?;
        self.preferences = preferences;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection and favorites
    // ------------------------------------------------------------------

    /// Toggle a recipe in the selection; returns whether it is now selected
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe, or a storage error.
    pub async fn toggle_selected(&mut self, recipe_id: RecipeId) -> AppResult<bool> {
        self.catalog.require(recipe_id)?;
        let selected = toggle(&mut self.selected, recipe_id);
        self.persist(storage_keys::SELECTED_RECIPES, &self.selected)
            .await?;
        Ok(selected)
    }

    /// Toggle a favorite; returns whether it is now a favorite
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe, or a storage error.
    pub async fn toggle_favorite(&mut self, recipe_id: RecipeId) -> AppResult<bool> {
        self.catalog.require(recipe_id)?;
        let favorite = toggle(&mut self.favorites, recipe_id);
        self.persist(storage_keys::FAVORITE_RECIPES, &self.favorites)
            .await?;
        debug!(recipe_id = %recipe_id, favorite, "Toggled favorite");
        Ok(favorite)
    }

    /// Favorite ids as a set, for catalog filtering
    #[must_use]
    pub fn favorite_set(&self) -> HashSet<RecipeId> {
        self.favorites.iter().copied().collect()
    }

    /// Mark meal selection finished or not
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn set_meals_selected(&mut self, selected: bool) -> AppResult<()> {
        self.persist(storage_keys::MEALS_SELECTED, &selected).await?;
        self.meals_selected = selected;
        Ok(())
    }

    /// Switch between the daily and weekly plan
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn set_plan_type(&mut self, plan_type: PlanType) -> AppResult<()> {
        self.persist(storage_keys::PLAN_TYPE, &plan_type).await?;
        self.plan_type = plan_type;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    fn require_targets(&self) -> AppResult<MacroTargets> {
        self.targets.ok_or_else(|| {
            AppError::missing_field("Macro targets are not set; set a profile before generating")
        })
    }

    /// Generate one day through the visible stages and store it on `day` of the weekly plan
    ///
    /// The day before `day` supplies the variety penalty.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` without targets, `ResourceLocked` while
    /// another generation runs, or a storage error.
    pub async fn generate_day(&mut self, day: Weekday) -> AppResult<GeneratedDay> {
        let targets = self.require_targets()?;
        let _guard = self.lock.try_acquire()?;

        let previous = previous_weekday(day)
            .map(|before| self.plans.weekly().day(before).recipe_ids())
            .unwrap_or_default();

        let planner = MealPlanner::new(&self.catalog, &self.config.planner);
        let rng = &mut self.rng;
        let generated = self
            .progress
            .run(|| planner.generate_day(&targets, &previous, rng))
            .await;

        self.plans.set_weekly_day(day, generated.plan);
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await?;

        info!(day = %day, score = generated.score.score, "Generated day plan");
        Ok(generated)
    }

    /// Generate a full week through the visible stages, replacing the weekly plan
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` without targets, `ResourceLocked` while
    /// another generation runs, or a storage error.
    pub async fn generate_week(&mut self) -> AppResult<GeneratedWeek> {
        let targets = self.require_targets()?;
        let _guard = self.lock.try_acquire()?;

        let planner = MealPlanner::new(&self.catalog, &self.config.planner);
        let rng = &mut self.rng;
        let generated = self
            .progress
            .run(|| planner.generate_week(&targets, rng))
            .await;

        self.plans.set_weekly(generated.plan.clone());
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await?;
        Ok(generated)
    }

    /// Generate the week on first load when nothing is planned yet
    ///
    /// Runs only when the weekly plan is empty, favorites exist, and targets are
    /// set; otherwise returns `None` without touching anything.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::generate_week`].
    pub async fn auto_generate_if_needed(&mut self) -> AppResult<Option<GeneratedWeek>> {
        if !self.plans.weekly().is_empty() || self.favorites.is_empty() || self.targets.is_none()
        {
            return Ok(None);
        }
        info!(favorites = self.favorites.len(), "Auto-generating weekly plan");
        self.generate_week().await.map(Some)
    }

    // ------------------------------------------------------------------
    // Weekly plan edits
    // ------------------------------------------------------------------

    fn require_meal_type(&self, recipe_id: RecipeId, meal_type: MealType) -> AppResult<()> {
        let recipe = self.catalog.require(recipe_id)?;
        if recipe.meal_type != meal_type {
            return Err(AppError::invalid_input(format!(
                "Recipe {recipe_id} is a {} recipe, not {}",
                recipe.meal_type, meal_type
            )));
        }
        Ok(())
    }

    /// Set or clear one slot of the weekly plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` or `InvalidInput` for an unknown or mismatched
    /// recipe, or a storage error.
    pub async fn set_weekly_slot(
        &mut self,
        day: Weekday,
        meal_type: MealType,
        recipe_id: Option<RecipeId>,
    ) -> AppResult<()> {
        if let Some(id) = recipe_id {
            self.require_meal_type(id, meal_type)?;
        }
        self.plans.set_weekly_slot(day, meal_type, recipe_id);
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await
    }

    /// Replace a weekly slot with a random different recipe of the same meal type
    ///
    /// Returns the new recipe, or `None` when the catalog has no alternative.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn swap_weekly_slot(
        &mut self,
        day: Weekday,
        meal_type: MealType,
    ) -> AppResult<Option<RecipeId>> {
        let current = self.plans.weekly().day(day).slot(meal_type);
        let planner = MealPlanner::new(&self.catalog, &self.config.planner);
        let Some(replacement) = planner.pick_alternative(meal_type, current, &mut self.rng) else {
            debug!(day = %day, meal_type = %meal_type, "No alternative recipe to swap in");
            return Ok(None);
        };

        self.plans
            .set_weekly_slot(day, meal_type, Some(replacement));
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await?;
        Ok(Some(replacement))
    }

    /// Clear every slot of one day
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn clear_day(&mut self, day: Weekday) -> AppResult<()> {
        self.plans.clear_day(day);
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await
    }

    /// Clear the whole weekly plan
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn clear_week(&mut self) -> AppResult<()> {
        self.plans.clear_week();
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await
    }

    /// Copy one day onto every other day of the week
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn copy_day_to_week(&mut self, source: Weekday) -> AppResult<()> {
        self.plans.copy_day_to_week(source);
        self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
            .await
    }

    // ------------------------------------------------------------------
    // Current (multi-recipe) plan edits
    // ------------------------------------------------------------------

    /// Append a recipe to a slot of the current plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` or `InvalidInput` for an unknown or mismatched
    /// recipe, or a storage error.
    pub async fn add_recipe(&mut self, meal_type: MealType, recipe_id: RecipeId) -> AppResult<()> {
        self.require_meal_type(recipe_id, meal_type)?;
        self.plans.add_recipe(meal_type, recipe_id);
        self.persist(storage_keys::CURRENT_MEAL_PLAN, self.plans.current())
            .await
    }

    /// Remove a recipe from a slot of the current plan; returns whether it was there
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn remove_recipe(
        &mut self,
        meal_type: MealType,
        recipe_id: RecipeId,
    ) -> AppResult<bool> {
        let removed = self.plans.remove_recipe(meal_type, recipe_id);
        if removed {
            self.persist(storage_keys::CURRENT_MEAL_PLAN, self.plans.current())
                .await?;
        }
        Ok(removed)
    }

    /// Swap one recipe for another in a slot of the current plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when `old` is not in the slot, `InvalidInput`
    /// for a mismatched replacement, or a storage error.
    pub async fn replace_recipe(
        &mut self,
        meal_type: MealType,
        old: RecipeId,
        new: RecipeId,
    ) -> AppResult<()> {
        self.require_meal_type(new, meal_type)?;
        if self.plans.replace_recipe(meal_type, old, new) == 0 {
            return Err(AppError::not_found("Recipe in plan slot").with_resource_id(old.to_string()));
        }
        self.persist(storage_keys::CURRENT_MEAL_PLAN, self.plans.current())
            .await
    }

    /// Empty the current plan
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn clear_current(&mut self) -> AppResult<()> {
        self.plans.clear_current();
        self.persist(storage_keys::CURRENT_MEAL_PLAN, self.plans.current())
            .await
    }

    // ------------------------------------------------------------------
    // Saved plans
    // ------------------------------------------------------------------

    /// Save the plan matching the current plan type under `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or a storage error.
    pub async fn save_plan(&mut self, name: &str, now: DateTime<Utc>) -> AppResult<SavedMealPlan> {
        let saved = self.plans.save_plan(name, self.plan_type, now)?.clone();
        self.persist(storage_keys::SAVED_MEAL_PLANS, self.plans.saved())
            .await?;
        Ok(saved)
    }

    /// Load a saved plan over the current or weekly plan and switch to its type
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error.
    pub async fn load_saved(&mut self, id: &str) -> AppResult<PlanType> {
        let plan_type = self.plans.load_saved(id)?;
        match plan_type {
            PlanType::Daily => {
                self.persist(storage_keys::CURRENT_MEAL_PLAN, self.plans.current())
                    .await?;
            }
            PlanType::Weekly => {
                self.persist(storage_keys::WEEKLY_MEAL_PLAN, self.plans.weekly())
                    .await?;
            }
        }
        self.set_plan_type(plan_type).await?;
        Ok(plan_type)
    }

    /// Delete a saved plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a storage error.
    pub async fn delete_saved(&mut self, id: &str) -> AppResult<SavedMealPlan> {
        let removed = self.plans.delete_saved(id)?;
        self.persist(storage_keys::SAVED_MEAL_PLANS, self.plans.saved())
            .await?;
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Totals
    // ------------------------------------------------------------------

    /// Catalog totals of the current plan
    #[must_use]
    pub fn current_totals(&self) -> Macros {
        self.catalog.meal_plan_totals(self.plans.current())
    }

    /// Catalog totals of each day of the weekly plan, Monday first
    #[must_use]
    pub fn weekly_totals(&self) -> Vec<(Weekday, Macros)> {
        self.plans
            .weekly()
            .days()
            .map(|(day, plan)| (day, self.catalog.day_totals(plan)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Tracking
    // ------------------------------------------------------------------

    fn roll_tracking(&mut self, today: NaiveDate) {
        if self.tracking.date != today {
            debug!(stored = %self.tracking.date, %today, "New day, starting a fresh tracking record");
            self.tracking = DailyTracking::new(today);
        }
    }

    async fn persist_tracking(&self) -> AppResult<()> {
        self.persist(storage_keys::DAILY_TRACKING, &self.tracking)
            .await
    }

    /// Add a glass of water; returns the new count
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn add_water(&mut self, today: NaiveDate) -> AppResult<u32> {
        self.roll_tracking(today);
        let glasses = tracking::add_water_glass(&mut self.tracking);
        self.persist_tracking().await?;
        Ok(glasses)
    }

    /// Remove a glass of water; returns the new count
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn remove_water(&mut self, today: NaiveDate) -> AppResult<u32> {
        self.roll_tracking(today);
        let glasses = tracking::remove_water_glass(&mut self.tracking);
        self.persist_tracking().await?;
        Ok(glasses)
    }

    /// Log a hand-entered meal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or time or negative macros, or a
    /// storage error.
    pub async fn log_meal(
        &mut self,
        today: NaiveDate,
        name: &str,
        time: &str,
        macros: (f64, f64, f64),
    ) -> AppResult<LoggedMeal> {
        self.roll_tracking(today);
        let (protein, carbs, fats) = macros;
        let logged =
            tracking::log_meal(&mut self.tracking, name, time, protein, carbs, fats)?.clone();
        self.persist_tracking().await?;
        Ok(logged)
    }

    /// Delete a logged meal by position
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range index, or a storage error.
    pub async fn delete_logged_meal(
        &mut self,
        today: NaiveDate,
        index: usize,
    ) -> AppResult<LoggedMeal> {
        self.roll_tracking(today);
        let removed = tracking::delete_meal(&mut self.tracking, index)?;
        self.persist_tracking().await?;
        Ok(removed)
    }

    /// Mark a main meal completed or not
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for snacks, or a storage error.
    pub async fn set_meal_completed(
        &mut self,
        today: NaiveDate,
        meal_type: MealType,
        completed: bool,
    ) -> AppResult<()> {
        if meal_type == MealType::Snack {
            return Err(AppError::invalid_input(
                "Only breakfast, lunch, and dinner can be marked completed",
            ));
        }
        self.roll_tracking(today);
        self.tracking.set_completed(meal_type, completed);
        self.persist_tracking().await
    }

    /// Tick or untick one checklist item; returns whether it is now done
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an out-of-range item, or a storage error.
    pub async fn toggle_checklist_item(
        &mut self,
        today: NaiveDate,
        list: Checklist,
        index: usize,
    ) -> AppResult<bool> {
        self.roll_tracking(today);
        let done = tracking::toggle_checklist_item(&mut self.tracking, list, index)?;
        self.persist_tracking().await?;
        Ok(done)
    }

    /// Tick or untick the after-lunch fiber habit; returns the new value
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub async fn toggle_after_lunch_fiber(&mut self, today: NaiveDate) -> AppResult<bool> {
        self.roll_tracking(today);
        let done = tracking::toggle_after_lunch_fiber(&mut self.tracking);
        self.persist_tracking().await?;
        Ok(done)
    }

    /// Progress of today's record against the targets
    #[must_use]
    pub fn tracking_progress(&self) -> TrackingProgress {
        tracking::progress(&self.tracking, self.targets.as_ref())
    }

    // ------------------------------------------------------------------
    // AI meals and reset
    // ------------------------------------------------------------------

    /// Describe a meal and let the AI collaborator fill in name and macros
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` when no collaborator is configured,
    /// or the collaborator's error.
    pub async fn generate_ai_meal(&self, description: &str) -> AppResult<GeneratedMeal> {
        let generator = self
            .meal_generator
            .as_ref()
            .ok_or_else(|| AppError::external_unavailable(AI_MEAL_SERVICE))?;
        generator.generate_meal(description).await
    }

    /// Delete every stored key and return the session to first-run state
    ///
    /// # Errors
    ///
    /// Returns a storage error; keys removed before the failure stay removed
    /// and their in-memory state is already reset.
    pub async fn reset_all(&mut self, today: NaiveDate) -> AppResult<()> {
        for key in storage_keys::ALL {
            self.store.remove(key).await?;
            self.reset_key(key, today);
        }
        info!("Reset all stored data");
        Ok(())
    }

    /// Return the in-memory state behind `key` to its first-run value
    fn reset_key(&mut self, key: &str, today: NaiveDate) {
        match key {
            storage_keys::USER_PROFILE => self.profile = None,
            storage_keys::MACROS => self.targets = None,
            storage_keys::FOOD_PREFERENCES => self.preferences = FoodPreferences::default(),
            storage_keys::SELECTED_RECIPES => self.selected.clear(),
            storage_keys::FAVORITE_RECIPES => self.favorites.clear(),
            storage_keys::MEALS_SELECTED => self.meals_selected = false,
            storage_keys::PLAN_TYPE => self.plan_type = PlanType::default(),
            storage_keys::CURRENT_MEAL_PLAN => self.plans.set_current(MealPlan::default()),
            storage_keys::WEEKLY_MEAL_PLAN => self.plans.set_weekly(WeeklyMealPlan::default()),
            storage_keys::SAVED_MEAL_PLANS => self.plans.clear_saved(),
            storage_keys::DAILY_TRACKING => self.tracking = DailyTracking::new(today),
            _ => debug!(key, "No in-memory state for key"),
        }
    }
}

/// Derive targets from the stored profile when the stored targets are unusable
async fn recompute_targets(
    store: &dyn KeyValueStore,
    profile: &UserProfile,
    config: &MacroplanConfig,
) -> Option<MacroTargets> {
    let calculation = match compute_targets(profile, &config.nutrition) {
        Ok(calculation) => calculation,
        Err(e) => {
            warn!(error = %e, "Stored profile is invalid, macro targets stay unset");
            return None;
        }
    };
    if let Err(e) = persistence::save(store, storage_keys::MACROS, &calculation.targets).await {
        warn!(error = %e, "Failed to persist recomputed macro targets");
    }
    info!(
        calories = calculation.targets.calories,
        "Recomputed macro targets from the stored profile"
    );
    Some(calculation.targets)
}

/// Remove `id` if present, otherwise append it; returns whether it is now present
fn toggle(ids: &mut Vec<RecipeId>, id: RecipeId) -> bool {
    if let Some(index) = ids.iter().position(|existing| *existing == id) {
        ids.remove(index);
        false
    } else {
        ids.push(id);
        true
    }
}

/// The weekday before `day` within the same Monday-first week
fn previous_weekday(day: Weekday) -> Option<Weekday> {
    let index = Weekday::ALL.iter().position(|candidate| *candidate == day)?;
    index
        .checked_sub(1)
        .and_then(|before| Weekday::ALL.get(before).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut ids = vec![RecipeId(3)];
        assert!(toggle(&mut ids, RecipeId(7)));
        assert_eq!(ids, vec![RecipeId(3), RecipeId(7)]);
        assert!(!toggle(&mut ids, RecipeId(3)));
        assert_eq!(ids, vec![RecipeId(7)]);
    }

    #[test]
    fn test_previous_weekday() {
        assert_eq!(previous_weekday(Weekday::Monday), None);
        assert_eq!(previous_weekday(Weekday::Sunday), Some(Weekday::Saturday));
    }
}
