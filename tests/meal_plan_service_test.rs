// ABOUTME: Integration tests for the persisted meal planning session
// ABOUTME: Covers generation gating, auto-generation, plan edits, persistence, tracking, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use common::{memory_session, reference_profile, reference_targets, session_over, test_today};
use macroplan::catalog::foods::{CARBS, FATS, PROTEINS};
use macroplan::constants::storage_keys;
use macroplan::errors::{AppError, AppResult, ErrorCode};
use macroplan::external::{GeneratedMeal, MealGenerator};
use macroplan::models::{
    Checklist, FoodPreferences, Macros, MealType, PlanType, RecipeId, Weekday,
};
use macroplan::persistence::{KeyValueStore, MemoryStore};
use std::sync::Arc;

fn picks(foods: &[&str]) -> Vec<String> {
    foods.iter().map(|food| (*food).to_owned()).collect()
}

struct FixedMeal;

#[async_trait]
impl MealGenerator for FixedMeal {
    async fn generate_meal(&self, description: &str) -> AppResult<GeneratedMeal> {
        if description.trim().is_empty() {
            return Err(AppError::invalid_input("Meal description is required"));
        }
        Ok(GeneratedMeal {
            name: "Chicken Rice Bowl".to_owned(),
            calories: 620.0,
            protein: 48.0,
            carbs: 70.0,
            fat: 14.0,
            meal_type: MealType::Lunch,
            instructions: None,
        })
    }
}

/// Memory store whose writes and deletes fail for one key
struct FailingKeyStore {
    inner: MemoryStore,
    failing_key: &'static str,
}

impl FailingKeyStore {
    fn check(&self, key: &str) -> AppResult<()> {
        if key == self.failing_key {
            return Err(AppError::storage(format!("write to {key} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FailingKeyStore {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get_raw(key).await
    }

    async fn set_raw(&self, key: &str, value: String) -> AppResult<()> {
        self.check(key)?;
        self.inner.set_raw(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.check(key)?;
        self.inner.remove(key).await
    }
}

// ============================================================================
// Profile and targets
// ============================================================================

#[tokio::test]
async fn test_set_profile_computes_and_persists_targets() {
    let (mut session, store) = memory_session().await;

    let calculation = session.set_profile(reference_profile()).await.unwrap();
    assert_eq!(calculation.targets, reference_targets());
    assert_eq!(session.targets(), Some(&reference_targets()));

    let reloaded = session_over(store).await;
    assert_eq!(reloaded.profile(), Some(&reference_profile()));
    assert_eq!(reloaded.targets(), Some(&reference_targets()));
}

#[tokio::test]
async fn test_unreadable_targets_recomputed_from_profile() {
    let (mut session, store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    store
        .set_raw(storage_keys::MACROS, "{not json".to_owned())
        .await
        .unwrap();

    let mut reloaded = session_over(store.clone()).await;
    assert_eq!(reloaded.targets(), Some(&reference_targets()));
    assert!(reloaded.generate_week().await.is_ok());

    // The recomputed targets are written back
    let raw = store.get_raw(storage_keys::MACROS).await.unwrap().unwrap();
    assert!(raw.contains("\"schemaVersion\":1"));
    assert_eq!(
        session_over(store).await.targets(),
        Some(&reference_targets())
    );
}

#[tokio::test]
async fn test_failed_profile_write_keeps_memory_in_step() {
    let store = Arc::new(FailingKeyStore {
        inner: MemoryStore::new(),
        failing_key: storage_keys::USER_PROFILE,
    });
    let mut session = session_over(store.clone()).await;

    let err = session.set_profile(reference_profile()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(session.profile().is_none());
    assert_eq!(session.targets(), Some(&reference_targets()));

    let reloaded = session_over(store).await;
    assert!(reloaded.profile().is_none());
    assert_eq!(reloaded.targets(), session.targets());
}

#[tokio::test]
async fn test_invalid_profile_changes_nothing() {
    let (mut session, store) = memory_session().await;
    let mut profile = reference_profile();
    profile.age = 5;

    let err = session.set_profile(profile).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(session.profile().is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_preferences_validated_before_saving() {
    let (mut session, _store) = memory_session().await;

    let too_few = FoodPreferences {
        proteins: picks(&PROTEINS[..2]),
        carbs: picks(&CARBS[..3]),
        fats: picks(&FATS[..3]),
    };
    assert_eq!(
        session.set_preferences(too_few).await.unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let valid = FoodPreferences {
        proteins: picks(&PROTEINS[..4]),
        carbs: picks(&CARBS[..3]),
        fats: picks(&FATS[..3]),
    };
    session.set_preferences(valid.clone()).await.unwrap();
    assert_eq!(session.preferences(), &valid);
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_generation_requires_targets() {
    let (mut session, _store) = memory_session().await;

    let err = session.generate_week().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let err = session.generate_day(Weekday::Monday).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(session.plans().weekly().is_empty());
}

#[tokio::test]
async fn test_generation_rejected_while_locked() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();

    let lock = session.generation_lock();
    let guard = lock.try_acquire().unwrap();

    let err = session.generate_week().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceLocked);
    assert!(session.plans().weekly().is_empty());

    drop(guard);
    assert!(session.generate_week().await.is_ok());
    assert!(!lock.is_locked());
}

#[tokio::test]
async fn test_generate_week_fills_and_persists_every_day() {
    let (mut session, store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();

    let week = session.generate_week().await.unwrap();
    assert_eq!(session.plans().weekly(), &week.plan);
    for (_, plan) in week.plan.days() {
        assert_eq!(plan.recipe_ids().len(), 4);
    }

    let reloaded = session_over(store).await;
    assert_eq!(reloaded.plans().weekly(), &week.plan);
}

#[tokio::test]
async fn test_generate_day_only_touches_that_day() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();

    let generated = session.generate_day(Weekday::Wednesday).await.unwrap();

    assert_eq!(session.plans().weekly().day(Weekday::Wednesday), &generated.plan);
    for (day, plan) in session.plans().weekly().days() {
        if day != Weekday::Wednesday {
            assert!(plan.is_empty());
        }
    }
}

#[tokio::test]
async fn test_generation_publishes_every_stage() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    let mut receiver = session.subscribe_progress();

    session.generate_day(Weekday::Monday).await.unwrap();

    let mut last = None;
    while let Ok(snapshot) = receiver.try_recv() {
        last = Some(snapshot);
    }
    assert!(last.unwrap().is_complete());
}

#[tokio::test]
async fn test_auto_generate_needs_favorites_and_targets() {
    let (mut session, _store) = memory_session().await;

    // Nothing set
    assert!(session.auto_generate_if_needed().await.unwrap().is_none());

    // Targets but no favorites
    session.set_profile(reference_profile()).await.unwrap();
    assert!(session.auto_generate_if_needed().await.unwrap().is_none());
    assert!(session.plans().weekly().is_empty());

    // Both
    session.toggle_favorite(RecipeId(7)).await.unwrap();
    let generated = session.auto_generate_if_needed().await.unwrap();
    assert!(generated.is_some());
    assert!(!session.plans().weekly().is_empty());
}

#[tokio::test]
async fn test_auto_generate_skips_existing_week() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    session.toggle_favorite(RecipeId(7)).await.unwrap();
    session
        .set_weekly_slot(Weekday::Monday, MealType::Breakfast, Some(RecipeId(1)))
        .await
        .unwrap();
    let before = session.plans().weekly().clone();

    assert!(session.auto_generate_if_needed().await.unwrap().is_none());
    assert_eq!(session.plans().weekly(), &before);
}

// ============================================================================
// Weekly and current plan edits
// ============================================================================

#[tokio::test]
async fn test_weekly_slot_requires_matching_meal_type() {
    let (mut session, _store) = memory_session().await;

    let err = session
        .set_weekly_slot(Weekday::Monday, MealType::Dinner, Some(RecipeId(1)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = session
        .set_weekly_slot(Weekday::Monday, MealType::Dinner, Some(RecipeId(999)))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_swap_weekly_slot_picks_a_different_recipe() {
    let (mut session, _store) = memory_session().await;
    session
        .set_weekly_slot(Weekday::Sunday, MealType::Snack, Some(RecipeId(25)))
        .await
        .unwrap();

    let swapped = session
        .swap_weekly_slot(Weekday::Sunday, MealType::Snack)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(swapped, RecipeId(25));
    assert_eq!(
        session.catalog().get(swapped).unwrap().meal_type,
        MealType::Snack
    );
    assert_eq!(
        session.plans().weekly().day(Weekday::Sunday).slot(MealType::Snack),
        Some(swapped)
    );
}

#[tokio::test]
async fn test_copy_and_clear_days() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    let monday = session.generate_day(Weekday::Monday).await.unwrap().plan;

    session.copy_day_to_week(Weekday::Monday).await.unwrap();
    for (_, plan) in session.plans().weekly().days() {
        assert_eq!(plan, &monday);
    }

    session.clear_day(Weekday::Friday).await.unwrap();
    session.clear_day(Weekday::Friday).await.unwrap();
    assert!(session.plans().weekly().day(Weekday::Friday).is_empty());
    assert_eq!(session.plans().weekly().day(Weekday::Thursday), &monday);

    session.clear_week().await.unwrap();
    assert!(session.plans().weekly().is_empty());
}

#[tokio::test]
async fn test_current_plan_edits_and_totals() {
    let (mut session, _store) = memory_session().await;

    session.add_recipe(MealType::Breakfast, RecipeId(1)).await.unwrap();
    session.add_recipe(MealType::Breakfast, RecipeId(3)).await.unwrap();
    session.add_recipe(MealType::Snack, RecipeId(30)).await.unwrap();

    let totals = session.current_totals();
    assert!((totals.calories - (470.0 + 570.0 + 320.0)).abs() < f64::EPSILON);
    assert!((totals.protein - (30.0 + 40.0 + 4.0)).abs() < f64::EPSILON);

    session
        .replace_recipe(MealType::Breakfast, RecipeId(3), RecipeId(7))
        .await
        .unwrap();
    assert_eq!(
        session.plans().current().slot(MealType::Breakfast),
        &[RecipeId(1), RecipeId(7)]
    );

    let err = session
        .replace_recipe(MealType::Breakfast, RecipeId(3), RecipeId(8))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    assert!(session.remove_recipe(MealType::Snack, RecipeId(30)).await.unwrap());
    assert!(!session.remove_recipe(MealType::Snack, RecipeId(30)).await.unwrap());

    session.clear_current().await.unwrap();
    assert!(session.plans().current().is_empty());
    assert_eq!(session.current_totals(), Macros::ZERO);
}

#[tokio::test]
async fn test_add_recipe_rejects_wrong_slot() {
    let (mut session, _store) = memory_session().await;
    let err = session
        .add_recipe(MealType::Lunch, RecipeId(25))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(session.plans().current().is_empty());
}

// ============================================================================
// Favorites, selection, saved plans
// ============================================================================

#[tokio::test]
async fn test_toggle_favorite_and_selection() {
    let (mut session, store) = memory_session().await;

    assert!(session.toggle_favorite(RecipeId(4)).await.unwrap());
    assert!(session.toggle_favorite(RecipeId(12)).await.unwrap());
    assert!(!session.toggle_favorite(RecipeId(4)).await.unwrap());
    assert_eq!(session.favorites(), &[RecipeId(12)]);

    assert!(session.toggle_selected(RecipeId(20)).await.unwrap());
    session.set_meals_selected(true).await.unwrap();

    let err = session.toggle_favorite(RecipeId(31)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let reloaded = session_over(store).await;
    assert_eq!(reloaded.favorites(), &[RecipeId(12)]);
    assert_eq!(reloaded.selected_recipes(), &[RecipeId(20)]);
    assert!(reloaded.meals_selected());
}

#[tokio::test]
async fn test_save_and_load_follow_plan_type() {
    let (mut session, store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    let week = session.generate_week().await.unwrap().plan;

    let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
    let weekly = session.save_plan("Week one", now).await.unwrap();

    session.set_plan_type(PlanType::Daily).await.unwrap();
    session.add_recipe(MealType::Dinner, RecipeId(18)).await.unwrap();
    let daily = session
        .save_plan("Salmon night", now + Duration::seconds(1))
        .await
        .unwrap();
    assert_eq!(session.plans().saved().len(), 2);

    session.clear_week().await.unwrap();
    assert_eq!(session.load_saved(&weekly.id).await.unwrap(), PlanType::Weekly);
    assert_eq!(session.plan_type(), PlanType::Weekly);
    assert_eq!(session.plans().weekly(), &week);

    session.delete_saved(&daily.id).await.unwrap();

    let reloaded = session_over(store).await;
    assert_eq!(reloaded.plan_type(), PlanType::Weekly);
    assert_eq!(reloaded.plans().weekly(), &week);
    assert_eq!(reloaded.plans().saved().len(), 1);
    assert_eq!(reloaded.plans().saved()[0].name, "Week one");
}

// ============================================================================
// Tracking
// ============================================================================

#[tokio::test]
async fn test_tracking_accumulates_within_a_day() {
    let (mut session, _store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    let today = test_today();

    session.add_water(today).await.unwrap();
    assert_eq!(session.add_water(today).await.unwrap(), 2);

    let logged = session
        .log_meal(today, "Oats", "08:00", (30.0, 60.0, 10.0))
        .await
        .unwrap();
    assert!((logged.calories - (30.0 * 4.0 + 60.0 * 4.0 + 10.0 * 9.0)).abs() < f64::EPSILON);

    session
        .set_meal_completed(today, MealType::Breakfast, true)
        .await
        .unwrap();

    let progress = session.tracking_progress();
    assert_eq!(progress.water_glasses, 2);
    assert_eq!(progress.meals_completed, 1);
    assert!(progress.macro_percents().is_some());
}

#[tokio::test]
async fn test_checklists_persist_for_the_day() {
    let (mut session, store) = memory_session().await;
    let today = test_today();

    assert!(session
        .toggle_checklist_item(today, Checklist::MorningProtocol, 1)
        .await
        .unwrap());
    assert!(session.toggle_after_lunch_fiber(today).await.unwrap());

    let err = session
        .toggle_checklist_item(today, Checklist::Supplements, 6)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let reloaded = session_over(store).await;
    assert_eq!(
        reloaded.tracking().checklist(Checklist::MorningProtocol),
        &[false, true, false, false]
    );
    assert!(reloaded.tracking().after_lunch_fiber);
}

#[tokio::test]
async fn test_tracking_starts_fresh_on_a_new_day() {
    let (mut session, store) = memory_session().await;
    let today = test_today();
    let tomorrow = today.succ_opt().unwrap();

    session.add_water(today).await.unwrap();
    session.add_water(today).await.unwrap();
    session
        .log_meal(today, "Eggs", "07:30", (24.0, 2.0, 24.0))
        .await
        .unwrap();

    assert_eq!(session.add_water(tomorrow).await.unwrap(), 1);
    assert_eq!(session.tracking().date, tomorrow);
    assert!(session.tracking().meals.is_empty());

    // A stale record on disk is discarded on load
    let reloaded = session_over(store).await;
    assert_eq!(reloaded.tracking().date, test_today());
    assert_eq!(reloaded.tracking().water_glasses, 0);
}

#[tokio::test]
async fn test_snack_cannot_be_marked_completed() {
    let (mut session, _store) = memory_session().await;
    let err = session
        .set_meal_completed(test_today(), MealType::Snack, true)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_delete_logged_meal_out_of_range() {
    let (mut session, _store) = memory_session().await;
    let err = session
        .delete_logged_meal(test_today(), 0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// AI meals and reset
// ============================================================================

#[tokio::test]
async fn test_ai_meal_without_collaborator_is_unavailable() {
    let (session, _store) = memory_session().await;
    let err = session.generate_ai_meal("salmon and rice").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_ai_meal_uses_collaborator() {
    let (session, _store) = memory_session().await;
    let session = session.with_meal_generator(Arc::new(FixedMeal));

    let meal = session.generate_ai_meal("chicken and rice").await.unwrap();
    assert_eq!(meal.name, "Chicken Rice Bowl");
    assert_eq!(meal.meal_type, MealType::Lunch);
}

#[tokio::test]
async fn test_reset_all_clears_every_key() {
    let (mut session, store) = memory_session().await;
    session.set_profile(reference_profile()).await.unwrap();
    session.toggle_favorite(RecipeId(1)).await.unwrap();
    session.generate_week().await.unwrap();
    session.add_water(test_today()).await.unwrap();
    assert!(!store.is_empty().await);

    session.reset_all(test_today()).await.unwrap();

    assert!(store.is_empty().await);
    assert!(session.profile().is_none());
    assert!(session.targets().is_none());
    assert!(session.favorites().is_empty());
    assert!(session.plans().weekly().is_empty());
    assert_eq!(session.plan_type(), PlanType::Weekly);
    assert_eq!(session.tracking().water_glasses, 0);

    let reloaded = session_over(store).await;
    assert!(reloaded.profile().is_none());
    assert!(reloaded.plans().saved().is_empty());
}

#[tokio::test]
async fn test_failed_reset_resets_only_removed_keys() {
    let shared = MemoryStore::new();
    let mut setup = session_over(Arc::new(shared.clone())).await;
    setup.set_profile(reference_profile()).await.unwrap();
    setup.toggle_favorite(RecipeId(1)).await.unwrap();

    let failing = Arc::new(FailingKeyStore {
        inner: shared.clone(),
        failing_key: storage_keys::FAVORITE_RECIPES,
    });
    let mut session = session_over(failing).await;

    let err = session.reset_all(test_today()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);

    // Keys ahead of the failure are gone in memory and in storage
    assert!(session.profile().is_none());
    assert!(session.targets().is_none());
    assert_eq!(session.favorites(), &[RecipeId(1)]);

    let reloaded = session_over(Arc::new(shared)).await;
    assert!(reloaded.profile().is_none());
    assert!(reloaded.targets().is_none());
    assert_eq!(reloaded.favorites(), &[RecipeId(1)]);
}
