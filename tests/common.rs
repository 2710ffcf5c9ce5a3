// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a deterministic config, profiles, recipes, and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macroplan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use chrono::NaiveDate;
use macroplan::catalog::RecipeCatalog;
use macroplan::config::MacroplanConfig;
use macroplan::models::{
    ActivityLevel, Goal, Ingredient, MacroTargets, Macros, MealType, Recipe, RecipeId, UserProfile,
};
use macroplan::persistence::{KeyValueStore, MemoryStore};
use macroplan::services::MealPlanService;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default configuration with a fixed seed and no stage delays
pub fn test_config() -> MacroplanConfig {
    let mut config = MacroplanConfig::default();
    config.planner.seed = Some(42);
    config.planner.stage_delay_ms = 0;
    config
}

/// 180 lbs, 5'10", 25 years, moderate, maintain
pub fn reference_profile() -> UserProfile {
    UserProfile {
        weight_lbs: 180.0,
        height_feet: 5,
        height_inches: 10,
        age: 25,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        calorie_override: None,
    }
}

/// Targets of the reference profile
pub const fn reference_targets() -> MacroTargets {
    MacroTargets {
        calories: 2802.0,
        protein: 180.0,
        carbs: 338.0,
        fats: 81.0,
    }
}

/// A fixed "today"
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Minimal recipe with the given macros
pub fn recipe(id: u32, meal_type: MealType, macros: Macros) -> Recipe {
    Recipe {
        id: RecipeId(id),
        name: format!("Test recipe {id}"),
        meal_type,
        ingredients: vec![Ingredient {
            name: "Eggs".to_owned(),
            amount: "2 large".to_owned(),
        }],
        serving_size: "1 plate".to_owned(),
        macros,
        instructions: vec!["Cook it".to_owned()],
        prep_time: "5 min".to_owned(),
        cook_time: "10 min".to_owned(),
        required_foods: vec!["Eggs".to_owned()],
    }
}

/// The embedded catalog
pub fn builtin_catalog() -> Arc<RecipeCatalog> {
    Arc::new(RecipeCatalog::builtin().unwrap())
}

/// Session over an in-memory store with the test config
pub async fn memory_session() -> (MealPlanService, Arc<MemoryStore>) {
    init_test_logging();
    let store = Arc::new(MemoryStore::new());
    let service = session_over(store.clone()).await;
    (service, store)
}

/// Session over any store with the builtin catalog and the test config
pub async fn session_over(store: Arc<dyn KeyValueStore>) -> MealPlanService {
    MealPlanService::load(store, builtin_catalog(), test_config(), test_today()).await
}
