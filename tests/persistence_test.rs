// ABOUTME: Integration tests for the key-value persistence backends and typed helpers
// ABOUTME: Exercises memory and file stores, versioned envelopes, and fallback on bad data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_profile};
use macroplan::constants::storage_keys;
use macroplan::errors::ErrorCode;
use macroplan::models::{MealType, RecipeId, UserProfile, Weekday, WeeklyMealPlan};
use macroplan::persistence::{self, FileStore, KeyValueStore, MemoryStore};
use serde_json::json;
use tempfile::TempDir;

async fn assert_round_trips(store: &dyn KeyValueStore) {
    let profile = reference_profile();
    persistence::save(store, storage_keys::USER_PROFILE, &profile)
        .await
        .unwrap();
    let loaded: Option<UserProfile> = persistence::load(store, storage_keys::USER_PROFILE).await;
    assert_eq!(loaded, Some(profile));

    let mut week = WeeklyMealPlan::default();
    week.day_mut(Weekday::Thursday)
        .set_slot(MealType::Lunch, Some(RecipeId(14)));
    persistence::save(store, storage_keys::WEEKLY_MEAL_PLAN, &week)
        .await
        .unwrap();
    let loaded: WeeklyMealPlan =
        persistence::load_or_default(store, storage_keys::WEEKLY_MEAL_PLAN).await;
    assert_eq!(loaded, week);
}

async fn assert_bad_data_falls_back(store: &dyn KeyValueStore) {
    store
        .set_raw(storage_keys::FAVORITE_RECIPES, "{not json".to_owned())
        .await
        .unwrap();
    let favorites: Vec<RecipeId> =
        persistence::load_or_default(store, storage_keys::FAVORITE_RECIPES).await;
    assert!(favorites.is_empty());

    let future_version = json!({ "schemaVersion": 999, "value": [1, 2, 3] }).to_string();
    store
        .set_raw(storage_keys::SELECTED_RECIPES, future_version)
        .await
        .unwrap();
    let selected: Option<Vec<RecipeId>> =
        persistence::load(store, storage_keys::SELECTED_RECIPES).await;
    assert_eq!(selected, None);

    let wrong_shape = json!({ "schemaVersion": 1, "value": "not a profile" }).to_string();
    store
        .set_raw(storage_keys::USER_PROFILE, wrong_shape)
        .await
        .unwrap();
    let profile: Option<UserProfile> = persistence::load(store, storage_keys::USER_PROFILE).await;
    assert_eq!(profile, None);
}

#[tokio::test]
async fn test_memory_store_round_trip() {
    init_test_logging();
    assert_round_trips(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_file_store_round_trip() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    assert_round_trips(&FileStore::new(dir.path())).await;
}

#[tokio::test]
async fn test_memory_store_bad_data_falls_back() {
    init_test_logging();
    assert_bad_data_falls_back(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_file_store_bad_data_falls_back() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    assert_bad_data_falls_back(&FileStore::new(dir.path())).await;
}

#[tokio::test]
async fn test_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get_raw(storage_keys::MACROS).await.unwrap(), None);

    let loaded: Option<UserProfile> = persistence::load(&store, storage_keys::USER_PROFILE).await;
    assert_eq!(loaded, None);
}

#[tokio::test]
async fn test_values_are_wrapped_in_versioned_envelope() {
    let store = MemoryStore::new();
    persistence::save(&store, storage_keys::MEALS_SELECTED, &true)
        .await
        .unwrap();

    let raw = store
        .get_raw(storage_keys::MEALS_SELECTED)
        .await
        .unwrap()
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, json!({ "schemaVersion": 1, "value": true }));
}

#[tokio::test]
async fn test_file_store_writes_one_file_per_key() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("nested").join("data");
    let store = FileStore::new(&data_dir);

    persistence::save(&store, storage_keys::PLAN_TYPE, &"weekly")
        .await
        .unwrap();

    assert!(data_dir.join("planType.json").exists());
    // No temp file left behind
    let entries = std::fs::read_dir(&data_dir).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let file_store = FileStore::new(dir.path());
    let memory_store = MemoryStore::new();

    for store in [&file_store as &dyn KeyValueStore, &memory_store] {
        persistence::save(store, storage_keys::MACROS, &1)
            .await
            .unwrap();
        store.remove(storage_keys::MACROS).await.unwrap();
        store.remove(storage_keys::MACROS).await.unwrap();
        assert_eq!(store.get_raw(storage_keys::MACROS).await.unwrap(), None);
    }
}

#[tokio::test]
async fn test_invalid_keys_rejected() {
    let dir = TempDir::new().unwrap();
    let file_store = FileStore::new(dir.path());

    for key in ["", "../escape", "with space", "a/b"] {
        let err = file_store.set_raw(key, "{}".to_owned()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "key {key:?}");
    }
}

#[tokio::test]
async fn test_memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let clone = store.clone();
    clone
        .set_raw(storage_keys::MACROS, "{}".to_owned())
        .await
        .unwrap();
    assert_eq!(store.len().await, 1);
}
