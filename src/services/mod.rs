// ABOUTME: Domain service layer orchestrating catalog, planner, store, and persistence
// ABOUTME: Hosts the per-user meal plan session used by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the business rules that tie the pure modules together, so every
//! entry point applies them the same way.

/// Meal plan session: profile, targets, plans, tracking
pub mod meal_plan_service;

pub use meal_plan_service::MealPlanService;
