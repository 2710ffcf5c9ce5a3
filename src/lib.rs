// ABOUTME: Main library entry point for the macroplan meal planning engine
// ABOUTME: Macro targets, heuristic meal-plan generation, plan state, and key-value persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Macroplan
//!
//! A meal planning engine: compute daily macro targets from a user profile,
//! then search a fixed recipe catalog for the day or week that comes closest to
//! those targets. State persists between sessions in a key-value store.
//!
//! ## Architecture
//!
//! - **Catalog**: the embedded 30-recipe catalog and the food lists
//! - **Intelligence**: target calculation, plan scoring, plan search, staged progress
//! - **Store**: current, weekly, and saved plans
//! - **Persistence**: versioned JSON values behind a `KeyValueStore` trait
//! - **Services**: the per-user session tying everything together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use macroplan::catalog::RecipeCatalog;
//! use macroplan::config::MacroplanConfig;
//! use macroplan::errors::AppResult;
//! use macroplan::models::{ActivityLevel, Goal, UserProfile};
//! use macroplan::persistence::MemoryStore;
//! use macroplan::services::MealPlanService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let catalog = Arc::new(RecipeCatalog::builtin()?);
//!     let today = chrono::Local::now().date_naive();
//!     let mut session = MealPlanService::load(
//!         Arc::new(MemoryStore::new()),
//!         catalog,
//!         MacroplanConfig::global().clone(),
//!         today,
//!     )
//!     .await;
//!
//!     session
//!         .set_profile(UserProfile {
//!             weight_lbs: 180.0,
//!             height_feet: 5,
//!             height_inches: 10,
//!             age: 25,
//!             activity_level: ActivityLevel::Moderate,
//!             goal: Goal::Maintain,
//!             calorie_override: None,
//!         })
//!         .await?;
//!     let week = session.generate_week().await?;
//!     println!("{:?}", week.plan);
//!     Ok(())
//! }
//! ```

/// Embedded recipe catalog, food lists, and catalog queries
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// External collaborator clients
pub mod external;

/// Target calculation, scoring, plan search, and staged progress
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Key-value persistence backends and typed helpers
pub mod persistence;

/// Session services
pub mod services;

/// Plan state
pub mod store;

/// Daily intake tracking
pub mod tracking;

pub use macroplan_core::{constants, errors, models};
