// ABOUTME: External collaborator clients
// ABOUTME: AI meal generation over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for services outside the process.

/// AI meal generation client
pub mod ai_meal_client;

pub use ai_meal_client::{AiMealClient, GeneratedMeal, MealGenerator};
