// ABOUTME: Core types and constants for the macroplan meal-planning engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macroplan Core
//!
//! Foundation crate providing shared types and constants for the macroplan
//! meal-planning engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition factors, unit conversions, and storage keys
//! - **models**: Recipes, profiles, targets, meal plans, and daily tracking

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, UserProfile, meal plans, tracking)
pub mod models;
