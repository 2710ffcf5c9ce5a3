// ABOUTME: Planning intelligence: macro targets, plan scoring, plan search, and staged progress
// ABOUTME: Pure algorithms parameterized by configuration and an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning intelligence
//!
//! - `macro_calculator`: profile -> daily calorie and macro targets
//! - `plan_scoring`: fitness score of a candidate day
//! - `meal_planner`: bounded search for the best day and week
//! - `progress`: visible generation stages and the single-generation lock

/// Daily macro target computation
pub mod macro_calculator;
/// Heuristic day and week generation
pub mod meal_planner;
/// Candidate day scoring
pub mod plan_scoring;
/// Generation stages and lock
pub mod progress;

pub use macro_calculator::{compute_targets, MacroTargetCalculation};
pub use meal_planner::{planner_rng, GeneratedDay, GeneratedWeek, MealPlanner};
pub use plan_scoring::{score, score_breakdown, ScoreBreakdown};
pub use progress::{
    GenerationGuard, GenerationLock, GenerationProgress, GenerationStage, StageStatus,
    StagedProgress,
};
