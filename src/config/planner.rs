// ABOUTME: Planner configuration for meal-plan search and scoring
// ABOUTME: Search strategy selection, iteration budgets, seed, scoring weights, and stage delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the planner explores recipe combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Draw one random recipe per slot for a fixed number of iterations
    #[default]
    RandomSampling,
    /// Enumerate every combination of the first N recipes of each slot
    ExhaustivePrefix,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RandomSampling => "random",
            Self::ExhaustivePrefix => "exhaustive",
        })
    }
}

impl FromStr for SearchStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" | "random_sampling" => Ok(Self::RandomSampling),
            "exhaustive" | "exhaustive_prefix" => Ok(Self::ExhaustivePrefix),
            other => Err(ConfigError::Parse(format!(
                "Unknown search strategy '{other}' (expected random or exhaustive)"
            ))),
        }
    }
}

/// Weights and bonuses of the plan fitness score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight on the calorie difference
    pub calories_weight: f64,
    /// Weight on the protein difference
    pub protein_weight: f64,
    /// Weight on the carbohydrate difference
    pub carbs_weight: f64,
    /// Weight on the fat difference
    pub fats_weight: f64,
    /// Relative tolerance for the proximity bonuses (0.05 = within 5%)
    pub bonus_tolerance: f64,
    /// Bonus subtracted when calories are within tolerance
    pub calories_bonus: f64,
    /// Bonus subtracted when protein is within tolerance
    pub protein_bonus: f64,
    /// Penalty per recipe shared with the previous day
    pub variety_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calories_weight: 2.0,
            protein_weight: 3.0,
            carbs_weight: 1.0,
            fats_weight: 1.0,
            bonus_tolerance: 0.05,
            calories_bonus: 50.0,
            protein_bonus: 100.0,
            variety_penalty: 20.0,
        }
    }
}

impl ScoringConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.calories_weight,
            self.protein_weight,
            self.carbs_weight,
            self.fats_weight,
        ];
        if weights.iter().any(|weight| *weight < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.bonus_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "Bonus tolerance must be between 0.0 and 1.0",
            ));
        }
        if self.calories_bonus < 0.0 || self.protein_bonus < 0.0 || self.variety_penalty < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Bonuses and variety penalty must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Meal planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Search strategy
    pub strategy: SearchStrategy,
    /// Iterations for random sampling
    pub random_iterations: usize,
    /// Recipes per slot considered by the exhaustive prefix search
    pub exhaustive_prefix: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Delay of each visible generation stage (milliseconds)
    pub stage_delay_ms: u64,
    /// Fitness score settings
    pub scoring: ScoringConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::RandomSampling,
            random_iterations: 10,
            exhaustive_prefix: 5,
            seed: None,
            stage_delay_ms: 500,
            scoring: ScoringConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Validate planner settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a budget is zero or scoring settings are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Planner iterations must be at least 1",
            ));
        }
        if self.exhaustive_prefix == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Exhaustive prefix must be at least 1",
            ));
        }
        self.scoring.validate()
    }
}
