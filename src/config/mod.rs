// ABOUTME: Configuration management for the meal-planning engine
// ABOUTME: Environment-only config with defaults, env overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only (no config files). Every section has
//! defaults; `MACROPLAN_*` variables override individual values and the result
//! is validated before use.
//!
//! - `nutrition`: BMR coefficients, activity factors, macro ratios, goal offset
//! - `planner`: search strategy, iteration budgets, seed, scoring weights
//! - `storage`: data directory and AI collaborator endpoint

/// Configuration error type
pub mod error;
/// Nutrition configuration
pub mod nutrition;
/// Planner and scoring configuration
pub mod planner;
/// Storage and AI collaborator configuration
pub mod storage;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroRatioConfig, NutritionConfig,
    ProfileBoundsConfig,
};
pub use planner::{PlannerConfig, ScoringConfig, SearchStrategy};
pub use storage::{AiMealConfig, StorageConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static MACROPLAN_CONFIG: OnceLock<MacroplanConfig> = OnceLock::new();

/// Root configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroplanConfig {
    /// Macro target computation
    pub nutrition: NutritionConfig,
    /// Meal-plan search and scoring
    pub planner: PlannerConfig,
    /// Persistence location
    pub storage: StorageConfig,
    /// AI meal collaborator
    pub ai: AiMealConfig,
}

impl MacroplanConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MACROPLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load macroplan config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.planner.validate()?;
        self.ai.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_optional_env_var<T: FromStr>(
        env_var_name: &str,
        target: &mut Option<T>,
    ) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            let val = val.trim();
            *target = if val.is_empty() {
                None
            } else {
                Some(
                    val.parse()
                        .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?,
                )
            };
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MACROPLAN_GOAL_CALORIE_OFFSET",
            &mut self.nutrition.goal.calorie_offset,
        )?;

        Self::apply_env_var(
            "MACROPLAN_PLANNER_ITERATIONS",
            &mut self.planner.random_iterations,
        )?;
        if let Ok(val) = env::var("MACROPLAN_PLANNER_STRATEGY") {
            self.planner.strategy = val.parse()?;
        }
        Self::apply_env_var(
            "MACROPLAN_PLANNER_PREFIX",
            &mut self.planner.exhaustive_prefix,
        )?;
        Self::apply_optional_env_var("MACROPLAN_PLANNER_SEED", &mut self.planner.seed)?;
        Self::apply_env_var("MACROPLAN_STAGE_DELAY_MS", &mut self.planner.stage_delay_ms)?;

        Self::apply_env_var("MACROPLAN_DATA_DIR", &mut self.storage.data_dir)?;

        Self::apply_optional_env_var("MACROPLAN_AI_ENDPOINT", &mut self.ai.endpoint)?;
        Self::apply_env_var("MACROPLAN_AI_TIMEOUT_SECS", &mut self.ai.timeout_secs)?;

        Ok(self)
    }
}
