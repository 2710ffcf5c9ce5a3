// ABOUTME: Fitness score of a candidate day plan against macro targets
// ABOUTME: Weighted absolute differences, proximity bonuses, and a previous-day variety penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Scoring
//!
//! ```text
//! weighted = 2*|dCal| + 3*|dProtein| + |dCarbs| + |dFats|
//! bonus    = 50 if |dCal| <= 5% of target calories
//!          + 100 if |dProtein| <= 5% of target protein
//! variety  = 20 * (recipes shared with the previous day)
//! score    = weighted - bonus + variety
//! ```
//!
//! Lower is better. Weights, tolerance, bonuses and the penalty come from
//! [`ScoringConfig`].

use crate::config::ScoringConfig;
use macroplan_core::models::{MacroTargets, Macros, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every term that went into a score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `|candidate.calories - target.calories|`
    pub calories_diff: f64,
    /// `|candidate.protein - target.protein|`
    pub protein_diff: f64,
    /// `|candidate.carbs - target.carbs|`
    pub carbs_diff: f64,
    /// `|candidate.fats - target.fats|`
    pub fats_diff: f64,
    /// Weighted sum of the differences
    pub weighted_diff: f64,
    /// Proximity bonus subtracted from the weighted sum
    pub bonus: f64,
    /// Penalty for recipes repeated from the previous day
    pub variety_penalty: f64,
    /// Final score, lower is better
    pub score: f64,
}

/// Number of distinct candidate recipes that also appear in the previous day
#[must_use]
pub fn shared_recipe_count(previous_day: &[RecipeId], candidate_ids: &[RecipeId]) -> usize {
    if previous_day.is_empty() {
        return 0;
    }
    let previous: HashSet<RecipeId> = previous_day.iter().copied().collect();
    let candidate: HashSet<RecipeId> = candidate_ids.iter().copied().collect();
    candidate.intersection(&previous).count()
}

/// Score a candidate and keep every intermediate term
#[must_use]
pub fn score_breakdown(
    candidate: &Macros,
    targets: &MacroTargets,
    previous_day: &[RecipeId],
    candidate_ids: &[RecipeId],
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let calories_diff = (candidate.calories - targets.calories).abs();
    let protein_diff = (candidate.protein - targets.protein).abs();
    let carbs_diff = (candidate.carbs - targets.carbs).abs();
    let fats_diff = (candidate.fats - targets.fats).abs();

    let weighted_diff = config.fats_weight.mul_add(
        fats_diff,
        config.carbs_weight.mul_add(
            carbs_diff,
            config
                .calories_weight
                .mul_add(calories_diff, config.protein_weight * protein_diff),
        ),
    );

    let mut bonus = 0.0;
    if calories_diff <= targets.calories * config.bonus_tolerance {
        bonus += config.calories_bonus;
    }
    if protein_diff <= targets.protein * config.bonus_tolerance {
        bonus += config.protein_bonus;
    }

    let shared = shared_recipe_count(previous_day, candidate_ids);
    let variety_penalty = shared as f64 * config.variety_penalty;

    ScoreBreakdown {
        calories_diff,
        protein_diff,
        carbs_diff,
        fats_diff,
        weighted_diff,
        bonus,
        variety_penalty,
        score: weighted_diff - bonus + variety_penalty,
    }
}

/// Score a candidate day; lower is better
#[must_use]
pub fn score(
    candidate: &Macros,
    targets: &MacroTargets,
    previous_day: &[RecipeId],
    candidate_ids: &[RecipeId],
    config: &ScoringConfig,
) -> f64 {
    score_breakdown(candidate, targets, previous_day, candidate_ids, config).score
}
