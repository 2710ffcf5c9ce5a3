// ABOUTME: Integration tests for the candidate day fitness score
// ABOUTME: Checks monotonicity in each macro, proximity bonuses, and the variety penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::reference_targets;
use macroplan::config::ScoringConfig;
use macroplan::intelligence::plan_scoring::shared_recipe_count;
use macroplan::intelligence::{score, score_breakdown};
use macroplan::models::{Macros, RecipeId};

fn ids(raw: &[u32]) -> Vec<RecipeId> {
    raw.iter().copied().map(RecipeId).collect()
}

#[test]
fn test_exact_match_earns_both_bonuses() {
    let targets = reference_targets();
    let breakdown = score_breakdown(
        &targets.as_macros(),
        &targets,
        &[],
        &ids(&[1, 9, 17, 25]),
        &ScoringConfig::default(),
    );

    assert!(breakdown.weighted_diff.abs() < f64::EPSILON);
    assert!((breakdown.bonus - 150.0).abs() < f64::EPSILON);
    assert!((breakdown.score + 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_weighted_difference_uses_configured_weights() {
    let targets = reference_targets();
    // 100 kcal, 8 g protein, 20 g carbs, 5 g fat away
    let candidate = Macros::new(188.0, 358.0, 76.0, 2702.0);
    let breakdown = score_breakdown(
        &candidate,
        &targets,
        &[],
        &[],
        &ScoringConfig::default(),
    );

    let expected = 2.0 * 100.0 + 3.0 * 8.0 + 20.0 + 5.0;
    assert!((breakdown.weighted_diff - expected).abs() < 1e-9);
    // Both within 5 percent
    assert!((breakdown.bonus - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_score_grows_as_each_macro_moves_away() {
    let targets = reference_targets();
    let config = ScoringConfig::default();
    let base = targets.as_macros();

    let moves: [fn(Macros, f64) -> Macros; 4] = [
        |m, d| Macros {
            calories: m.calories + d,
            ..m
        },
        |m, d| Macros {
            protein: m.protein + d,
            ..m
        },
        |m, d| Macros {
            carbs: m.carbs + d,
            ..m
        },
        |m, d| Macros { fats: m.fats + d, ..m },
    ];

    for shift in moves {
        let mut previous = f64::NEG_INFINITY;
        for distance in [0.0, 200.0, 400.0, 800.0] {
            let current = score(&shift(base, distance), &targets, &[], &[], &config);
            assert!(current >= previous, "score must not decrease with distance");
            previous = current;
        }
    }
}

#[test]
fn test_bonuses_drop_outside_tolerance() {
    let targets = reference_targets();
    let far = Macros::new(100.0, 338.0, 81.0, 2000.0);
    let breakdown = score_breakdown(&far, &targets, &[], &[], &ScoringConfig::default());
    assert!(breakdown.bonus.abs() < f64::EPSILON);
}

#[test]
fn test_protein_bonus_alone() {
    let targets = reference_targets();
    // Protein exact, calories 20 percent low
    let candidate = Macros::new(180.0, 338.0, 81.0, 2240.0);
    let breakdown = score_breakdown(&candidate, &targets, &[], &[], &ScoringConfig::default());
    assert!((breakdown.bonus - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_variety_penalty_per_shared_recipe() {
    let targets = reference_targets();
    let config = ScoringConfig::default();
    let candidate = targets.as_macros();
    let previous = ids(&[1, 9, 17, 25]);

    let fresh = score(&candidate, &targets, &previous, &ids(&[2, 10, 18, 26]), &config);
    let one = score(&candidate, &targets, &previous, &ids(&[1, 10, 18, 26]), &config);
    let all = score(&candidate, &targets, &previous, &previous, &config);

    assert!((one - fresh - 20.0).abs() < 1e-9);
    assert!((all - fresh - 80.0).abs() < 1e-9);
}

#[test]
fn test_no_previous_day_means_no_penalty() {
    assert_eq!(shared_recipe_count(&[], &ids(&[1, 2, 3])), 0);

    let breakdown = score_breakdown(
        &reference_targets().as_macros(),
        &reference_targets(),
        &[],
        &ids(&[1, 9, 17, 25]),
        &ScoringConfig::default(),
    );
    assert!(breakdown.variety_penalty.abs() < f64::EPSILON);
}

#[test]
fn test_shared_count_ignores_duplicates() {
    assert_eq!(shared_recipe_count(&ids(&[4, 4, 9]), &ids(&[4, 4, 4])), 1);
}
