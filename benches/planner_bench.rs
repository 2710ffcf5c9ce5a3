// ABOUTME: Criterion benchmarks for plan scoring and day/week generation
// ABOUTME: Measures score latency and both search strategies over the embedded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal planner.
//!
//! Measures the fitness score on its own, single-day generation for both
//! search strategies across iteration budgets, and a full week.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macroplan::catalog::RecipeCatalog;
use macroplan::config::{PlannerConfig, ScoringConfig, SearchStrategy};
use macroplan::intelligence::{planner_rng, score, MealPlanner};
use macroplan::models::{MacroTargets, Macros, RecipeId};

const TARGETS: MacroTargets = MacroTargets {
    calories: 2802.0,
    protein: 180.0,
    carbs: 338.0,
    fats: 81.0,
};

fn seeded(strategy: SearchStrategy, random_iterations: usize, exhaustive_prefix: usize) -> PlannerConfig {
    PlannerConfig {
        strategy,
        random_iterations,
        exhaustive_prefix,
        seed: Some(42),
        stage_delay_ms: 0,
        ..PlannerConfig::default()
    }
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let config = ScoringConfig::default();
    let candidate = Macros::new(175.0, 320.0, 90.0, 2750.0);
    let previous = [RecipeId(1), RecipeId(9), RecipeId(17), RecipeId(25)];
    let ids = [RecipeId(2), RecipeId(9), RecipeId(18), RecipeId(26)];

    group.bench_function("no_previous_day", |b| {
        b.iter(|| {
            black_box(score(
                black_box(&candidate),
                black_box(&TARGETS),
                &[],
                black_box(&ids),
                &config,
            ))
        });
    });

    group.bench_function("with_previous_day", |b| {
        b.iter(|| {
            black_box(score(
                black_box(&candidate),
                black_box(&TARGETS),
                black_box(&previous),
                black_box(&ids),
                &config,
            ))
        });
    });

    group.finish();
}

fn bench_generate_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_day");
    let catalog = RecipeCatalog::builtin().unwrap();

    for iterations in [10_usize, 100, 1_000] {
        let config = seeded(SearchStrategy::RandomSampling, iterations, 5);
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            BenchmarkId::new("random_sampling", iterations),
            &config,
            |b, config| {
                let planner = MealPlanner::new(&catalog, config);
                let mut rng = planner_rng(config);
                b.iter(|| black_box(planner.generate_day(&TARGETS, &[], &mut rng)));
            },
        );
    }

    for prefix in [3_usize, 5, 8] {
        let config = seeded(SearchStrategy::ExhaustivePrefix, 10, prefix);
        group.bench_with_input(
            BenchmarkId::new("exhaustive_prefix", prefix),
            &config,
            |b, config| {
                let planner = MealPlanner::new(&catalog, config);
                let mut rng = planner_rng(config);
                b.iter(|| black_box(planner.generate_day(&TARGETS, &[], &mut rng)));
            },
        );
    }

    group.finish();
}

fn bench_generate_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_week");
    group.sample_size(50);
    let catalog = RecipeCatalog::builtin().unwrap();

    let config = seeded(SearchStrategy::RandomSampling, 10, 5);
    group.bench_function("random_sampling_default", |b| {
        let planner = MealPlanner::new(&catalog, &config);
        let mut rng = planner_rng(&config);
        b.iter(|| black_box(planner.generate_week(&TARGETS, &mut rng)));
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_generate_day, bench_generate_week);
criterion_main!(benches);
