// ABOUTME: Heuristic meal-plan generator over the recipe catalog
// ABOUTME: Random sampling and exhaustive prefix search for one day, chained across a week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Planner
//!
//! The catalog is partitioned by meal type and each candidate day takes one
//! recipe per slot. Candidates are scored with [`plan_scoring::score`] and the
//! lowest score wins. A slot whose partition is empty stays unfilled.
//!
//! The search is a bounded heuristic and makes no optimality claim. The random
//! source is a parameter so generation is reproducible under a fixed seed.

use super::plan_scoring::{self, ScoreBreakdown};
use crate::catalog::RecipeCatalog;
use crate::config::{PlannerConfig, SearchStrategy};
use macroplan_core::models::{
    DailyMealPlan, MacroTargets, Macros, MealType, Recipe, RecipeId, Weekday, WeeklyMealPlan,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One recipe (or nothing) per slot, in `MealType::ALL` order
type Candidate<'a> = [Option<&'a Recipe>; 4];

/// Best day found by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDay {
    /// Chosen recipe per slot
    pub plan: DailyMealPlan,
    /// Catalog totals of the chosen recipes
    pub totals: Macros,
    /// Score terms of the chosen combination
    pub score: ScoreBreakdown,
    /// Number of combinations scored
    pub candidates_evaluated: usize,
}

/// Seven generated days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWeek {
    /// Assembled weekly plan
    pub plan: WeeklyMealPlan,
    /// Per-day results, Monday first
    pub days: Vec<(Weekday, GeneratedDay)>,
}

/// Build the planner's random source: seeded when configured, otherwise from entropy
#[must_use]
pub fn planner_rng(config: &PlannerConfig) -> ChaCha8Rng {
    config
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Meal plan generator bound to a catalog and planner settings
#[derive(Debug, Clone, Copy)]
pub struct MealPlanner<'a> {
    catalog: &'a RecipeCatalog,
    config: &'a PlannerConfig,
}

impl<'a> MealPlanner<'a> {
    /// Create a planner
    #[must_use]
    pub const fn new(catalog: &'a RecipeCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate the best day found for `targets`
    ///
    /// `previous_day` holds the recipe ids of the day before; each shared recipe
    /// adds the variety penalty to a candidate's score.
    pub fn generate_day<R: Rng + ?Sized>(
        &self,
        targets: &MacroTargets,
        previous_day: &[RecipeId],
        rng: &mut R,
    ) -> GeneratedDay {
        let slots = self.slot_options();
        let generated = match self.config.strategy {
            SearchStrategy::RandomSampling => {
                self.random_sampling(&slots, targets, previous_day, rng)
            }
            SearchStrategy::ExhaustivePrefix => {
                self.exhaustive_prefix(&slots, targets, previous_day)
            }
        };

        debug!(
            strategy = %self.config.strategy,
            evaluated = generated.candidates_evaluated,
            score = generated.score.score,
            calories = generated.totals.calories,
            protein = generated.totals.protein,
            "Generated day"
        );
        generated
    }

    /// Generate Monday to Sunday, each day penalized for repeating the day before
    pub fn generate_week<R: Rng + ?Sized>(
        &self,
        targets: &MacroTargets,
        rng: &mut R,
    ) -> GeneratedWeek {
        let mut plan = WeeklyMealPlan::default();
        let mut days = Vec::with_capacity(Weekday::ALL.len());
        let mut previous: Vec<RecipeId> = Vec::new();

        for day in Weekday::ALL {
            let generated = self.generate_day(targets, &previous, rng);
            previous = generated.plan.recipe_ids();
            *plan.day_mut(day) = generated.plan;
            days.push((day, generated));
        }

        info!(
            strategy = %self.config.strategy,
            target_calories = targets.calories,
            "Generated weekly meal plan"
        );
        GeneratedWeek { plan, days }
    }

    /// A random recipe of `meal_type` other than `current`, if the catalog has one
    pub fn pick_alternative<R: Rng + ?Sized>(
        &self,
        meal_type: MealType,
        current: Option<RecipeId>,
        rng: &mut R,
    ) -> Option<RecipeId> {
        let alternatives: Vec<RecipeId> = self
            .catalog
            .by_meal_type(meal_type)
            .map(|recipe| recipe.id)
            .filter(|id| Some(*id) != current)
            .collect();
        alternatives.choose(rng).copied()
    }

    fn slot_options(&self) -> [Vec<&'a Recipe>; 4] {
        let mut partitions = self.catalog.partition();
        MealType::ALL.map(|meal_type| partitions.remove(&meal_type).unwrap_or_default())
    }

    fn random_sampling<R: Rng + ?Sized>(
        &self,
        slots: &[Vec<&'a Recipe>; 4],
        targets: &MacroTargets,
        previous_day: &[RecipeId],
        rng: &mut R,
    ) -> GeneratedDay {
        let mut best: Option<GeneratedDay> = None;
        let iterations = self.config.random_iterations.max(1);

        for _ in 0..iterations {
            let candidate: Candidate<'a> = [
                slots[0].choose(rng).copied(),
                slots[1].choose(rng).copied(),
                slots[2].choose(rng).copied(),
                slots[3].choose(rng).copied(),
            ];
            let evaluated = self.evaluate(&candidate, targets, previous_day);
            best = Some(keep_better(best, evaluated));
        }

        finish(best, iterations)
    }

    fn exhaustive_prefix(
        &self,
        slots: &[Vec<&'a Recipe>; 4],
        targets: &MacroTargets,
        previous_day: &[RecipeId],
    ) -> GeneratedDay {
        let prefix = self.config.exhaustive_prefix.max(1);
        // An empty partition contributes a single unfilled option
        let options: Vec<Vec<Option<&'a Recipe>>> = slots
            .iter()
            .map(|recipes| {
                if recipes.is_empty() {
                    vec![None]
                } else {
                    recipes.iter().take(prefix).copied().map(Some).collect()
                }
            })
            .collect();

        let mut best: Option<GeneratedDay> = None;
        let mut evaluated_count = 0;
        let mut indices = [0_usize; 4];

        loop {
            let candidate: Candidate<'a> = [
                options[0][indices[0]],
                options[1][indices[1]],
                options[2][indices[2]],
                options[3][indices[3]],
            ];
            let evaluated = self.evaluate(&candidate, targets, previous_day);
            best = Some(keep_better(best, evaluated));
            evaluated_count += 1;

            if !advance(&mut indices, &options) {
                break;
            }
        }

        finish(best, evaluated_count)
    }

    fn evaluate(
        &self,
        candidate: &Candidate<'_>,
        targets: &MacroTargets,
        previous_day: &[RecipeId],
    ) -> GeneratedDay {
        let mut plan = DailyMealPlan::default();
        for (meal_type, recipe) in MealType::ALL.into_iter().zip(candidate) {
            plan.set_slot(meal_type, recipe.map(|recipe| recipe.id));
        }
        let totals: Macros = candidate.iter().flatten().map(|recipe| recipe.macros).sum();
        let ids = plan.recipe_ids();
        let score =
            plan_scoring::score_breakdown(&totals, targets, previous_day, &ids, &self.config.scoring);

        GeneratedDay {
            plan,
            totals,
            score,
            candidates_evaluated: 1,
        }
    }
}

/// Keep the lower-scoring day; the earlier one wins ties
fn keep_better(best: Option<GeneratedDay>, candidate: GeneratedDay) -> GeneratedDay {
    match best {
        Some(current) if current.score.score <= candidate.score.score => current,
        _ => candidate,
    }
}

fn finish(best: Option<GeneratedDay>, evaluated: usize) -> GeneratedDay {
    let mut day = best.unwrap_or_else(|| GeneratedDay {
        plan: DailyMealPlan::default(),
        totals: Macros::ZERO,
        score: ScoreBreakdown::default(),
        candidates_evaluated: 0,
    });
    day.candidates_evaluated = evaluated;
    day
}

/// Odometer step over the option lists; false once every combination was visited
fn advance(indices: &mut [usize; 4], options: &[Vec<Option<&Recipe>>]) -> bool {
    for (index, slot_options) in indices.iter_mut().zip(options).rev() {
        *index += 1;
        if *index < slot_options.len() {
            return true;
        }
        *index = 0;
    }
    false
}
