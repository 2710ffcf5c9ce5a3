// ABOUTME: Daily intake tracking: water, logged meals, completed main meals, and habit checklists
// ABOUTME: Records are date-stamped and start fresh when the stored date is not today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use macroplan_core::constants::tracking::WATER_GLASSES_GOAL;
use macroplan_core::errors::{AppError, AppResult};
use macroplan_core::models::{Checklist, DailyTracking, LoggedMeal, MacroTargets, Macros};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Today's record: the stored one if it is dated `today`, otherwise a fresh one
#[must_use]
pub fn tracking_for_day(stored: Option<DailyTracking>, today: NaiveDate) -> DailyTracking {
    match stored {
        Some(tracking) if tracking.date == today => tracking,
        Some(stale) => {
            debug!(stored = %stale.date, %today, "Tracking record is from another day, starting fresh");
            DailyTracking::new(today)
        }
        None => DailyTracking::new(today),
    }
}

/// Add one glass, capped at the daily goal; returns the new count
pub fn add_water_glass(tracking: &mut DailyTracking) -> u32 {
    if tracking.water_glasses < WATER_GLASSES_GOAL {
        tracking.water_glasses += 1;
    }
    tracking.water_glasses
}

/// Remove one glass, never below zero; returns the new count
pub fn remove_water_glass(tracking: &mut DailyTracking) -> u32 {
    tracking.water_glasses = tracking.water_glasses.saturating_sub(1);
    tracking.water_glasses
}

/// Log a hand-entered meal
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name or time, or negative macros.
pub fn log_meal<'a>(
    tracking: &'a mut DailyTracking,
    name: &str,
    time: &str,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> AppResult<&'a LoggedMeal> {
    if name.trim().is_empty() || time.trim().is_empty() {
        return Err(AppError::invalid_input(
            "Meal name and time are required",
        ));
    }
    if [protein, carbs, fats]
        .iter()
        .any(|grams| !grams.is_finite() || *grams < 0.0)
    {
        return Err(AppError::invalid_input(
            "Meal macros must be non-negative numbers",
        ));
    }

    let index = tracking.meals.len();
    tracking
        .meals
        .push(LoggedMeal::new(name.trim(), time.trim(), protein, carbs, fats));
    Ok(&tracking.meals[index])
}

/// Delete a logged meal by position
///
/// # Errors
///
/// Returns `ResourceNotFound` when `index` is out of range.
pub fn delete_meal(tracking: &mut DailyTracking, index: usize) -> AppResult<LoggedMeal> {
    if index >= tracking.meals.len() {
        return Err(AppError::not_found("Logged meal").with_resource_id(index.to_string()));
    }
    Ok(tracking.meals.remove(index))
}

/// Flip one checklist item; returns whether it is now done
///
/// # Errors
///
/// Returns `ResourceNotFound` when `index` is past the end of the list.
pub fn toggle_checklist_item(
    tracking: &mut DailyTracking,
    list: Checklist,
    index: usize,
) -> AppResult<bool> {
    let item = tracking.checklist_mut(list).get_mut(index).ok_or_else(|| {
        AppError::not_found(format!("{} item", list.label())).with_resource_id(index.to_string())
    })?;
    *item = !*item;
    Ok(*item)
}

/// Flip the after-lunch fiber flag; returns the new value
pub fn toggle_after_lunch_fiber(tracking: &mut DailyTracking) -> bool {
    tracking.after_lunch_fiber = !tracking.after_lunch_fiber;
    tracking.after_lunch_fiber
}

/// Intake so far against the daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingProgress {
    /// Totals over logged meals
    pub totals: Macros,
    /// Targets the totals are measured against
    pub targets: Option<MacroTargets>,
    /// Glasses of water so far
    pub water_glasses: u32,
    /// Daily water goal
    pub water_goal: u32,
    /// Main meals marked as eaten
    pub meals_completed: u32,
    /// `(list, done, total)` for each checklist
    pub checklists: Vec<(Checklist, usize, usize)>,
    /// Fruit or fiber after lunch
    pub after_lunch_fiber: bool,
}

impl TrackingProgress {
    /// Percent of the water goal reached, rounded
    #[must_use]
    pub fn water_percent(&self) -> u32 {
        percent(f64::from(self.water_glasses), f64::from(self.water_goal)).round() as u32
    }

    /// Percent of each target reached as `(calories, protein, carbs, fats)`
    #[must_use]
    pub fn macro_percents(&self) -> Option<(f64, f64, f64, f64)> {
        self.targets.map(|targets| {
            (
                percent(self.totals.calories, targets.calories),
                percent(self.totals.protein, targets.protein),
                percent(self.totals.carbs, targets.carbs),
                percent(self.totals.fats, targets.fats),
            )
        })
    }
}

fn percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        0.0
    } else {
        current / target * 100.0
    }
}

/// Summarize a record against optional targets
#[must_use]
pub fn progress(tracking: &DailyTracking, targets: Option<&MacroTargets>) -> TrackingProgress {
    let meals_completed = [
        tracking.breakfast_completed,
        tracking.lunch_completed,
        tracking.dinner_completed,
    ]
    .into_iter()
    .filter(|done| *done)
    .count() as u32;

    TrackingProgress {
        totals: tracking.totals(),
        targets: targets.copied(),
        water_glasses: tracking.water_glasses,
        water_goal: WATER_GLASSES_GOAL,
        meals_completed,
        checklists: Checklist::ALL
            .into_iter()
            .map(|list| {
                let flags = tracking.checklist(list);
                (list, flags.iter().filter(|done| **done).count(), flags.len())
            })
            .collect(),
        after_lunch_fiber: tracking.after_lunch_fiber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_is_capped_at_goal() {
        let mut tracking = DailyTracking::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        for _ in 0..12 {
            add_water_glass(&mut tracking);
        }
        assert_eq!(tracking.water_glasses, WATER_GLASSES_GOAL);
        assert_eq!(remove_water_glass(&mut tracking), WATER_GLASSES_GOAL - 1);
    }

    #[test]
    fn test_percent_of_zero_target_is_zero() {
        assert!(percent(50.0, 0.0).abs() < f64::EPSILON);
    }
}
