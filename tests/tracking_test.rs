// ABOUTME: Integration tests for daily intake tracking
// ABOUTME: Covers day rollover, the water cap, meal logging, checklists, and progress percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{reference_targets, test_today};
use macroplan::constants::tracking::WATER_GLASSES_GOAL;
use macroplan::errors::ErrorCode;
use macroplan::models::{Checklist, DailyTracking, MealType};
use macroplan::tracking::{
    add_water_glass, delete_meal, log_meal, progress, remove_water_glass, toggle_after_lunch_fiber,
    toggle_checklist_item, tracking_for_day,
};
use serde_json::json;

#[test]
fn test_record_from_today_is_kept() {
    let mut stored = DailyTracking::new(test_today());
    stored.water_glasses = 3;

    let tracking = tracking_for_day(Some(stored.clone()), test_today());
    assert_eq!(tracking, stored);
}

#[test]
fn test_record_from_yesterday_is_replaced() {
    let yesterday = test_today().pred_opt().unwrap();
    let mut stored = DailyTracking::new(yesterday);
    stored.water_glasses = 6;
    stored.breakfast_completed = true;

    let tracking = tracking_for_day(Some(stored), test_today());
    assert_eq!(tracking, DailyTracking::new(test_today()));
}

#[test]
fn test_missing_record_starts_empty() {
    assert_eq!(
        tracking_for_day(None, test_today()),
        DailyTracking::new(test_today())
    );
}

#[test]
fn test_water_stays_between_zero_and_goal() {
    let mut tracking = DailyTracking::new(test_today());

    assert_eq!(remove_water_glass(&mut tracking), 0);
    for _ in 0..WATER_GLASSES_GOAL + 3 {
        add_water_glass(&mut tracking);
    }
    assert_eq!(tracking.water_glasses, WATER_GLASSES_GOAL);
    assert_eq!(remove_water_glass(&mut tracking), WATER_GLASSES_GOAL - 1);
}

#[test]
fn test_log_meal_derives_calories() {
    let mut tracking = DailyTracking::new(test_today());
    let logged = log_meal(&mut tracking, "  Steak  ", "19:00", 50.0, 0.0, 20.0).unwrap();

    assert_eq!(logged.name, "Steak");
    assert!((logged.calories - 380.0).abs() < f64::EPSILON);
    assert_eq!(tracking.meals.len(), 1);
}

#[test]
fn test_log_meal_rejects_bad_input() {
    let mut tracking = DailyTracking::new(test_today());

    let cases = [
        ("", "12:00", 10.0, 10.0, 10.0),
        ("Lunch", " ", 10.0, 10.0, 10.0),
        ("Lunch", "12:00", -1.0, 10.0, 10.0),
        ("Lunch", "12:00", 10.0, f64::INFINITY, 10.0),
    ];
    for (name, time, protein, carbs, fats) in cases {
        let err = log_meal(&mut tracking, name, time, protein, carbs, fats).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
    assert!(tracking.meals.is_empty());
}

#[test]
fn test_delete_meal_by_position() {
    let mut tracking = DailyTracking::new(test_today());
    log_meal(&mut tracking, "First", "08:00", 20.0, 30.0, 5.0).unwrap();
    log_meal(&mut tracking, "Second", "12:00", 40.0, 50.0, 15.0).unwrap();
    log_meal(&mut tracking, "Third", "18:00", 50.0, 60.0, 20.0).unwrap();

    let removed = delete_meal(&mut tracking, 1).unwrap();
    assert_eq!(removed.name, "Second");

    let names: Vec<&str> = tracking.meals.iter().map(|meal| meal.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Third"]);

    let err = delete_meal(&mut tracking, 2).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_progress_against_targets() {
    let mut tracking = DailyTracking::new(test_today());
    log_meal(&mut tracking, "Big meal", "13:00", 90.0, 169.0, 40.5).unwrap();
    for _ in 0..4 {
        add_water_glass(&mut tracking);
    }
    tracking.set_completed(MealType::Lunch, true);
    tracking.set_completed(MealType::Dinner, true);
    tracking.set_completed(MealType::Snack, true);

    let targets = reference_targets();
    let summary = progress(&tracking, Some(&targets));

    assert_eq!(summary.water_percent(), 50);
    assert_eq!(summary.meals_completed, 2);

    let (_, protein, carbs, fats) = summary.macro_percents().unwrap();
    assert!((protein - 50.0).abs() < 1e-9);
    assert!((carbs - 50.0).abs() < 1e-9);
    assert!((fats - 50.0).abs() < 1e-9);
}

#[test]
fn test_progress_without_targets_has_no_percents() {
    let tracking = DailyTracking::new(test_today());
    let summary = progress(&tracking, None);
    assert!(summary.macro_percents().is_none());
    assert_eq!(summary.water_percent(), 0);
}

#[test]
fn test_checklist_items_toggle() {
    let mut tracking = DailyTracking::new(test_today());

    assert!(toggle_checklist_item(&mut tracking, Checklist::Supplements, 5).unwrap());
    assert!(toggle_checklist_item(&mut tracking, Checklist::BeforeBedRitual, 0).unwrap());
    assert!(!toggle_checklist_item(&mut tracking, Checklist::BeforeBedRitual, 0).unwrap());
    assert!(toggle_after_lunch_fiber(&mut tracking));

    assert_eq!(
        tracking.checklist(Checklist::Supplements),
        &[false, false, false, false, false, true]
    );
    assert!(tracking
        .checklist(Checklist::BeforeBedRitual)
        .iter()
        .all(|done| !done));

    let summary = progress(&tracking, None);
    assert_eq!(
        summary.checklists,
        vec![
            (Checklist::MorningProtocol, 0, 4),
            (Checklist::Supplements, 1, 6),
            (Checklist::BeforeBedRitual, 0, 3),
        ]
    );
    assert!(summary.after_lunch_fiber);
}

#[test]
fn test_checklist_item_out_of_range() {
    let mut tracking = DailyTracking::new(test_today());
    for list in Checklist::ALL {
        let past_end = list.items().len();
        let err = toggle_checklist_item(&mut tracking, list, past_end).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
    assert_eq!(tracking, DailyTracking::new(test_today()));
}

#[test]
fn test_checklists_reset_on_new_day() {
    let yesterday = test_today().pred_opt().unwrap();
    let mut stored = DailyTracking::new(yesterday);
    toggle_checklist_item(&mut stored, Checklist::MorningProtocol, 2).unwrap();
    toggle_after_lunch_fiber(&mut stored);

    let tracking = tracking_for_day(Some(stored), test_today());
    assert!(tracking
        .checklist(Checklist::MorningProtocol)
        .iter()
        .all(|done| !done));
    assert!(!tracking.after_lunch_fiber);
}

#[test]
fn test_record_without_checklists_still_reads() {
    let stored = json!({ "date": "2025-03-03", "waterGlasses": 2 });
    let tracking: DailyTracking = serde_json::from_value(stored).unwrap();

    assert_eq!(tracking.water_glasses, 2);
    assert_eq!(tracking.supplements, [false; 6]);
    assert_eq!(tracking.checklist(Checklist::BeforeBedRitual).len(), 3);
}

#[test]
fn test_checklist_names_parse() {
    assert_eq!("Morning".parse::<Checklist>().unwrap(), Checklist::MorningProtocol);
    assert_eq!("bedtime".parse::<Checklist>().unwrap(), Checklist::BeforeBedRitual);
    assert_eq!(
        "stretching".parse::<Checklist>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
}
