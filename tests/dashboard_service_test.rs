// ABOUTME: Integration tests for dashboard statistics
// ABOUTME: Checks counters, streaks, recent activity, and the last-seven-days window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use chrono::FixedOffset;
use helpers::fixtures::{
    beef, chili, history, kitchen, reference_now, rice, rice_bowl, tomato, utc,
};
use nutrition_tracker::config::ServingsPolicy;
use nutrition_tracker::constants::nutrition::AGGREGATE_TOLERANCE;
use nutrition_tracker::models::{CookingHistoryEntry, NutritionTotals, Recipe};
use nutrition_tracker::services::dashboard::{build_dashboard, DashboardOptions};
use nutrition_tracker::snapshot::KitchenSnapshot;

#[test]
fn test_dashboard_counters() {
    let stats = build_dashboard(&kitchen(), &reference_now(), &DashboardOptions::default());

    assert_eq!(stats.total_recipes, 2);
    assert_eq!(stats.total_ingredients, 3);
    assert_eq!(stats.total_cooked, 8);
    assert_eq!(stats.current_streak_days, 3);
    assert_eq!(stats.longest_streak_days, 4);
    assert_eq!(stats.cooked_last_7_days, 5);
}

#[test]
fn test_most_cooked_recipe() {
    let stats = build_dashboard(&kitchen(), &reference_now(), &DashboardOptions::default());
    let most_cooked = stats.most_cooked_recipe.unwrap();

    assert_eq!(most_cooked.recipe_id, "rcp_chili");
    assert_eq!(most_cooked.recipe_name.as_deref(), Some("Chili"));
    assert_eq!(most_cooked.times_cooked, 4);
}

#[test]
fn test_recent_activity_excludes_future_and_is_newest_first() {
    let stats = build_dashboard(&kitchen(), &reference_now(), &DashboardOptions::default());
    let ids: Vec<&str> = stats
        .recent_activity
        .iter()
        .map(|cook| cook.entry_id.as_str())
        .collect();

    assert_eq!(ids, ["ck_1", "ck_2", "ck_3", "ck_4", "ck_5"]);
    assert!(stats
        .recent_activity
        .iter()
        .all(|cook| cook.cooked_at <= reference_now()));

    let chili = stats.recent_activity[0].per_serving.unwrap();
    assert!(chili.approx_eq(&NutritionTotals::new(200.0, 20.0, 9.5, 4.8), AGGREGATE_TOLERANCE));
}

#[test]
fn test_recent_activity_limit_and_orphaned_recipe() {
    let options = DashboardOptions {
        recent_activity_limit: 6,
        ..DashboardOptions::default()
    };
    let stats = build_dashboard(&kitchen(), &reference_now(), &options);

    assert_eq!(stats.recent_activity.len(), 6);
    let orphan = &stats.recent_activity[5];
    assert_eq!(orphan.recipe_id, "rcp_gone");
    assert_eq!(orphan.recipe_name, None);
    assert_eq!(orphan.per_serving, None);
}

#[test]
fn test_recent_recipe_with_missing_ingredient_keeps_dashboard() {
    let broken_chili = chili().with_ingredient("ing_missing", 50.0);
    let snapshot = KitchenSnapshot::new(
        vec![beef(), tomato(), rice()],
        vec![broken_chili, rice_bowl()],
        history(),
    )
    .unwrap();

    let stats = build_dashboard(&snapshot, &reference_now(), &DashboardOptions::default());

    assert_eq!(stats.total_cooked, 8);
    assert_eq!(stats.current_streak_days, 3);
    assert_eq!(stats.recent_activity.len(), 5);

    let chili_cook = &stats.recent_activity[0];
    assert_eq!(chili_cook.entry_id, "ck_1");
    assert_eq!(chili_cook.recipe_name.as_deref(), Some("Chili"));
    assert_eq!(chili_cook.per_serving, None);

    let rice_cook = &stats.recent_activity[2];
    assert_eq!(rice_cook.entry_id, "ck_3");
    assert!(rice_cook.per_serving.is_some());
}

#[test]
fn test_zero_serving_recipe_follows_servings_policy() {
    let zero_serving_bowl =
        Recipe::new("rcp_rice_bowl", "Rice bowl", 0).with_ingredient("ing_rice", 250.0);
    let snapshot = KitchenSnapshot::new(
        vec![beef(), tomato(), rice()],
        vec![chili(), zero_serving_bowl],
        history(),
    )
    .unwrap();

    let rejected = build_dashboard(&snapshot, &reference_now(), &DashboardOptions::default());
    assert_eq!(rejected.recent_activity[2].entry_id, "ck_3");
    assert_eq!(rejected.recent_activity[2].per_serving, None);
    assert!(rejected.recent_activity[0].per_serving.is_some());

    let clamping = DashboardOptions {
        servings_policy: ServingsPolicy::ClampToOne,
        ..DashboardOptions::default()
    };
    let clamped = build_dashboard(&snapshot, &reference_now(), &clamping);
    let bowl = clamped.recent_activity[2].per_serving.unwrap();
    assert!(bowl.approx_eq(&NutritionTotals::new(325.0, 6.8, 70.0, 0.8), AGGREGATE_TOLERANCE));
}

#[test]
fn test_longest_streak_stops_at_reference_day() {
    // Jan 13-16 plus Jan 17 and 18 would be a six-day run if future days counted
    let mut snapshot = kitchen();
    snapshot.cooking_history.extend([
        CookingHistoryEntry::new("ck_9", "rcp_chili", utc(2025, 1, 17, 9, 0)),
        CookingHistoryEntry::new("ck_10", "rcp_chili", utc(2025, 1, 18, 9, 0)),
    ]);

    let stats = build_dashboard(&snapshot, &reference_now(), &DashboardOptions::default());

    assert_eq!(stats.total_cooked, 10);
    assert_eq!(stats.longest_streak_days, 4);
}

#[test]
fn test_empty_snapshot() {
    let stats = build_dashboard(
        &KitchenSnapshot::default(),
        &reference_now(),
        &DashboardOptions::default(),
    );

    assert_eq!(stats.total_cooked, 0);
    assert_eq!(stats.current_streak_days, 0);
    assert!(stats.most_cooked_recipe.is_none());
    assert!(stats.recent_activity.is_empty());
}

#[test]
fn test_week_window_follows_reference_time_zone() {
    // Jan 8 23:00 UTC is Jan 9 in UTC+03:00, so it enters the seven-day window
    let mut snapshot = kitchen();
    snapshot
        .cooking_history
        .push(CookingHistoryEntry::new("ck_9", "rcp_chili", utc(2025, 1, 8, 23, 0)));

    let utc_stats = build_dashboard(&snapshot, &reference_now(), &DashboardOptions::default());
    assert_eq!(utc_stats.cooked_last_7_days, 5);

    let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
    let local_stats = build_dashboard(
        &snapshot,
        &reference_now().with_timezone(&plus_three),
        &DashboardOptions::default(),
    );
    assert_eq!(local_stats.cooked_last_7_days, 6);
}
