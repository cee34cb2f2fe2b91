// ABOUTME: Integration tests for recipe nutrition summaries
// ABOUTME: Exercises snapshot joins, servings policies, and batch summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod helpers;

use helpers::fixtures::{beef, history, kitchen, rice, tomato};
use nutrition_tracker::config::ServingsPolicy;
use nutrition_tracker::constants::nutrition::AGGREGATE_TOLERANCE;
use nutrition_tracker::errors::ErrorCode;
use nutrition_tracker::models::{NutritionFacts, NutritionTotals, Recipe};
use nutrition_tracker::services::recipes::{summarize_all, summarize_recipe};
use nutrition_tracker::snapshot::KitchenSnapshot;

fn with_zero_serving_recipe() -> KitchenSnapshot {
    KitchenSnapshot::new(
        vec![beef(), tomato(), rice()],
        vec![Recipe::new("rcp_party", "Party chili", 0).with_ingredient("ing_beef", 1000.0)],
        history(),
    )
    .unwrap()
}

#[test]
fn test_chili_summary() {
    let summary = summarize_recipe(&kitchen(), "rcp_chili", ServingsPolicy::Reject).unwrap();

    assert_eq!(summary.recipe_id, "rcp_chili");
    assert_eq!(summary.name, "Chili");
    assert_eq!(summary.servings, 2);
    assert!((summary.total_weight_grams - 350.0).abs() < AGGREGATE_TOLERANCE);
    assert!(summary
        .totals
        .approx_eq(&NutritionTotals::new(400.0, 40.0, 19.0, 9.5), AGGREGATE_TOLERANCE));
    assert!(summary
        .per_serving
        .approx_eq(&NutritionTotals::new(200.0, 20.0, 9.5, 4.8), AGGREGATE_TOLERANCE));
    assert_eq!(summary.ingredients.len(), 2);
}

#[test]
fn test_single_ingredient_rounding() {
    let summary = summarize_recipe(&kitchen(), "rcp_rice_bowl", ServingsPolicy::Reject).unwrap();

    assert_eq!(
        summary.ingredients[0].nutrition,
        NutritionFacts::new(325.0, 6.8, 70.0, 0.8)
    );
    assert!(summary.per_serving.approx_eq(&summary.totals, AGGREGATE_TOLERANCE));
}

#[test]
fn test_unknown_recipe() {
    let error = summarize_recipe(&kitchen(), "rcp_missing", ServingsPolicy::Reject).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.resource_id.as_deref(), Some("rcp_missing"));
}

#[test]
fn test_unknown_ingredient() {
    let snapshot = KitchenSnapshot::new(
        vec![beef()],
        vec![Recipe::new("rcp_stew", "Stew", 4)
            .with_ingredient("ing_beef", 500.0)
            .with_ingredient("ing_carrot", 200.0)],
        Vec::new(),
    )
    .unwrap();

    let error = summarize_recipe(&snapshot, "rcp_stew", ServingsPolicy::Reject).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.resource_id.as_deref(), Some("ing_carrot"));
    assert!(error.message.contains("ing_carrot"));
}

#[test]
fn test_zero_servings_rejected() {
    let error = summarize_recipe(&with_zero_serving_recipe(), "rcp_party", ServingsPolicy::Reject)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.context.resource_id.as_deref(), Some("rcp_party"));
}

#[test]
fn test_zero_servings_clamped() {
    let summary = summarize_recipe(
        &with_zero_serving_recipe(),
        "rcp_party",
        ServingsPolicy::ClampToOne,
    )
    .unwrap();

    assert_eq!(summary.servings, 0);
    assert_eq!(summary.per_serving, summary.totals);
    assert!((summary.totals.calories - 2000.0).abs() < AGGREGATE_TOLERANCE);
}

#[test]
fn test_recipe_without_ingredients() {
    let snapshot =
        KitchenSnapshot::new(Vec::new(), vec![Recipe::new("rcp_air", "Air", 1)], Vec::new())
            .unwrap();
    let summary = summarize_recipe(&snapshot, "rcp_air", ServingsPolicy::Reject).unwrap();

    assert_eq!(summary.totals, NutritionTotals::zero());
    assert!(summary.ingredients.is_empty());
}

#[test]
fn test_summarize_all_keeps_snapshot_order() {
    let summaries = summarize_all(&kitchen(), ServingsPolicy::Reject).unwrap();
    let ids: Vec<&str> = summaries.iter().map(|s| s.recipe_id.as_str()).collect();
    assert_eq!(ids, ["rcp_chili", "rcp_rice_bowl"]);
}

#[test]
fn test_summarize_all_propagates_failures() {
    let error = summarize_all(&with_zero_serving_recipe(), ServingsPolicy::Reject).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}
