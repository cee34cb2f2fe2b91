// ABOUTME: Kitchen snapshot fixtures used across service and CLI-facing tests
// ABOUTME: Values are chosen so every expected figure can be worked out by hand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, TimeZone, Utc};
use nutrition_tracker::models::{
    CookingEvent, CookingHistoryEntry, Ingredient, NutritionFacts, Recipe, RecipeIngredientLine,
};
use nutrition_tracker::snapshot::KitchenSnapshot;

/// Reference instant for every fixture: 2025-01-15 12:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn beef() -> Ingredient {
    Ingredient::new("ing_beef", "Ground beef", NutritionFacts::new(200.0, 20.0, 10.0, 5.0))
}

pub fn tomato() -> Ingredient {
    Ingredient::new("ing_tomato", "Tomato", NutritionFacts::new(50.0, 5.0, 2.0, 1.0))
}

pub fn rice() -> Ingredient {
    Ingredient::new("ing_rice", "Rice", NutritionFacts::new(130.0, 2.7, 28.0, 0.3))
}

/// 150 g beef + 200 g tomato, two servings
pub fn chili() -> Recipe {
    Recipe::new("rcp_chili", "Chili", 2)
        .with_description("Beef and tomato chili")
        .with_ingredient("ing_beef", 150.0)
        .with_ingredient("ing_tomato", 200.0)
}

/// 250 g rice, one serving
pub fn rice_bowl() -> Recipe {
    Recipe::new("rcp_rice_bowl", "Rice bowl", 1).with_ingredient("ing_rice", 250.0)
}

/// The two-line chili as joined recipe lines
pub fn chili_lines() -> Vec<RecipeIngredientLine> {
    vec![
        RecipeIngredientLine::from_ingredient(&beef(), 150.0),
        RecipeIngredientLine::from_ingredient(&tomato(), 200.0),
    ]
}

/// Cooking history relative to [`reference_now`]
///
/// Days with cooking: Jan 7, 8, 9, 10, 13, 14, 15 and a future Jan 16.
/// `ck_6` references a recipe that is no longer in the snapshot.
pub fn history() -> Vec<CookingHistoryEntry> {
    vec![
        CookingHistoryEntry::new("ck_1", "rcp_chili", utc(2025, 1, 15, 10, 0)),
        CookingHistoryEntry::new("ck_2", "rcp_chili", utc(2025, 1, 14, 19, 0)),
        CookingHistoryEntry::new("ck_3", "rcp_rice_bowl", utc(2025, 1, 13, 12, 30)),
        CookingHistoryEntry::new("ck_4", "rcp_chili", utc(2025, 1, 10, 8, 0)),
        CookingHistoryEntry::new("ck_5", "rcp_rice_bowl", utc(2025, 1, 9, 12, 0)),
        CookingHistoryEntry::new("ck_6", "rcp_gone", utc(2025, 1, 8, 12, 0)),
        CookingHistoryEntry::new("ck_7", "rcp_chili", utc(2025, 1, 16, 9, 0)),
        CookingHistoryEntry::new("ck_8", "rcp_rice_bowl", utc(2025, 1, 7, 18, 0)),
    ]
}

pub fn kitchen() -> KitchenSnapshot {
    KitchenSnapshot::new(
        vec![beef(), tomato(), rice()],
        vec![chili(), rice_bowl()],
        history(),
    )
    .unwrap()
}

/// Events at `reference_now` minus each offset in days
pub fn events_days_ago(offsets: &[i64]) -> Vec<CookingEvent> {
    let now = reference_now();
    offsets
        .iter()
        .map(|days| CookingEvent::new(now - chrono::Duration::days(*days)))
        .collect()
}

pub const KITCHEN_JSON: &str = r#"{
  "ingredients": [
    { "id": "ing_beef", "name": "Ground beef", "nutrition": { "calories": 200.0, "protein": 20.0, "carbs": 10.0, "fat": 5.0 } },
    { "id": "ing_tomato", "name": "Tomato", "nutrition": { "calories": 50.0, "protein": 5.0, "carbs": 2.0, "fat": 1.0 } }
  ],
  "recipes": [
    {
      "id": "rcp_chili",
      "name": "Chili",
      "servings": 2,
      "ingredients": [
        { "ingredient_id": "ing_beef", "quantity_grams": 150.0 },
        { "ingredient_id": "ing_tomato", "quantity_grams": 200.0 }
      ]
    }
  ],
  "cooking_history": [
    { "id": "ck_1", "recipe_id": "rcp_chili", "cooked_at": "2025-01-15T10:00:00Z" },
    { "id": "ck_2", "recipe_id": "rcp_chili", "cooked_at": "2025-01-14T19:00:00Z" }
  ]
}"#;
