// ABOUTME: Benchmark fixtures generating recipes, ingredients, and cooking histories
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for nutrition and streak computations.

use chrono::{DateTime, Duration, TimeZone, Utc};
use nutrition_tracker::models::{
    CookingEvent, CookingHistoryEntry, Ingredient, NutritionFacts, Recipe, RecipeIngredientLine,
};
use nutrition_tracker::snapshot::KitchenSnapshot;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset - a single weeknight recipe or a week of cooking
    Small,
    /// Medium dataset - a large recipe or a few months of cooking
    Medium,
    /// Large dataset - several years of cooking history
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 2_000,
        }
    }
}

/// Fixed base instant so results do not drift between runs
#[must_use]
pub fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[allow(clippy::cast_precision_loss)]
fn facts_for(index: usize) -> NutritionFacts {
    NutritionFacts::new(
        40.0 + ((index * 37) % 500) as f64,
        ((index * 13) % 300) as f64 / 10.0,
        ((index * 29) % 800) as f64 / 10.0,
        ((index * 7) % 400) as f64 / 10.0,
    )
}

/// Recipe lines with varied facts and quantities
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_lines(size: BatchSize) -> Vec<RecipeIngredientLine> {
    (0..size.count())
        .map(|index| {
            RecipeIngredientLine::new(
                format!("ing_{index}"),
                5.0 + ((index * 53) % 400) as f64,
                facts_for(index),
            )
        })
        .collect()
}

/// Cooking events walking back from [`base_instant`], with skipped days and repeats
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_events(size: BatchSize) -> Vec<CookingEvent> {
    let base = base_instant();
    (0..size.count())
        .map(|index| {
            let days_ago = (index - index / 5) as i64;
            let hours = ((index * 7) % 12) as i64;
            CookingEvent::new(base - Duration::days(days_ago) - Duration::hours(hours))
        })
        .collect()
}

/// A snapshot with `size` recipes of eight ingredients each and matching history
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_snapshot(size: BatchSize) -> KitchenSnapshot {
    let ingredients: Vec<Ingredient> = (0..64)
        .map(|index| Ingredient::new(format!("ing_{index}"), format!("Ingredient {index}"), facts_for(index)))
        .collect();

    let recipes: Vec<Recipe> = (0..size.count())
        .map(|index| {
            (0..8).fold(
                Recipe::new(format!("rcp_{index}"), format!("Recipe {index}"), 1 + (index % 6) as u32),
                |recipe, slot| {
                    recipe.with_ingredient(
                        format!("ing_{}", (index * 3 + slot * 11) % 64),
                        20.0 + ((index + slot) * 17 % 250) as f64,
                    )
                },
            )
        })
        .collect();

    let history = generate_events(size)
        .into_iter()
        .enumerate()
        .map(|(index, event)| {
            CookingHistoryEntry::new(
                format!("ck_{index}"),
                format!("rcp_{}", index % size.count()),
                event.cooked_at,
            )
        })
        .collect();

    KitchenSnapshot {
        ingredients,
        recipes,
        cooking_history: history,
    }
}
