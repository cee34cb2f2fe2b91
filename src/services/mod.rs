// ABOUTME: Domain service layer composing snapshot data with the computation core
// ABOUTME: Shapes recipe nutrition, dashboard, and stats results for any front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services read a [`crate::snapshot::KitchenSnapshot`] and delegate every
//! computation to [`crate::intelligence::NutritionAggregator`] and
//! [`crate::intelligence::CookingStreakCalculator`]. They never re-derive
//! nutrition or streak figures themselves, so the CLI and any future
//! front end report identical numbers.

/// Dashboard counters and recent activity
pub mod dashboard;

/// Recipe nutrition summaries
pub mod recipes;

/// Cooking statistics: streaks, daily counts, most-cooked recipes
pub mod stats;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::snapshot::KitchenSnapshot;

/// How often one recipe was cooked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCookCount {
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name, absent when the recipe is no longer in the snapshot
    pub recipe_name: Option<String>,
    /// Number of history entries for the recipe
    pub times_cooked: usize,
}

/// Recipes ranked by cook count, most cooked first, ties broken by recipe id
pub(crate) fn ranked_cook_counts(snapshot: &KitchenSnapshot) -> Vec<RecipeCookCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in &snapshot.cooking_history {
        *counts.entry(entry.recipe_id.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<RecipeCookCount> = counts
        .into_iter()
        .map(|(recipe_id, times_cooked)| RecipeCookCount {
            recipe_id: recipe_id.to_owned(),
            recipe_name: snapshot.recipe_name(recipe_id).map(str::to_owned),
            times_cooked,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.times_cooked
            .cmp(&a.times_cooked)
            .then_with(|| a.recipe_id.cmp(&b.recipe_id))
    });
    ranked
}
