// ABOUTME: Recipe nutrition summaries built from snapshot records
// ABOUTME: Joins ingredient facts, aggregates totals, and splits them into servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ServingsPolicy;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{IngredientContribution, NutritionAggregator};
use crate::logging::AppLogger;
use crate::models::{NutritionTotals, Recipe};
use crate::snapshot::KitchenSnapshot;

/// Nutrition of one recipe, whole and per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutritionSummary {
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name
    pub name: String,
    /// Servings as declared on the recipe
    pub servings: u32,
    /// Combined ingredient weight in grams
    pub total_weight_grams: f64,
    /// Whole-recipe totals, each ingredient rounded before summing
    pub totals: NutritionTotals,
    /// Totals divided by servings, rounded to one decimal
    pub per_serving: NutritionTotals,
    /// Per-ingredient contributions in recipe order
    pub ingredients: Vec<IngredientContribution>,
}

/// Summarize the nutrition of a recipe by id
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` for an unknown recipe or ingredient, and
/// `VALUE_OUT_OF_RANGE` for a zero-serving recipe under
/// [`ServingsPolicy::Reject`]
pub fn summarize_recipe(
    snapshot: &KitchenSnapshot,
    recipe_id: &str,
    policy: ServingsPolicy,
) -> AppResult<RecipeNutritionSummary> {
    let recipe = snapshot.recipe(recipe_id)?;
    summarize(snapshot, recipe, policy)
}

/// Summarize every recipe in the snapshot, in snapshot order
///
/// Recipes are summarized in parallel. The first failing recipe's error is
/// returned.
///
/// # Errors
///
/// Same as [`summarize_recipe`]
pub fn summarize_all(
    snapshot: &KitchenSnapshot,
    policy: ServingsPolicy,
) -> AppResult<Vec<RecipeNutritionSummary>> {
    snapshot
        .recipes
        .par_iter()
        .map(|recipe| summarize(snapshot, recipe, policy))
        .collect()
}

fn summarize(
    snapshot: &KitchenSnapshot,
    recipe: &Recipe,
    policy: ServingsPolicy,
) -> AppResult<RecipeNutritionSummary> {
    let lines = snapshot.recipe_lines(recipe)?;
    let totals = NutritionAggregator::sum_contributions(&lines);

    let per_serving = match policy {
        ServingsPolicy::Reject => NutritionAggregator::per_serving(totals, recipe.servings)
            .map_err(|e| AppError::from(e).with_resource_id(recipe.id.clone()))?,
        ServingsPolicy::ClampToOne => {
            if recipe.servings == 0 {
                AppLogger::log_servings_clamped(&recipe.id, recipe.servings);
            }
            NutritionAggregator::per_serving_clamped(totals, recipe.servings)
        }
    };

    AppLogger::log_nutrition_computed(&recipe.id, lines.len(), recipe.servings, totals.calories);

    Ok(RecipeNutritionSummary {
        recipe_id: recipe.id.clone(),
        name: recipe.name.clone(),
        servings: recipe.servings,
        total_weight_grams: NutritionAggregator::total_weight_grams(&lines),
        totals,
        per_serving,
        ingredients: NutritionAggregator::contribution_breakdown(&lines),
    })
}
