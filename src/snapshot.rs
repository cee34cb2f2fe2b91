// ABOUTME: JSON snapshot of ingredients, recipes, and cooking history standing in for the data store
// ABOUTME: Loads, validates, and joins records into the shapes the computation core consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Kitchen snapshot loading
//!
//! A snapshot is a single JSON document:
//!
//! ```json
//! {
//!   "ingredients": [{ "id": "ing_rice", "name": "Rice", "nutrition": { "calories": 130.0, "protein": 2.7, "carbs": 28.0, "fat": 0.3 } }],
//!   "recipes": [{ "id": "rcp_bowl", "name": "Rice bowl", "servings": 2, "ingredients": [{ "ingredient_id": "ing_rice", "quantity_grams": 250.0 }] }],
//!   "cooking_history": [{ "id": "ck_1", "recipe_id": "rcp_bowl", "cooked_at": "2025-01-15T18:30:00Z" }]
//! }
//! ```
//!
//! Every collection defaults to empty when absent.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{CookingEvent, CookingHistoryEntry, Ingredient, Recipe, RecipeIngredientLine};

/// In-memory copy of every record the tracker reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenSnapshot {
    /// Ingredient catalog
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipes referencing catalog ingredients
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Every recorded cooking of a recipe
    #[serde(default)]
    pub cooking_history: Vec<CookingHistoryEntry>,
}

impl KitchenSnapshot {
    /// Build a snapshot from already-loaded records
    ///
    /// # Errors
    ///
    /// Returns an error if the records fail validation
    pub fn new(
        ingredients: Vec<Ingredient>,
        recipes: Vec<Recipe>,
        cooking_history: Vec<CookingHistoryEntry>,
    ) -> AppResult<Self> {
        let snapshot = Self {
            ingredients,
            recipes,
            cooking_history,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read and validate a snapshot file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, an invalid-format
    /// error if it is not a valid snapshot document, or a validation error
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read snapshot {}: {e}", path.display()))
                .with_source(e)
        })?;

        let snapshot = Self::from_json_str(&contents)?;
        AppLogger::log_snapshot_loaded(
            &path.display().to_string(),
            snapshot.ingredients.len(),
            snapshot.recipes.len(),
            snapshot.cooking_history.len(),
        );
        Ok(snapshot)
    }

    /// Parse and validate a snapshot document
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error for malformed JSON or a validation error
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check identifier uniqueness and value ranges
    ///
    /// Recipe references to unknown ingredients are not checked here; they
    /// surface when the recipe's lines are joined.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` for a duplicated id and
    /// `INVALID_INPUT` for negative or non-numeric quantities and facts
    pub fn validate(&self) -> AppResult<()> {
        ensure_unique("Ingredient", self.ingredients.iter().map(|i| i.id.as_str()))?;
        ensure_unique("Recipe", self.recipes.iter().map(|r| r.id.as_str()))?;
        ensure_unique(
            "Cooking history entry",
            self.cooking_history.iter().map(|e| e.id.as_str()),
        )?;

        if let Some(ingredient) = self.ingredients.iter().find(|i| !i.nutrition.is_valid()) {
            return Err(AppError::invalid_input(format!(
                "Ingredient {} has negative or non-numeric nutrition facts",
                ingredient.id
            ))
            .with_resource_id(ingredient.id.clone()));
        }

        for recipe in &self.recipes {
            if let Some(line) = recipe
                .ingredients
                .iter()
                .find(|line| !line.quantity_grams.is_finite() || line.quantity_grams < 0.0)
            {
                return Err(AppError::invalid_input(format!(
                    "Recipe {} uses an invalid quantity of {}: {}",
                    recipe.id, line.ingredient_id, line.quantity_grams
                ))
                .with_resource_id(recipe.id.clone()));
            }
        }

        Ok(())
    }

    /// Look up an ingredient by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no ingredient has this id
    pub fn ingredient(&self, ingredient_id: &str) -> AppResult<&Ingredient> {
        self.ingredients
            .iter()
            .find(|i| i.id == ingredient_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Ingredient {ingredient_id}"))
                    .with_resource_id(ingredient_id)
            })
    }

    /// Look up a recipe by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no recipe has this id
    pub fn recipe(&self, recipe_id: &str) -> AppResult<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Recipe {recipe_id}")).with_resource_id(recipe_id)
            })
    }

    /// Join a recipe's quantities with catalog nutrition facts, in recipe order
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` naming the first unknown ingredient
    pub fn recipe_lines(&self, recipe: &Recipe) -> AppResult<Vec<RecipeIngredientLine>> {
        recipe
            .ingredients
            .iter()
            .map(|item| {
                self.ingredient(&item.ingredient_id)
                    .map(|ingredient| {
                        RecipeIngredientLine::from_ingredient(ingredient, item.quantity_grams)
                    })
                    .map_err(|e| {
                        e.with_details(serde_json::json!({ "recipe_id": recipe.id }))
                    })
            })
            .collect()
    }

    /// Every cooking event, in history order
    #[must_use]
    pub fn cooking_events(&self) -> Vec<CookingEvent> {
        self.cooking_history
            .iter()
            .map(CookingHistoryEntry::event)
            .collect()
    }

    /// Display name for a recipe id, if the recipe exists
    #[must_use]
    pub fn recipe_name(&self, recipe_id: &str) -> Option<&str> {
        self.recipes
            .iter()
            .find(|r| r.id == recipe_id)
            .map(|r| r.name.as_str())
    }

    /// Number of history entries whose recipe is missing from the snapshot
    #[must_use]
    pub fn orphaned_history_count(&self) -> usize {
        let known: HashSet<&str> = self.recipes.iter().map(|r| r.id.as_str()).collect();
        let orphaned = self
            .cooking_history
            .iter()
            .filter(|e| !known.contains(e.recipe_id.as_str()))
            .count();
        if orphaned > 0 {
            debug!(orphaned, "History entries without a matching recipe");
        }
        orphaned
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::already_exists(format!("{kind} {id}")).with_resource_id(id));
        }
    }
    Ok(())
}
