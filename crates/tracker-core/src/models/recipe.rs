// ABOUTME: Data models for ingredients, recipes, and joined recipe ingredient lines
// ABOUTME: Defines Ingredient, Recipe, RecipeIngredient, and RecipeIngredientLine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionFacts;

/// Ingredient record with its canonical per-100g nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: String,
    /// Human-readable ingredient name
    pub name: String,
    /// Nutrition facts per 100 grams
    pub nutrition: NutritionFacts,
}

impl Ingredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, nutrition: NutritionFacts) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nutrition,
        }
    }
}

/// Quantity of one ingredient used by a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Referenced ingredient identifier
    pub ingredient_id: String,
    /// Quantity in grams
    pub quantity_grams: f64,
}

impl RecipeIngredient {
    /// Create a recipe ingredient reference
    #[must_use]
    pub fn new(ingredient_id: impl Into<String>, quantity_grams: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity_grams,
        }
    }
}

/// A recipe with the quantities of the ingredients it uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Recipe description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of servings this recipe makes
    pub servings: u32,
    /// Ingredient quantities
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Create a new recipe with no ingredients
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an ingredient quantity
    #[must_use]
    pub fn with_ingredient(mut self, ingredient_id: impl Into<String>, quantity_grams: f64) -> Self {
        self.ingredients
            .push(RecipeIngredient::new(ingredient_id, quantity_grams));
        self
    }
}

/// One ingredient's contribution to a recipe: quantity joined with facts
///
/// Built by the data-access layer for the duration of a single computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Ingredient identifier
    pub ingredient_id: String,
    /// Quantity in grams
    pub quantity_grams: f64,
    /// Ingredient nutrition per 100 grams
    pub nutrition_facts: NutritionFacts,
}

impl RecipeIngredientLine {
    /// Create a line from its parts
    #[must_use]
    pub fn new(
        ingredient_id: impl Into<String>,
        quantity_grams: f64,
        nutrition_facts: NutritionFacts,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity_grams,
            nutrition_facts,
        }
    }

    /// Join an ingredient record with the quantity a recipe uses
    #[must_use]
    pub fn from_ingredient(ingredient: &Ingredient, quantity_grams: f64) -> Self {
        Self::new(ingredient.id.clone(), quantity_grams, ingredient.nutrition)
    }
}
