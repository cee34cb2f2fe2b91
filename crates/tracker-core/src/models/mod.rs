// ABOUTME: Core data models for the nutrition tracker
// ABOUTME: Nutrition value types, recipes, ingredients, and cooking history records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! All records here are transient: built fresh from persisted data for one
//! computation and dropped afterwards.

/// Cooking history records and streak inputs
pub mod cooking;
/// Per-100g facts and aggregated nutrition totals
pub mod nutrition;
/// Ingredients, recipes, and joined recipe lines
pub mod recipe;

pub use cooking::{CookingEvent, CookingHistoryEntry};
pub use nutrition::{NutritionFacts, NutritionTotals};
pub use recipe::{Ingredient, Recipe, RecipeIngredient, RecipeIngredientLine};
