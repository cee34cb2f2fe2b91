// ABOUTME: Nutrition aggregation and cooking streak computation for the nutrition tracker
// ABOUTME: Pure, synchronous functions over in-memory records with no I/O or global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Intelligence
//!
//! The computational core of the tracker. Callers fetch raw records
//! (ingredients, recipes, cooking history), then pass them into these
//! functions to derive display values.
//!
//! - [`NutritionAggregator`] scales per-100g facts to a quantity, sums a
//!   recipe's ingredient lines, and divides totals into servings.
//! - [`CookingStreakCalculator`] counts consecutive cooking days ending today
//!   or yesterday.
//!
//! Every function is deterministic and safe to call from any thread.

/// Cooking streak computation over cooking event timestamps
pub mod cooking_streak;
/// Recipe nutrition aggregation
pub mod nutrition_aggregator;
/// One-decimal rounding shared by every nutrition computation
pub mod rounding;

pub use cooking_streak::{CookingStreakCalculator, StreakSummary};
pub use nutrition_aggregator::{IngredientContribution, NutritionAggregator};
pub use rounding::{format_one_decimal, round_one_decimal};
