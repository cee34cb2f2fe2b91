// ABOUTME: Recipe nutrition arithmetic: scale per-100g facts, sum ingredient lines, split into servings
// ABOUTME: Rounds each ingredient's contribution to one decimal before summing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregator
//!
//! Converts per-100g nutrition facts plus a quantity into absolute values,
//! sums those across a recipe's ingredient lines, and derives per-serving
//! values.
//!
//! # Rounding order
//!
//! Each ingredient contribution is rounded to one decimal place *before* the
//! contributions are summed. Summing raw values and rounding once would give
//! different displayed totals, so the per-ingredient order is kept even though
//! sub-decimal error can accumulate across many lines.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracker_core::constants::nutrition::{MIN_SERVINGS, REFERENCE_QUANTITY_GRAMS};
use tracker_core::errors::NutritionError;
use tracker_core::models::{NutritionFacts, NutritionTotals, RecipeIngredientLine};

use crate::rounding::round_one_decimal;

/// Nutrition contributed by a single recipe line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientContribution {
    /// Ingredient identifier
    pub ingredient_id: String,
    /// Quantity used, in grams
    pub quantity_grams: f64,
    /// Absolute nutrition for that quantity, rounded to one decimal
    pub nutrition: NutritionFacts,
}

/// Stateless nutrition aggregation over recipe ingredient lines
pub struct NutritionAggregator;

impl NutritionAggregator {
    /// Scale per-100g facts to an absolute quantity
    ///
    /// Each field becomes `field * quantity_grams / 100`, rounded half-up to
    /// one decimal place. Inputs are not validated; rejecting negative
    /// quantities or facts is the caller's job.
    #[must_use]
    pub fn scale_to_quantity(facts: NutritionFacts, quantity_grams: f64) -> NutritionFacts {
        facts.map(|value| round_one_decimal(value * quantity_grams / REFERENCE_QUANTITY_GRAMS))
    }

    /// Sum the scaled contribution of every line
    ///
    /// An empty slice yields all zeros. Lines with a zero quantity contribute
    /// zero. The result does not depend on line order beyond floating-point
    /// addition error.
    #[must_use]
    pub fn sum_contributions(lines: &[RecipeIngredientLine]) -> NutritionTotals {
        let totals: NutritionTotals = lines
            .iter()
            .map(|line| {
                NutritionTotals::from(Self::scale_to_quantity(
                    line.nutrition_facts,
                    line.quantity_grams,
                ))
            })
            .sum();

        debug!(line_count = lines.len(), ?totals, "Summed ingredient contributions");
        totals
    }

    /// Divide totals into `servings` portions, rounded to one decimal
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::InvalidArgument`] when `servings` is zero.
    pub fn per_serving(
        totals: NutritionTotals,
        servings: u32,
    ) -> Result<NutritionTotals, NutritionError> {
        if servings < MIN_SERVINGS {
            return Err(NutritionError::invalid_argument(
                "servings",
                format!("must be at least {MIN_SERVINGS}, got {servings}"),
            ));
        }

        let divisor = f64::from(servings);
        Ok(totals.map(|value| round_one_decimal(value / divisor)))
    }

    /// Divide totals into servings, treating fewer than one serving as one
    #[must_use]
    pub fn per_serving_clamped(totals: NutritionTotals, servings: u32) -> NutritionTotals {
        let divisor = f64::from(servings.max(MIN_SERVINGS));
        totals.map(|value| round_one_decimal(value / divisor))
    }

    /// Per-line scaled nutrition in input order
    #[must_use]
    pub fn contribution_breakdown(lines: &[RecipeIngredientLine]) -> Vec<IngredientContribution> {
        lines
            .iter()
            .map(|line| IngredientContribution {
                ingredient_id: line.ingredient_id.clone(),
                quantity_grams: line.quantity_grams,
                nutrition: Self::scale_to_quantity(line.nutrition_facts, line.quantity_grams),
            })
            .collect()
    }

    /// Combined weight of all lines in grams
    #[must_use]
    pub fn total_weight_grams(lines: &[RecipeIngredientLine]) -> f64 {
        lines.iter().map(|line| line.quantity_grams).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn chicken() -> NutritionFacts {
        NutritionFacts::new(200.0, 20.0, 10.0, 5.0)
    }

    #[test]
    fn test_scale_150_grams() {
        let scaled = NutritionAggregator::scale_to_quantity(chicken(), 150.0);
        assert_eq!(scaled, NutritionFacts::new(300.0, 30.0, 15.0, 7.5));
    }

    #[test]
    fn test_scale_zero_grams_is_zero() {
        let scaled = NutritionAggregator::scale_to_quantity(chicken(), 0.0);
        assert_eq!(scaled, NutritionFacts::zero());
    }

    #[test]
    fn test_rounding_happens_per_line() {
        // 0.04 per line rounds to 0.0 on its own; ten lines must still total 0.0
        let facts = NutritionFacts::new(4.0, 0.0, 0.0, 0.0);
        let lines: Vec<_> = (0..10)
            .map(|i| RecipeIngredientLine::new(format!("ing_{i}"), 1.0, facts))
            .collect();

        let totals = NutritionAggregator::sum_contributions(&lines);
        assert!(totals.calories.abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_servings_rejected() {
        let result = NutritionAggregator::per_serving(NutritionTotals::new(1.0, 1.0, 1.0, 1.0), 0);
        assert_eq!(result.unwrap_err().parameter(), "servings");
    }

    #[test]
    fn test_clamped_zero_servings_behaves_as_one() {
        let totals = NutritionTotals::new(400.0, 40.0, 19.0, 9.5);
        assert_eq!(NutritionAggregator::per_serving_clamped(totals, 0), totals);
    }
}
