// ABOUTME: Macronutrient value types shared by ingredients, recipes, and servings
// ABOUTME: NutritionFacts (per 100g, source data) and NutritionTotals (derived aggregates)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Macronutrient facts for an ingredient, normalized to 100 grams
///
/// Values are non-negative. Calories are kcal, the other fields grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionFacts {
    /// Create facts from the four macro values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Facts with every field set to zero
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Apply `f` to every macro field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.calories), f(self.protein), f(self.carbs), f(self.fat))
    }

    /// True when no field is negative or NaN
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| *v >= 0.0)
    }
}

/// Aggregated nutrition for a whole recipe or one serving
///
/// Always derived from [`NutritionFacts`], never a source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionTotals {
    /// Create totals from the four macro values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Totals with every field set to zero
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Apply `f` to every macro field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.calories), f(self.protein), f(self.carbs), f(self.fat))
    }

    /// Field-wise comparison within `tolerance`
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.calories - other.calories).abs() <= tolerance
            && (self.protein - other.protein).abs() <= tolerance
            && (self.carbs - other.carbs).abs() <= tolerance
            && (self.fat - other.fat).abs() <= tolerance
    }
}

impl From<NutritionFacts> for NutritionTotals {
    fn from(facts: NutritionFacts) -> Self {
        Self::new(facts.calories, facts.protein, facts.carbs, facts.fat)
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.calories + other.calories,
            self.protein + other.protein,
            self.carbs + other.carbs,
            self.fat + other.fat,
        )
    }
}

impl Sum for NutritionTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_sum_field_wise() {
        let total: NutritionTotals = [
            NutritionTotals::new(300.0, 30.0, 15.0, 7.5),
            NutritionTotals::new(100.0, 10.0, 4.0, 2.0),
        ]
        .into_iter()
        .sum();

        assert!(total.approx_eq(&NutritionTotals::new(400.0, 40.0, 19.0, 9.5), 1e-9));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NutritionTotals = std::iter::empty().sum();
        assert_eq!(total, NutritionTotals::zero());
    }

    #[test]
    fn test_facts_validity() {
        assert!(NutritionFacts::new(200.0, 20.0, 10.0, 5.0).is_valid());
        assert!(NutritionFacts::zero().is_valid());
        assert!(!NutritionFacts::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!NutritionFacts::new(f64::NAN, 0.0, 0.0, 0.0).is_valid());
    }
}
