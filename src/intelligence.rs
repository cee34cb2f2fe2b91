// ABOUTME: Intelligence module re-exports from tracker-intelligence crate
// ABOUTME: Nutrition aggregation, cooking streaks, and one-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the pure computation core so services and binaries import it
//! through one path (e.g. `crate::intelligence::NutritionAggregator`).

pub use tracker_intelligence::*;

// Submodules for path-based access (e.g. crate::intelligence::cooking_streak::StreakSummary)
pub use tracker_intelligence::{cooking_streak, nutrition_aggregator, rounding};
