// ABOUTME: Main library entry point for the nutrition tracker
// ABOUTME: Recipe nutrition, cooking streaks, and dashboard analytics over plain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Tracker
//!
//! Application layer of a nutrition tracker: recipes built from ingredients
//! with per-100g nutrition facts, a cooking history, and dashboard analytics
//! derived from both.
//!
//! ## Architecture
//!
//! - **tracker-core**: errors, models, constants
//! - **tracker-intelligence**: the pure computation core
//!   ([`intelligence::NutritionAggregator`], [`intelligence::CookingStreakCalculator`])
//! - this crate: environment configuration, logging, the snapshot loader that
//!   stands in for the data store, services that shape results, and output
//!   formatters
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use nutrition_tracker::config::ServingsPolicy;
//! use nutrition_tracker::errors::AppResult;
//! use nutrition_tracker::services::recipes::summarize_recipe;
//! use nutrition_tracker::snapshot::KitchenSnapshot;
//!
//! fn main() -> AppResult<()> {
//!     let snapshot = KitchenSnapshot::from_path("kitchen.json")?;
//!     let summary = summarize_recipe(&snapshot, "rcp_chili", ServingsPolicy::Reject)?;
//!     println!("{} kcal per serving", summary.per_serving.calories);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants re-exported from tracker-core
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Output format abstraction for service results
pub mod formatters;

/// Nutrition aggregation and streak computation re-exported from tracker-intelligence
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Data models re-exported from tracker-core
pub mod models;

/// Domain services composing snapshot data with the computation core
pub mod services;

/// JSON snapshot of ingredients, recipes, and cooking history
pub mod snapshot;
