// ABOUTME: Data model re-exports from tracker-core
// ABOUTME: Ingredients, recipes, cooking history, and nutrition value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use tracker_core::models::*;
