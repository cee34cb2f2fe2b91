// ABOUTME: Cooking history records and the timestamp-only events streaks are computed from
// ABOUTME: Defines CookingHistoryEntry and CookingEvent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A moment a recipe was prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CookingEvent {
    /// When the recipe was cooked
    pub cooked_at: DateTime<Utc>,
}

impl CookingEvent {
    /// Create an event at the given instant
    #[must_use]
    pub const fn new(cooked_at: DateTime<Utc>) -> Self {
        Self { cooked_at }
    }
}

impl From<DateTime<Utc>> for CookingEvent {
    fn from(cooked_at: DateTime<Utc>) -> Self {
        Self::new(cooked_at)
    }
}

/// Persisted cooking history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingHistoryEntry {
    /// Unique entry identifier
    pub id: String,
    /// Recipe that was cooked
    pub recipe_id: String,
    /// When it was cooked
    pub cooked_at: DateTime<Utc>,
}

impl CookingHistoryEntry {
    /// Create a history entry
    #[must_use]
    pub fn new(id: impl Into<String>, recipe_id: impl Into<String>, cooked_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            recipe_id: recipe_id.into(),
            cooked_at,
        }
    }

    /// The timestamp-only view used by streak computation
    #[must_use]
    pub const fn event(&self) -> CookingEvent {
        CookingEvent::new(self.cooked_at)
    }
}
