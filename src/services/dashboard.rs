// ABOUTME: Dashboard counters, streaks, and recent cooking activity
// ABOUTME: Streak figures come from the shared cooking streak calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::recipes::summarize_recipe;
use super::{ranked_cook_counts, RecipeCookCount};
use crate::config::ServingsPolicy;
use crate::constants::defaults;
use crate::intelligence::CookingStreakCalculator;
use crate::logging::AppLogger;
use crate::models::{CookingHistoryEntry, NutritionTotals};
use crate::snapshot::KitchenSnapshot;

/// Dashboard settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Number of recent cooking entries to report
    pub recent_activity_limit: usize,
    /// Zero-servings handling for recent-activity nutrition
    pub servings_policy: ServingsPolicy,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            recent_activity_limit: defaults::RECENT_ACTIVITY_LIMIT,
            servings_policy: ServingsPolicy::default(),
        }
    }
}

/// One recent cooking, newest first on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentCook {
    /// History entry identifier
    pub entry_id: String,
    /// Recipe identifier
    pub recipe_id: String,
    /// Recipe name, absent when the recipe is no longer in the snapshot
    pub recipe_name: Option<String>,
    /// When it was cooked
    pub cooked_at: DateTime<Utc>,
    /// Nutrition of one serving, absent when the recipe is no longer in the
    /// snapshot or its nutrition cannot be computed
    pub per_serving: Option<NutritionTotals>,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Recipes in the snapshot
    pub total_recipes: usize,
    /// Ingredients in the catalog
    pub total_ingredients: usize,
    /// Cooking history entries
    pub total_cooked: usize,
    /// Current streak in days
    pub current_streak_days: u32,
    /// Longest streak in days, counting only days up to the reference day
    pub longest_streak_days: u32,
    /// History entries on the reference day or the six days before it
    pub cooked_last_7_days: usize,
    /// Most cooked recipe, ties broken by recipe id
    pub most_cooked_recipe: Option<RecipeCookCount>,
    /// Latest cookings up to the reference time, newest first
    pub recent_activity: Vec<RecentCook>,
}

/// Build dashboard statistics as of `reference_now`
///
/// Calendar days are cut in `reference_now`'s time zone. Entries after
/// `reference_now` count toward totals but never toward the last-7-days
/// count or recent activity. A recently cooked recipe whose nutrition cannot
/// be computed (a missing ingredient, or zero servings under
/// [`ServingsPolicy::Reject`]) is reported without per-serving nutrition.
#[must_use]
pub fn build_dashboard<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    reference_now: &DateTime<Tz>,
    options: &DashboardOptions,
) -> DashboardStats {
    let events = snapshot.cooking_events();
    let summary = CookingStreakCalculator::summarize(&events, reference_now);
    AppLogger::log_streak_computed(events.len(), summary.current_days, summary.longest_days);

    let orphaned = snapshot.orphaned_history_count();
    if orphaned > 0 {
        AppLogger::log_orphaned_history(orphaned);
    }

    let tz = reference_now.timezone();
    let today = reference_now.date_naive();
    let week_start = today
        .checked_sub_signed(Duration::days(defaults::DASHBOARD_WEEK_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);
    let now_utc = reference_now.with_timezone(&Utc);

    let cooked_last_7_days = snapshot
        .cooking_history
        .iter()
        .filter(|entry| {
            let day = entry.cooked_at.with_timezone(&tz).date_naive();
            day >= week_start && day <= today
        })
        .count();

    let mut past: Vec<&CookingHistoryEntry> = snapshot
        .cooking_history
        .iter()
        .filter(|entry| entry.cooked_at <= now_utc)
        .collect();
    past.sort_by(|a, b| b.cooked_at.cmp(&a.cooked_at).then_with(|| a.id.cmp(&b.id)));

    let recent_activity = past
        .into_iter()
        .take(options.recent_activity_limit)
        .map(|entry| recent_cook(snapshot, entry, options.servings_policy))
        .collect();

    DashboardStats {
        total_recipes: snapshot.recipes.len(),
        total_ingredients: snapshot.ingredients.len(),
        total_cooked: snapshot.cooking_history.len(),
        current_streak_days: summary.current_days,
        longest_streak_days: summary.longest_days,
        cooked_last_7_days,
        most_cooked_recipe: ranked_cook_counts(snapshot).into_iter().next(),
        recent_activity,
    }
}

fn recent_cook(
    snapshot: &KitchenSnapshot,
    entry: &CookingHistoryEntry,
    policy: ServingsPolicy,
) -> RecentCook {
    let recipe_name = snapshot.recipe_name(&entry.recipe_id).map(str::to_owned);
    let per_serving = if recipe_name.is_some() {
        match summarize_recipe(snapshot, &entry.recipe_id, policy) {
            Ok(summary) => Some(summary.per_serving),
            Err(e) => {
                AppLogger::log_recent_nutrition_unavailable(&entry.id, &entry.recipe_id, &e);
                None
            }
        }
    } else {
        None
    };

    RecentCook {
        entry_id: entry.id.clone(),
        recipe_id: entry.recipe_id.clone(),
        recipe_name,
        cooked_at: entry.cooked_at,
        per_serving,
    }
}
