// ABOUTME: Cooking statistics: streak summary, per-day counts, and most cooked recipes
// ABOUTME: Shares the streak calculator with the dashboard so both report the same numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::{ranked_cook_counts, RecipeCookCount};
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{CookingStreakCalculator, StreakSummary};
use crate::logging::AppLogger;
use crate::snapshot::KitchenSnapshot;

/// Stats settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// Days in the daily-count window, ending on the reference day
    pub window_days: u32,
    /// Most cooked recipes to report
    pub top_recipes_limit: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            window_days: defaults::STATS_WINDOW_DAYS,
            top_recipes_limit: defaults::TOP_RECIPES_LIMIT,
        }
    }
}

/// Number of cookings on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCookCount {
    /// Calendar day in the reference time zone
    pub date: NaiveDate,
    /// History entries on that day
    pub count: usize,
}

/// Cooking statistics as of a reference time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingStats {
    /// Current and longest streak
    pub streak: StreakSummary,
    /// One entry per day of the window, oldest first, zero-filled
    pub daily_counts: Vec<DailyCookCount>,
    /// Most cooked recipes, ties broken by recipe id
    pub top_recipes: Vec<RecipeCookCount>,
}

/// Compute cooking statistics as of `reference_now`
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` when `window_days` is zero
pub fn cooking_stats<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    reference_now: &DateTime<Tz>,
    options: &StatsOptions,
) -> AppResult<CookingStats> {
    if options.window_days == 0 {
        return Err(AppError::out_of_range("window_days must be at least 1")
            .with_details(serde_json::json!({ "parameter": "window_days" })));
    }

    let events = snapshot.cooking_events();
    let streak = CookingStreakCalculator::summarize(&events, reference_now);
    AppLogger::log_streak_computed(events.len(), streak.current_days, streak.longest_days);

    let mut top_recipes = ranked_cook_counts(snapshot);
    top_recipes.truncate(options.top_recipes_limit);

    Ok(CookingStats {
        streak,
        daily_counts: daily_counts(snapshot, reference_now, options.window_days),
        top_recipes,
    })
}

fn daily_counts<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    reference_now: &DateTime<Tz>,
    window_days: u32,
) -> Vec<DailyCookCount> {
    let tz = reference_now.timezone();
    let today = reference_now.date_naive();

    let mut window: BTreeMap<NaiveDate, usize> = (0..window_days)
        .filter_map(|offset| today.checked_sub_signed(Duration::days(i64::from(offset))))
        .map(|date| (date, 0))
        .collect();

    for entry in &snapshot.cooking_history {
        let day = entry.cooked_at.with_timezone(&tz).date_naive();
        if let Some(count) = window.get_mut(&day) {
            *count += 1;
        }
    }

    window
        .into_iter()
        .map(|(date, count)| DailyCookCount { date, count })
        .collect()
}
