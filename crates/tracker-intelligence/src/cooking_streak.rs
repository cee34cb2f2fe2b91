// ABOUTME: Consecutive-day cooking streak computation with a one-day grace period
// ABOUTME: Reduces cooking timestamps to calendar days in the caller's time zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cooking Streak Calculator
//!
//! A streak is the number of consecutive calendar days, ending today or
//! yesterday, with at least one cooking event. Ending yesterday still counts
//! (the grace period): a streak only resets once a full day passes without
//! cooking.
//!
//! Calendar days are cut in the time zone of the `reference_now` argument, so
//! the caller decides where midnight is. Every consumer (dashboard, stats)
//! goes through this module rather than re-deriving streaks from raw
//! timestamps.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use tracker_core::models::CookingEvent;

/// Current and historical streak figures for one set of events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive cooking days ending today or yesterday
    pub current_days: u32,
    /// Longest run of consecutive cooking days up to the reference day
    pub longest_days: u32,
    /// Most recent calendar day with a cooking event
    pub last_cooked_on: Option<NaiveDate>,
    /// Whether something was cooked on the reference day
    pub cooked_today: bool,
}

/// Stateless streak computation over cooking events
pub struct CookingStreakCalculator;

impl CookingStreakCalculator {
    /// Unique calendar days with at least one event, cut in `tz`
    #[must_use]
    pub fn unique_cooking_dates<Tz: TimeZone>(events: &[CookingEvent], tz: &Tz) -> BTreeSet<NaiveDate> {
        events
            .iter()
            .map(|event| event.cooked_at.with_timezone(tz).date_naive())
            .collect()
    }

    /// Consecutive cooking days ending today or yesterday
    ///
    /// Returns 0 when neither today nor yesterday (relative to
    /// `reference_now`, in its own time zone) has an event. Several events on
    /// the same day count once. Events dated after `reference_now`'s day are
    /// ignored.
    #[must_use]
    pub fn current_streak<Tz: TimeZone>(events: &[CookingEvent], reference_now: &DateTime<Tz>) -> u32 {
        let dates = Self::unique_cooking_dates(events, &reference_now.timezone());
        let today = reference_now.date_naive();
        let streak = Self::streak_ending_at(&dates, today);

        debug!(
            event_count = events.len(),
            unique_days = dates.len(),
            %today,
            streak,
            "Computed current cooking streak"
        );
        streak
    }

    /// Longest run of consecutive cooking days, cut in `tz`
    ///
    /// Every event counts, including any dated in the future. Use
    /// [`Self::summarize`] for a figure bounded by a reference day.
    #[must_use]
    pub fn longest_streak<Tz: TimeZone>(events: &[CookingEvent], tz: &Tz) -> u32 {
        Self::longest_run(&Self::unique_cooking_dates(events, tz))
    }

    /// Current streak, longest streak, and last cooking day in one pass
    #[must_use]
    pub fn summarize<Tz: TimeZone>(events: &[CookingEvent], reference_now: &DateTime<Tz>) -> StreakSummary {
        let dates = Self::unique_cooking_dates(events, &reference_now.timezone());
        let today = reference_now.date_naive();

        StreakSummary {
            current_days: Self::streak_ending_at(&dates, today),
            longest_days: Self::longest_run(dates.range(..=today)),
            last_cooked_on: dates.range(..=today).next_back().copied(),
            cooked_today: dates.contains(&today),
        }
    }

    /// Walk unique dates newest-first from today, or yesterday when today is empty
    fn streak_ending_at(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        let Some(yesterday) = today.pred_opt() else {
            return u32::from(dates.contains(&today));
        };

        let mut cursor = if dates.contains(&today) {
            today
        } else if dates.contains(&yesterday) {
            yesterday
        } else {
            return 0;
        };

        let mut streak = 0u32;
        for date in dates.range(..=cursor).rev() {
            if *date != cursor {
                break;
            }
            streak += 1;
            match cursor.pred_opt() {
                Some(previous) => cursor = previous,
                None => break,
            }
        }
        streak
    }

    /// Longest run of consecutive dates in ascending order
    fn longest_run<'a>(dates: impl IntoIterator<Item = &'a NaiveDate>) -> u32 {
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut previous: Option<NaiveDate> = None;

        for date in dates {
            run = match previous.and_then(|p| p.succ_opt()) {
                Some(expected) if expected == *date => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(*date);
        }
        longest
    }
}
