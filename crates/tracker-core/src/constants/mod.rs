// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for nutrition arithmetic, configuration, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Nutrition arithmetic constants
pub mod nutrition {
    /// Reference quantity that ingredient facts are normalized to (grams)
    pub const REFERENCE_QUANTITY_GRAMS: f64 = 100.0;
    /// Scale factor for one-decimal rounding
    pub const ONE_DECIMAL_SCALE: f64 = 10.0;
    /// Tolerance used when comparing aggregated values
    pub const AGGREGATE_TOLERANCE: f64 = 1e-9;
    /// Smallest serving count accepted by per-serving division
    pub const MIN_SERVINGS: u32 = 1;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Application service name
    pub const NUTRITION_TRACKER: &str = "nutrition-tracker";
}

/// Environment variable names read by the application layer
pub mod env_config {
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Day boundary used to cut calendar days (`local`, `utc`, `+HH:MM`)
    pub const DAY_BOUNDARY: &str = "TRACKER_DAY_BOUNDARY";
    /// Behaviour when a recipe declares zero servings
    pub const SERVINGS_POLICY: &str = "TRACKER_SERVINGS_POLICY";
    /// Number of recent cooking entries shown on the dashboard
    pub const RECENT_ACTIVITY_LIMIT: &str = "TRACKER_RECENT_ACTIVITY_LIMIT";
    /// Window of the stats daily-count chart
    pub const STATS_WINDOW_DAYS: &str = "TRACKER_STATS_WINDOW_DAYS";
    /// Number of most-cooked recipes reported by stats
    pub const TOP_RECIPES_LIMIT: &str = "TRACKER_TOP_RECIPES_LIMIT";
}

/// Default values for tunable settings
pub mod defaults {
    /// Recent cooking entries on the dashboard
    pub const RECENT_ACTIVITY_LIMIT: usize = 5;
    /// Days covered by the stats daily-count chart
    pub const STATS_WINDOW_DAYS: u32 = 7;
    /// Most-cooked recipes reported by stats
    pub const TOP_RECIPES_LIMIT: usize = 5;
    /// Days counted as "this week" on the dashboard
    pub const DASHBOARD_WEEK_DAYS: i64 = 7;
}

/// Hard limits on configuration values
pub mod limits {
    /// Longest stats window accepted (one leap year)
    pub const MAX_STATS_WINDOW_DAYS: u32 = 366;
}
