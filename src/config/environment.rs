// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses day boundary, servings policy, and dashboard/stats limits from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `ENVIRONMENT` | `development` |
//! | `TRACKER_DAY_BOUNDARY` | `local` |
//! | `TRACKER_SERVINGS_POLICY` | `reject` |
//! | `TRACKER_RECENT_ACTIVITY_LIMIT` | `5` |
//! | `TRACKER_STATS_WINDOW_DAYS` | `7` |
//! | `TRACKER_TOP_RECIPES_LIMIT` | `5` |

use chrono::FixedOffset;
use serde::{Serialize, Serializer};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

use super::error::ConfigError;
use crate::constants::{defaults, env_config, limits};
use crate::services::dashboard::DashboardOptions;
use crate::services::stats::StatsOptions;

/// Environment type for logging and other deployment-specific behaviour
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where one calendar day ends and the next begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    /// System local time zone
    #[default]
    Local,
    /// UTC midnight
    Utc,
    /// Fixed offset from UTC
    Fixed(FixedOffset),
}

impl DayBoundary {
    fn parse_offset(s: &str) -> Option<FixedOffset> {
        let (sign, rest) = match s.as_bytes().first()? {
            b'+' => (1, &s[1..]),
            b'-' => (-1, &s[1..]),
            _ => return None,
        };
        let (hours, minutes) = rest.split_once(':')?;
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

impl FromStr for DayBoundary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            other => Self::parse_offset(other).map(Self::Fixed).ok_or_else(|| {
                ConfigError::Parse(format!(
                    "day boundary must be `local`, `utc`, or `+HH:MM`, got `{s}`"
                ))
            }),
        }
    }
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl Serialize for DayBoundary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What to do with a recipe that declares zero servings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingsPolicy {
    /// Report an invalid-argument error
    #[default]
    Reject,
    /// Treat the recipe as a single serving
    ClampToOne,
}

impl FromStr for ServingsPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" | "clamp_to_one" => Ok(Self::ClampToOne),
            other => Err(ConfigError::Parse(format!(
                "servings policy must be `reject` or `clamp`, got `{other}`"
            ))),
        }
    }
}

/// Tracker configuration resolved from the environment
#[derive(Debug, Clone, Serialize)]
pub struct TrackerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Time zone used to cut calendar days for streaks and daily counts
    pub day_boundary: DayBoundary,
    /// Zero-servings handling
    pub servings_policy: ServingsPolicy,
    /// Recent cooking entries on the dashboard
    pub recent_activity_limit: usize,
    /// Days covered by the stats daily-count chart
    pub stats_window_days: u32,
    /// Most-cooked recipes reported by stats
    pub top_recipes_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            day_boundary: DayBoundary::default(),
            servings_policy: ServingsPolicy::default(),
            recent_activity_limit: defaults::RECENT_ACTIVITY_LIMIT,
            stats_window_days: defaults::STATS_WINDOW_DAYS,
            top_recipes_limit: defaults::TOP_RECIPES_LIMIT,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            environment: env::var(env_config::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            ..Self::default()
        };

        if let Ok(val) = env::var(env_config::DAY_BOUNDARY) {
            config.day_boundary = val.parse()?;
        }
        if let Ok(val) = env::var(env_config::SERVINGS_POLICY) {
            config.servings_policy = val.parse()?;
        }
        Self::apply_env_var(
            env_config::RECENT_ACTIVITY_LIMIT,
            &mut config.recent_activity_limit,
        )?;
        Self::apply_env_var(env_config::STATS_WINDOW_DAYS, &mut config.stats_window_days)?;
        Self::apply_env_var(env_config::TOP_RECIPES_LIMIT, &mut config.top_recipes_limit)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero or the stats window is too long
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_activity_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_activity_limit must be > 0",
            ));
        }
        if self.stats_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("stats_window_days must be > 0"));
        }
        if self.stats_window_days > limits::MAX_STATS_WINDOW_DAYS {
            return Err(ConfigError::ValueOutOfRange(
                "stats_window_days must be <= 366",
            ));
        }
        if self.top_recipes_limit == 0 {
            return Err(ConfigError::ValueOutOfRange("top_recipes_limit must be > 0"));
        }
        Ok(())
    }

    /// Dashboard settings derived from this configuration
    #[must_use]
    pub const fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            recent_activity_limit: self.recent_activity_limit,
            servings_policy: self.servings_policy,
        }
    }

    /// Stats settings derived from this configuration
    #[must_use]
    pub const fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            window_days: self.stats_window_days,
            top_recipes_limit: self.top_recipes_limit,
        }
    }

    /// Log a structured summary of the resolved configuration
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            day_boundary = %self.day_boundary,
            servings_policy = ?self.servings_policy,
            recent_activity_limit = self.recent_activity_limit,
            stats_window_days = self.stats_window_days,
            top_recipes_limit = self.top_recipes_limit,
            "Tracker configuration loaded"
        );
    }

    /// Parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }
}
