// ABOUTME: nutrition-tracker CLI - recipe nutrition, cooking streaks, and dashboard stats from a snapshot
// ABOUTME: Resolves configuration and the reference day, then dispatches to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Nutrition of one recipe, whole and per serving
//! nutrition-tracker --data kitchen.json recipe rcp_chili
//!
//! # Every recipe as JSON
//! nutrition-tracker --data kitchen.json --format json recipes
//!
//! # Current and longest cooking streak
//! nutrition-tracker --data kitchen.json streak
//!
//! # Dashboard as of a fixed instant
//! nutrition-tracker --data kitchen.json --at 2025-01-15T20:00:00+01:00 dashboard
//!
//! # Daily counts for the last 14 days
//! TRACKER_STATS_WINDOW_DAYS=14 nutrition-tracker --data kitchen.json stats
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use nutrition_tracker::config::{DayBoundary, TrackerConfig};
use nutrition_tracker::errors::{AppError, AppResult};
use nutrition_tracker::formatters::OutputFormat;
use nutrition_tracker::logging::LoggingConfig;
use nutrition_tracker::snapshot::KitchenSnapshot;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "nutrition-tracker",
    about = "Recipe nutrition and cooking streaks",
    long_about = "Computes recipe nutrition, cooking streaks, dashboard counters, and cooking stats from a JSON kitchen snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Kitchen snapshot file (ingredients, recipes, cooking history)
    #[arg(long, short = 'd', global = true, default_value = "kitchen.json")]
    data: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Reference instant (RFC 3339) instead of the current time
    #[arg(long, global = true)]
    at: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Nutrition of one recipe
    Recipe {
        /// Recipe ID
        recipe_id: String,
    },

    /// Nutrition of every recipe
    Recipes,

    /// Current and longest cooking streak
    Streak,

    /// Dashboard counters and recent activity
    Dashboard,

    /// Daily cooking counts and most cooked recipes
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout stays parseable
    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<String> {
    let config = TrackerConfig::from_env()?;
    config.log_summary();

    let snapshot = KitchenSnapshot::from_path(&cli.data)?;
    let format = OutputFormat::from(cli.format);
    let instant = reference_instant(cli.at.as_deref())?;
    debug!(%instant, day_boundary = %config.day_boundary, "Resolved reference instant");

    match config.day_boundary {
        DayBoundary::Local => dispatch(
            &cli.command,
            &snapshot,
            &config,
            format,
            &instant.with_timezone(&Local),
        ),
        DayBoundary::Utc => dispatch(&cli.command, &snapshot, &config, format, &instant),
        DayBoundary::Fixed(offset) => dispatch(
            &cli.command,
            &snapshot,
            &config,
            format,
            &instant.with_timezone(&offset),
        ),
    }
}

fn reference_instant(at: Option<&str>) -> AppResult<DateTime<Utc>> {
    at.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| {
                    AppError::invalid_input(format!("--at must be an RFC 3339 timestamp: {e}"))
                })
        },
    )
}

fn dispatch<Tz: chrono::TimeZone>(
    command: &Command,
    snapshot: &KitchenSnapshot,
    config: &TrackerConfig,
    format: OutputFormat,
    now: &DateTime<Tz>,
) -> AppResult<String> {
    match command {
        Command::Recipe { recipe_id } => {
            commands::recipe(snapshot, recipe_id, config.servings_policy, format)
        }
        Command::Recipes => commands::recipes(snapshot, config.servings_policy, format),
        Command::Streak => commands::streak(snapshot, now, format),
        Command::Dashboard => {
            commands::dashboard(snapshot, now, &config.dashboard_options(), format)
        }
        Command::Stats => commands::stats(snapshot, now, &config.stats_options(), format),
    }
}
