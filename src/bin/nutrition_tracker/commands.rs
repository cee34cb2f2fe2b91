// ABOUTME: Subcommand implementations for the nutrition-tracker CLI
// ABOUTME: Calls the service layer and renders results in the requested format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use nutrition_tracker::config::ServingsPolicy;
use nutrition_tracker::errors::AppResult;
use nutrition_tracker::formatters::{format_output, NutritionDisplay, OutputFormat};
use nutrition_tracker::intelligence::{format_one_decimal, CookingStreakCalculator};
use nutrition_tracker::models::NutritionTotals;
use nutrition_tracker::services::dashboard::{build_dashboard, DashboardOptions};
use nutrition_tracker::services::recipes::{
    summarize_all, summarize_recipe, RecipeNutritionSummary,
};
use nutrition_tracker::services::stats::{cooking_stats, StatsOptions};
use nutrition_tracker::snapshot::KitchenSnapshot;

pub fn recipe(
    snapshot: &KitchenSnapshot,
    recipe_id: &str,
    policy: ServingsPolicy,
    format: OutputFormat,
) -> AppResult<String> {
    let summary = summarize_recipe(snapshot, recipe_id, policy)?;
    match format {
        OutputFormat::Text => Ok(recipe_text(&summary)),
        OutputFormat::Json => Ok(format_output(&summary, format)?.data),
    }
}

pub fn recipes(
    snapshot: &KitchenSnapshot,
    policy: ServingsPolicy,
    format: OutputFormat,
) -> AppResult<String> {
    let summaries = summarize_all(snapshot, policy)?;
    match format {
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(recipe_text)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => Ok(format_output(&summaries, format)?.data),
    }
}

pub fn streak<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    now: &DateTime<Tz>,
    format: OutputFormat,
) -> AppResult<String> {
    let summary = CookingStreakCalculator::summarize(&snapshot.cooking_events(), now);
    Ok(format_output(&summary, format)?.data)
}

pub fn dashboard<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    now: &DateTime<Tz>,
    options: &DashboardOptions,
    format: OutputFormat,
) -> AppResult<String> {
    let stats = build_dashboard(snapshot, now, options);
    Ok(format_output(&stats, format)?.data)
}

pub fn stats<Tz: TimeZone>(
    snapshot: &KitchenSnapshot,
    now: &DateTime<Tz>,
    options: &StatsOptions,
    format: OutputFormat,
) -> AppResult<String> {
    let stats = cooking_stats(snapshot, now, options)?;
    Ok(format_output(&stats, format)?.data)
}

fn recipe_text(summary: &RecipeNutritionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] - {} serving(s), {} g",
        summary.name,
        summary.recipe_id,
        summary.servings,
        format_one_decimal(summary.total_weight_grams)
    );
    let _ = writeln!(out, "  total:       {}", NutritionDisplay::from(summary.totals));
    let _ = writeln!(
        out,
        "  per serving: {}",
        NutritionDisplay::from(summary.per_serving)
    );
    for item in &summary.ingredients {
        let _ = writeln!(
            out,
            "    {} ({} g): {}",
            item.ingredient_id,
            format_one_decimal(item.quantity_grams),
            NutritionDisplay::from(NutritionTotals::from(item.nutrition))
        );
    }
    out.trim_end().to_owned()
}
