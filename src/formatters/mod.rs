// ABOUTME: Output format abstraction for rendering service results
// ABOUTME: Supports JSON (default) and a plain indented text layout for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, pretty-printed
//! - **Text**: One `key: value` per line, nested values indented, floating
//!   point numbers shown with one decimal place
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nutrition_tracker::formatters::{format_output, OutputFormat};
//! use nutrition_tracker::models::NutritionTotals;
//!
//! let totals = NutritionTotals::new(200.0, 20.0, 9.5, 4.8);
//! if let Ok(output) = format_output(&totals, OutputFormat::Text) {
//!     println!("{}", output.data);
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Write};

use crate::errors::AppError;
use crate::intelligence::format_one_decimal;
use crate::models::NutritionTotals;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Indented `key: value` lines for terminals
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Format serializable data to the specified output format
///
/// # Errors
///
/// Returns `FormatError` if the value cannot be serialized
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => {
            let value = serde_json::to_value(data).map_err(|e| FormatError {
                message: format!("Failed to convert to JSON value: {e}"),
                format,
            })?;
            render_text(&value)
        }
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Nutrition totals rendered with exactly one decimal place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionDisplay {
    /// Energy in kcal
    pub calories: String,
    /// Protein in grams
    pub protein: String,
    /// Carbohydrates in grams
    pub carbs: String,
    /// Fat in grams
    pub fat: String,
}

impl From<NutritionTotals> for NutritionDisplay {
    fn from(totals: NutritionTotals) -> Self {
        Self {
            calories: format_one_decimal(totals.calories),
            protein: format_one_decimal(totals.protein),
            carbs: format_one_decimal(totals.carbs),
            fat: format_one_decimal(totals.fat),
        }
    }
}

impl fmt::Display for NutritionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kcal, {} g protein, {} g carbs, {} g fat",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

fn render_text(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(_) | Value::Array(_) => write_nested(&mut out, value, 0),
        scalar => out.push_str(&scalar_text(scalar)),
    }
    out.trim_end().to_owned()
}

fn write_nested(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if is_scalar(child) {
                    let _ = writeln!(out, "{indent}{key}: {}", scalar_text(child));
                } else if is_empty(child) {
                    let _ = writeln!(out, "{indent}{key}: (none)");
                } else {
                    let _ = writeln!(out, "{indent}{key}:");
                    write_nested(out, child, depth + 1);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_scalar(item) {
                    let _ = writeln!(out, "{indent}- {}", scalar_text(item));
                } else {
                    let _ = writeln!(out, "{indent}-");
                    write_nested(out, item, depth + 1);
                }
            }
        }
        scalar => {
            let _ = writeln!(out, "{indent}{}", scalar_text(scalar));
        }
    }
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), format_one_decimal),
        other => other.to_string(),
    }
}
