// ABOUTME: Round-half-up to one decimal place and matching fixed-point formatting
// ABOUTME: The single rounding rule used by all nutrition arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracker_core::constants::nutrition::ONE_DECIMAL_SCALE;

/// Round to one decimal place, ties going up
///
/// `4.75 -> 4.8`, `7.45 -> 7.5`, `0.04 -> 0.0`. Inputs are expected to be
/// non-negative; negative ties move away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * ONE_DECIMAL_SCALE).round() / ONE_DECIMAL_SCALE
}

/// Render a value with exactly one fractional digit after rounding it
///
/// `300.0 -> "300.0"`, `4.75 -> "4.8"`.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", round_one_decimal(value))
}
