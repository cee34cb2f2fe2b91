// ABOUTME: Error types raised by nutrition arithmetic
// ABOUTME: Converts into AppError so callers can propagate with `?`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Error Types
//!
//! Nutrition arithmetic is total except for degenerate divisors, so the
//! taxonomy is a single variant. It maps to `VALUE_OUT_OF_RANGE`.

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors raised by nutrition computations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// A numeric argument is outside the range the operation accepts
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl NutritionError {
    /// Create an "invalid argument" error
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that was rejected
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidArgument { parameter, .. } => parameter,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let details = serde_json::json!({ "parameter": error.parameter() });
        Self::new(ErrorCode::ValueOutOfRange, error.to_string()).with_details(details)
    }
}
