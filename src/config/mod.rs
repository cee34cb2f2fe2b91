// ABOUTME: Configuration management module for tracker settings
// ABOUTME: Environment-only configuration with validation and typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables. The computation core never
//! reads them: values are resolved here once and passed down as arguments.

/// Environment-based tracker configuration
pub mod environment;
/// Configuration error types
pub mod error;

pub use environment::{DayBoundary, Environment, ServingsPolicy, TrackerConfig};
pub use error::ConfigError;
