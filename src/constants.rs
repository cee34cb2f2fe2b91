// ABOUTME: Constants re-exported from tracker-core
// ABOUTME: Nutrition arithmetic, environment variable names, defaults, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use tracker_core::constants::*;
