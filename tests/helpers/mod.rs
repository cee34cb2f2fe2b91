// ABOUTME: Shared test helpers and fixtures for integration tests
// ABOUTME: Builds a small kitchen snapshot with a known reference time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code, clippy::must_use_candidate)]

pub mod fixtures;
