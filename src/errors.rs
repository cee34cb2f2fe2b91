// ABOUTME: Error module re-exports from tracker-core
// ABOUTME: Keeps `crate::errors` import paths stable for the application layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError`, `ErrorCode`, and the domain errors live in `tracker-core` so the
//! computation crate can use them without depending on this crate.

pub use tracker_core::errors::*;
