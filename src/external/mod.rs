// ABOUTME: External API client modules (TheMealDB)
// ABOUTME: Upstream recipe search and lookup with outbound rate limiting

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains the upstream recipe service client used by the
//! Mealswipe server.

/// TheMealDB client and the `RecipeSource` abstraction
pub mod mealdb_client;
/// Sliding-window limiter for outbound calls
pub mod rate_limiter;

pub use mealdb_client::{MealDbClient, MealRecord, RecipeSource};
pub use rate_limiter::SlidingWindowLimiter;
