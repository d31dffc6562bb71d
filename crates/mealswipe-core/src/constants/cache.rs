// ABOUTME: Cache-related constants for capacities and optional TTLs
// ABOUTME: Bounds the recipe detail cache and the ingredient normalization memo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum entries for the recipe detail cache
pub const DEFAULT_RECIPE_DETAIL_MAX_ENTRIES: usize = 10_000;

/// Default maximum entries for the ingredient normalization memo
pub const DEFAULT_INGREDIENT_MAX_ENTRIES: usize = 1_000;

/// Fallback capacity when a configured capacity is zero
pub const FALLBACK_CACHE_CAPACITY: usize = 1_000;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "mealswipe:cache:";
