// ABOUTME: TheMealDB API constants: base URL, endpoints, field layout, rate limits
// ABOUTME: Mirrors the upstream JSON contract consumed by the MealDB client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Public v1 API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Search-by-ingredient endpoint path
pub const FILTER_ENDPOINT: &str = "filter.php";

/// Lookup-by-id endpoint path
pub const LOOKUP_ENDPOINT: &str = "lookup.php";

/// Query parameter shared by both endpoints
pub const QUERY_PARAM: &str = "i";

/// Number of numbered `strIngredientN` / `strMeasureN` pairs in a meal record
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Canonical ingredients accepted in one request, each costing a search call
pub const MAX_INGREDIENTS_PER_REQUEST: usize = 20;

/// Search calls allowed per window
pub const DEFAULT_RATE_LIMIT_CALLS: u32 = 50;

/// Sliding window length in seconds
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Service label used in logs
pub const SERVICE_LABEL: &str = "TheMealDB";
