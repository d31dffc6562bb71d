// ABOUTME: User-facing response messages and placeholder values
// ABOUTME: Kept stable because the web client matches on several of them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body message when the recipe queue is exhausted
pub const NO_MORE_RECIPES: &str = "No more recipes available.";

/// Acknowledgement for an accepted recipe
pub const FEEDBACK_ACCEPTED: &str = "Feedback acknowledged. Displaying full recipe details.";

/// Missing `ingredients` query parameter
pub const INGREDIENTS_REQUIRED: &str = "Ingredients are required.";

/// Ingredient list empty after trimming and normalization
pub const INGREDIENTS_INVALID: &str = "Invalid or empty ingredients provided.";

/// More distinct ingredients than one request may search
pub const TOO_MANY_INGREDIENTS: &str = "Too many ingredients provided.";

/// Feedback with no active queue
pub const SESSION_DATA_MISSING: &str = "Session data missing. Please start with new ingredients.";

/// Feedback value outside `yes` / `no`
pub const INVALID_FEEDBACK: &str = "Invalid feedback received.";

/// Placeholder ingredient line
pub const INGREDIENTS_UNAVAILABLE: &str = "Ingredients not available";

/// Placeholder instructions
pub const INSTRUCTIONS_UNAVAILABLE: &str = "Instructions not available.";

/// Title shown when the upstream omits one
pub const UNKNOWN_RECIPE_TITLE: &str = "Unknown Recipe";

/// Thumbnail shown when the upstream omits one
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";
