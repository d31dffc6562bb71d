// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Recipe detail enrichment and the per-session recipe queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the business rules so route handlers stay thin: parse the
//! request, call a service, map the outcome to a response.

/// Cached recipe detail enrichment
pub mod recipe_details;

/// Per-session recipe queue state machine
pub mod recipe_queue;

pub use recipe_details::RecipeDetailFetcher;
pub use recipe_queue::{Feedback, QueueOutcome, RecipeQueue};
