// ABOUTME: Core data models for recipe discovery
// ABOUTME: Re-exports recipe summaries, enriched details, cards and scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RecipeSummary`: minimal record returned by an ingredient search
//! - `RecipeDetail`: enriched detail (ingredient lines, instructions, score)
//! - `RecipeCard`: what the client renders for the current recipe
//! - `SustainabilityScore`: heuristic 0-100 score or `"Unknown"`

mod recipe;

pub use recipe::{RecipeCard, RecipeDetail, RecipeSummary, SustainabilityScore};
