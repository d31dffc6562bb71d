// ABOUTME: Recipe intelligence: ingredient normalization and sustainability scoring
// ABOUTME: Pure logic used by the detail fetcher and the recipe queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient and recipe analysis
//!
//! - **`ingredient_normalizer`**: raw token to canonical search term
//! - **`spelling`**: dictionary-based typo correction
//! - **`sustainability`**: heuristic 0-100 score for an ingredient list

/// Canonical ingredient resolution with memoization
pub mod ingredient_normalizer;
/// Frequency-weighted spelling correction
pub mod spelling;
/// Heuristic sustainability scoring
pub mod sustainability;

pub use ingredient_normalizer::{IngredientNormalizer, NormalizerStats};
pub use spelling::SpellCorrector;
pub use sustainability::sustainability_score;
