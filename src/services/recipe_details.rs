// ABOUTME: Recipe detail enrichment with a shared process-wide cache
// ABOUTME: Extracts ingredient lines and instructions, then scores sustainability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::{factory::Cache, CacheKey};
use crate::constants::messages::{INGREDIENTS_UNAVAILABLE, INSTRUCTIONS_UNAVAILABLE};
use crate::external::{MealRecord, RecipeSource};
use crate::intelligence::sustainability_score;
use crate::models::{RecipeDetail, SustainabilityScore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches and caches enriched recipe details
///
/// Successful lookups are cached keyed by recipe id. Placeholder details
/// produced on upstream failure are returned but never cached.
pub struct RecipeDetailFetcher {
    source: Arc<dyn RecipeSource>,
    cache: Cache,
    ttl: Option<Duration>,
}

impl RecipeDetailFetcher {
    /// Create a fetcher over `source`, storing results in `cache`
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, cache: Cache, ttl: Option<Duration>) -> Self {
        Self { source, cache, ttl }
    }

    /// Enriched detail for a recipe id; never fails
    pub async fn get_details(&self, recipe_id: &str) -> RecipeDetail {
        let key = CacheKey::recipe_detail(recipe_id);

        match self.cache.get::<RecipeDetail>(&key).await {
            Ok(Some(detail)) => {
                debug!(recipe_id = %recipe_id, "Recipe detail cache hit");
                return detail;
            }
            Ok(None) => {}
            Err(e) => warn!(recipe_id = %recipe_id, error = %e, "Recipe detail cache read failed"),
        }

        let Some(record) = self.source.lookup_by_id(recipe_id).await else {
            warn!(recipe_id = %recipe_id, "Recipe details unavailable, using placeholder");
            return RecipeDetail::unavailable();
        };

        let detail = compose_detail(&record);
        if let Err(e) = self.cache.set(&key, &detail, self.ttl).await {
            warn!(recipe_id = %recipe_id, error = %e, "Recipe detail cache write failed");
        } else {
            info!(recipe_id = %recipe_id, "Recipe details fetched and cached");
        }
        detail
    }
}

/// Build a detail record from a raw upstream meal
#[must_use]
pub fn compose_detail(record: &MealRecord) -> RecipeDetail {
    let mut ingredients = extract_ingredient_lines(record);
    if ingredients.is_empty() {
        ingredients.push(INGREDIENTS_UNAVAILABLE.to_owned());
    }

    let instructions = record
        .instructions()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(INSTRUCTIONS_UNAVAILABLE)
        .to_owned();

    let score = sustainability_score(&ingredients);

    RecipeDetail {
        ingredients,
        instructions,
        sustainability_score: SustainabilityScore::Rated(score),
    }
}

/// `"name quantity"` lines for every populated ingredient slot
fn extract_ingredient_lines(record: &MealRecord) -> Vec<String> {
    record
        .ingredient_slots()
        .filter_map(|(name, measure)| {
            let name = name.map(str::trim).filter(|name| !name.is_empty())?;
            let measure = measure.map_or("", str::trim);
            Some(if measure.is_empty() {
                name.to_owned()
            } else {
                format!("{name} {measure}")
            })
        })
        .collect()
}
