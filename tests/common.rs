// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted recipe source, test configuration and resource builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `mealswipe_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use async_trait::async_trait;
use mealswipe_server::{
    cache::{factory::Cache, CacheConfig},
    config::ServerConfig,
    context::ServerResources,
    external::{MealRecord, RecipeSource},
    models::RecipeSummary,
    security::SessionSecret,
    services::{RecipeDetailFetcher, RecipeQueue},
    sessions::{InMemorySessionStore, SessionStore},
};
use serde_json::{json, Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Fixed signing secret so cookies are reproducible across test resources
pub const TEST_SESSION_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-process recipe source with scripted results and call counters
///
/// Searches return the summaries registered for the term (empty otherwise).
/// Lookups return the registered meal, a generic meal for any other id, or
/// `None` for ids marked unavailable.
#[derive(Default)]
pub struct ScriptedRecipeSource {
    searches: HashMap<String, Vec<RecipeSummary>>,
    meals: HashMap<String, MealRecord>,
    unavailable: HashSet<String>,
    search_log: Mutex<Vec<String>>,
    lookup_calls: AtomicUsize,
}

impl ScriptedRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register search results for `term` using the given recipe ids
    pub fn with_search(mut self, term: &str, ids: &[&str]) -> Self {
        let summaries = ids
            .iter()
            .map(|id| {
                RecipeSummary::new(
                    *id,
                    format!("Recipe {id}"),
                    format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
                )
            })
            .collect();
        self.searches.insert(term.to_owned(), summaries);
        self
    }

    /// Register a full meal record for `id`
    pub fn with_meal(mut self, id: &str, meal: Value) -> Self {
        let map: Map<String, Value> = meal.as_object().cloned().unwrap_or_default();
        self.meals.insert(id.to_owned(), MealRecord::from(map));
        self
    }

    /// Make lookups for `id` fail
    pub fn with_unavailable(mut self, id: &str) -> Self {
        self.unavailable.insert(id.to_owned());
        self
    }

    /// Search terms in the order they were requested
    pub fn searched_terms(&self) -> Vec<String> {
        self.search_log.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.search_log.lock().unwrap().len()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    fn generic_meal(id: &str) -> MealRecord {
        let map = json!({
            "idMeal": id,
            "strMeal": format!("Recipe {id}"),
            "strInstructions": "Cook everything together.",
            "strIngredient1": "Rice",
            "strMeasure1": "1 cup",
            "strIngredient2": "Salt",
            "strMeasure2": "1 tsp",
        });
        MealRecord::from(map.as_object().cloned().unwrap_or_default())
    }
}

#[async_trait]
impl RecipeSource for ScriptedRecipeSource {
    async fn search_by_ingredient(&self, term: &str) -> Vec<RecipeSummary> {
        self.search_log.lock().unwrap().push(term.to_owned());
        self.searches.get(term).cloned().unwrap_or_default()
    }

    async fn lookup_by_id(&self, recipe_id: &str) -> Option<MealRecord> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.contains(recipe_id) {
            return None;
        }
        Some(
            self.meals
                .get(recipe_id)
                .cloned()
                .unwrap_or_else(|| Self::generic_meal(recipe_id)),
        )
    }
}

/// Default configuration with a fixed session secret
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.session.secret =
        SessionSecret::from_config_value(TEST_SESSION_SECRET).expect("valid test secret");
    config.session.secret_generated = false;
    config
}

/// Server resources backed by a scripted recipe source
pub async fn create_test_resources(
    source: Arc<ScriptedRecipeSource>,
) -> Result<Arc<ServerResources>> {
    init_test_logging();
    let resources = ServerResources::with_recipe_source(test_config(), source).await?;
    Ok(Arc::new(resources))
}

/// Detail fetcher over a fresh unbounded-lifetime cache
pub async fn create_detail_fetcher(
    source: Arc<ScriptedRecipeSource>,
) -> Result<Arc<RecipeDetailFetcher>> {
    init_test_logging();
    let cache = Cache::new(CacheConfig::default()).await?;
    Ok(Arc::new(RecipeDetailFetcher::new(source, cache, None)))
}

/// Queue service wired to an in-memory session store
pub async fn create_recipe_queue(
    source: Arc<ScriptedRecipeSource>,
) -> Result<(RecipeQueue, Arc<InMemorySessionStore>)> {
    let details = create_detail_fetcher(source.clone()).await?;
    let store = Arc::new(InMemorySessionStore::new(100));
    let sessions: Arc<dyn SessionStore> = store.clone();
    Ok((RecipeQueue::new(source, details, sessions), store))
}

/// Owned ingredient list from string literals
pub fn ingredients(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
