// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Owns the caches, session store, upstream client and queue service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Process-scoped container built once at startup and handed to the axum
//! router as state. Every shared object is behind an `Arc`, so cloning the
//! container is cheap.

use crate::cache::{factory::Cache, CacheConfig};
use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::external::{MealDbClient, RecipeSource};
use crate::intelligence::IngredientNormalizer;
use crate::security::SessionCookieManager;
use crate::services::{RecipeDetailFetcher, RecipeQueue};
use crate::sessions::{InMemorySessionStore, SessionStore};
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Raw token to canonical ingredient resolution
    pub normalizer: Arc<IngredientNormalizer>,
    /// Upstream recipe service
    pub recipe_source: Arc<dyn RecipeSource>,
    /// Shared recipe detail cache
    pub detail_cache: Arc<Cache>,
    /// Cached detail enrichment
    pub recipe_details: Arc<RecipeDetailFetcher>,
    /// Per-session queue state
    pub sessions: Arc<dyn SessionStore>,
    /// Swipe state machine
    pub recipe_queue: Arc<RecipeQueue>,
    /// Signed session cookies
    pub cookies: Arc<SessionCookieManager>,
}

impl ServerResources {
    /// Build resources talking to TheMealDB
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or a cache cannot be created
    pub async fn new(config: ServerConfig) -> AppResult<Self> {
        let source: Arc<dyn RecipeSource> = Arc::new(MealDbClient::new(&config.mealdb)?);
        Self::with_recipe_source(config, source).await
    }

    /// Build resources over an arbitrary recipe source
    ///
    /// # Errors
    ///
    /// Returns an error if a cache cannot be created
    pub async fn with_recipe_source(
        config: ServerConfig,
        recipe_source: Arc<dyn RecipeSource>,
    ) -> AppResult<Self> {
        let normalizer =
            Arc::new(IngredientNormalizer::new(config.cache.ingredient_max_entries).await?);

        let detail_cache = Arc::new(
            Cache::new(CacheConfig {
                max_entries: config.cache.recipe_detail_max_entries,
                cleanup_interval: config.cache.recipe_detail_ttl,
            })
            .await?,
        );
        let recipe_details = Arc::new(RecipeDetailFetcher::new(
            recipe_source.clone(),
            (*detail_cache).clone(),
            config.cache.recipe_detail_ttl,
        ));

        let sessions: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::new(config.session.max_entries));
        let recipe_queue = Arc::new(RecipeQueue::new(
            recipe_source.clone(),
            recipe_details.clone(),
            sessions.clone(),
        ));

        let cookies = Arc::new(SessionCookieManager::new(
            &config.session.secret,
            config.session.cookie_secure,
        ));

        Ok(Self {
            config: Arc::new(config),
            normalizer,
            recipe_source,
            detail_cache,
            recipe_details,
            sessions,
            recipe_queue,
            cookies,
        })
    }
}
