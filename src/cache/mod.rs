// ABOUTME: Cache abstraction layer for recipe detail and canonical ingredient memoization
// ABOUTME: Bounded LRU backends behind a pluggable CacheProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache factory for backend selection
pub mod factory;
/// In-memory LRU cache backend
pub mod memory;

use crate::constants::cache::{CACHE_KEY_PREFIX, FALLBACK_CACHE_CAPACITY};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Cache provider trait for pluggable backends
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be initialized
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store a value; `ttl` of `None` keeps it until evicted
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Option<Duration>,
    ) -> AppResult<()>;

    /// Retrieve a value, refreshing its LRU position
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bytes cannot be deserialized as `T`
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Number of stored entries, expired ones included until swept
    async fn len(&self) -> usize;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unhealthy
    async fn health_check(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// Interval for sweeping expired entries; `None` disables the sweeper
    pub cleanup_interval: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: FALLBACK_CACHE_CAPACITY,
            cleanup_interval: None,
        }
    }
}

/// Structured cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Enriched recipe detail by upstream id
    RecipeDetail {
        /// Upstream recipe identifier
        recipe_id: String,
    },
    /// Canonical form of a raw ingredient token
    CanonicalIngredient {
        /// Trimmed, lower-cased raw token
        raw: String,
    },
}

impl CacheKey {
    /// Key for a recipe detail entry
    pub fn recipe_detail(recipe_id: impl Into<String>) -> Self {
        Self::RecipeDetail {
            recipe_id: recipe_id.into(),
        }
    }

    /// Key for a canonical ingredient entry
    pub fn canonical_ingredient(raw: impl Into<String>) -> Self {
        Self::CanonicalIngredient { raw: raw.into() }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecipeDetail { recipe_id } => {
                write!(f, "{CACHE_KEY_PREFIX}recipe_detail:{recipe_id}")
            }
            Self::CanonicalIngredient { raw } => {
                write!(f, "{CACHE_KEY_PREFIX}ingredient:{raw}")
            }
        }
    }
}
