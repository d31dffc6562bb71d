// ABOUTME: Per-session recipe queue state and the session store abstraction
// ABOUTME: Defines SessionId, SessionState and the pluggable SessionStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session state for the swipe interaction
//!
//! State lives only for the lifetime of the process; the store is bounded
//! and evicts the least recently used session when full.

/// Bounded in-memory session store
pub mod memory;

pub use memory::InMemorySessionStore;

use crate::errors::AppResult;
use crate::models::RecipeSummary;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque session identifier carried in the signed cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Mutable per-session recipe queue
///
/// `cursor` never exceeds `recipes.len()`. An empty `recipes` list means the
/// queue must be (re)populated before a recipe can be presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Canonical ingredients the queue was built from
    pub last_ingredients: BTreeSet<String>,
    /// Union of per-ingredient search results, duplicates kept
    pub recipes: Vec<RecipeSummary>,
    /// Index of the recipe currently presented
    pub cursor: usize,
}

impl SessionState {
    /// Whether `ingredients` form the same set the queue was built from
    #[must_use]
    pub fn has_ingredients(&self, ingredients: &[String]) -> bool {
        ingredients.iter().cloned().collect::<BTreeSet<_>>() == self.last_ingredients
    }

    /// Discard the queue and remember a new ingredient set
    pub fn reset_for(&mut self, ingredients: &[String]) {
        self.last_ingredients = ingredients.iter().cloned().collect();
        self.clear_recipes();
    }

    /// Install freshly fetched recipes and rewind the cursor
    pub fn populate(&mut self, recipes: Vec<RecipeSummary>) {
        self.recipes = recipes;
        self.cursor = 0;
    }

    /// Drop the fetched recipes, keeping the ingredient set
    pub fn clear_recipes(&mut self) {
        self.recipes.clear();
        self.cursor = 0;
    }

    /// Whether the queue has no recipes and must be populated
    #[must_use]
    pub fn needs_population(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe at the cursor, if any
    #[must_use]
    pub fn current(&self) -> Option<&RecipeSummary> {
        self.recipes.get(self.cursor)
    }

    /// Move the cursor forward one recipe, saturating at the end
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1).min(self.recipes.len());
    }
}

/// Storage for per-session queue state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session's state
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get(&self, id: &SessionId) -> AppResult<Option<SessionState>>;

    /// Insert or replace a session's state
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn put(&self, id: SessionId, state: SessionState) -> AppResult<()>;
}
