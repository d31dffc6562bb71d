// ABOUTME: Per-session recipe queue state machine driving the swipe interaction
// ABOUTME: Populates from upstream searches, advances on reject, and reports exhaustion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session recipe queue
//!
//! Each session moves between three states:
//!
//! - **Empty**: no recipes fetched for the current ingredient set
//! - **Active**: recipes fetched and the cursor points at one of them
//! - **Exhausted**: the cursor passed the last recipe; the queue is cleared
//!   and the next request repopulates it
//!
//! Every operation holds a per-session async mutex for its whole
//! read-modify-write cycle. Different sessions never contend.

use super::recipe_details::RecipeDetailFetcher;
use crate::constants::mealdb::MAX_INGREDIENTS_PER_REQUEST;
use crate::constants::messages::{
    INGREDIENTS_INVALID, INVALID_FEEDBACK, SESSION_DATA_MISSING, TOO_MANY_INGREDIENTS,
};
use crate::errors::{AppError, AppResult};
use crate::external::RecipeSource;
use crate::models::{RecipeCard, RecipeSummary};
use crate::sessions::{SessionId, SessionState, SessionStore};
use dashmap::DashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// User verdict on the presented recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Accept: show the full recipe, cursor unchanged
    Yes,
    /// Reject: advance to the next recipe
    No,
}

impl FromStr for Feedback {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(AppError::invalid_feedback(INVALID_FEEDBACK)),
        }
    }
}

/// Result of a queue operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOutcome {
    /// Recipe now at the cursor
    Recipe(RecipeCard),
    /// Recipe the user accepted
    Accepted(RecipeCard),
    /// No recipes left; session recipes have been cleared
    Exhausted,
}

/// Per-session recipe queue service
pub struct RecipeQueue {
    source: Arc<dyn RecipeSource>,
    details: Arc<RecipeDetailFetcher>,
    sessions: Arc<dyn SessionStore>,
    locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl RecipeQueue {
    /// Create a queue service
    #[must_use]
    pub fn new(
        source: Arc<dyn RecipeSource>,
        details: Arc<RecipeDetailFetcher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            source,
            details,
            sessions,
            locks: DashMap::new(),
        }
    }

    /// Present the current recipe for `ingredients`
    ///
    /// A different ingredient set discards the previous queue. An empty
    /// queue is populated by searching each ingredient in order.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INGREDIENTS` if `ingredients` is empty or longer than
    /// [`MAX_INGREDIENTS_PER_REQUEST`], or a store error
    pub async fn current_recipe(
        &self,
        session: SessionId,
        ingredients: &[String],
    ) -> AppResult<QueueOutcome> {
        if ingredients.is_empty() {
            return Err(AppError::invalid_ingredients(INGREDIENTS_INVALID));
        }
        if ingredients.len() > MAX_INGREDIENTS_PER_REQUEST {
            warn!(
                session_id = %session,
                count = ingredients.len(),
                limit = MAX_INGREDIENTS_PER_REQUEST,
                "Rejected oversized ingredient list"
            );
            return Err(AppError::invalid_ingredients(TOO_MANY_INGREDIENTS));
        }

        let lock = self.session_lock(session);
        let guard = lock.lock().await;
        let result = self.current_recipe_locked(session, ingredients).await;
        drop(guard);
        drop(lock);
        self.prune_lock(&session);
        result
    }

    /// Apply feedback to the recipe at the cursor
    ///
    /// # Errors
    ///
    /// Returns `SESSION_MISSING` if the session has no presentable recipe,
    /// checked before `INVALID_FEEDBACK` for a value other than `"yes"` or `"no"`
    pub async fn submit_feedback(
        &self,
        session: SessionId,
        feedback: Option<&str>,
    ) -> AppResult<QueueOutcome> {
        let lock = self.session_lock(session);
        let guard = lock.lock().await;
        let result = self.submit_feedback_locked(session, feedback).await;
        drop(guard);
        drop(lock);
        self.prune_lock(&session);
        result
    }

    /// Number of per-session locks currently tracked
    #[must_use]
    pub fn tracked_locks(&self) -> usize {
        self.locks.len()
    }

    async fn current_recipe_locked(
        &self,
        session: SessionId,
        ingredients: &[String],
    ) -> AppResult<QueueOutcome> {
        let mut state = self.sessions.get(&session).await?.unwrap_or_default();

        if !state.has_ingredients(ingredients) {
            debug!(session_id = %session, ?ingredients, "New ingredient set, resetting queue");
            state.reset_for(ingredients);
        }

        if state.needs_population() {
            state.populate(self.fetch_union(ingredients).await);
            info!(
                session_id = %session,
                recipes = state.recipes.len(),
                "Session queue populated"
            );
        }

        self.present_current(session, state).await
    }

    async fn submit_feedback_locked(
        &self,
        session: SessionId,
        feedback: Option<&str>,
    ) -> AppResult<QueueOutcome> {
        let mut state = self
            .sessions
            .get(&session)
            .await?
            .filter(|state| state.current().is_some())
            .ok_or_else(|| AppError::session_missing(SESSION_DATA_MISSING))?;

        let feedback: Feedback = feedback
            .ok_or_else(|| AppError::invalid_feedback(INVALID_FEEDBACK))?
            .parse()?;

        match feedback {
            Feedback::Yes => {
                let summary = state
                    .current()
                    .cloned()
                    .ok_or_else(|| AppError::session_missing(SESSION_DATA_MISSING))?;
                debug!(session_id = %session, recipe_id = %summary.id, "Recipe accepted");
                Ok(QueueOutcome::Accepted(self.enrich(&summary).await))
            }
            Feedback::No => {
                state.advance();
                debug!(session_id = %session, cursor = state.cursor, "Recipe rejected");
                self.present_current(session, state).await
            }
        }
    }

    /// Store `state` and render the recipe at its cursor, clearing it if exhausted
    async fn present_current(
        &self,
        session: SessionId,
        mut state: SessionState,
    ) -> AppResult<QueueOutcome> {
        let Some(summary) = state.current().cloned() else {
            info!(session_id = %session, "Recipe queue exhausted");
            state.clear_recipes();
            self.sessions.put(session, state).await?;
            return Ok(QueueOutcome::Exhausted);
        };

        self.sessions.put(session, state).await?;
        Ok(QueueOutcome::Recipe(self.enrich(&summary).await))
    }

    /// Concatenate per-ingredient search results in ingredient order
    async fn fetch_union(&self, ingredients: &[String]) -> Vec<RecipeSummary> {
        let mut recipes = Vec::new();
        for ingredient in ingredients {
            let found = self.source.search_by_ingredient(ingredient).await;
            debug!(ingredient = %ingredient, count = found.len(), "Fetched recipes for ingredient");
            recipes.extend(found);
        }
        recipes
    }

    async fn enrich(&self, summary: &RecipeSummary) -> RecipeCard {
        let detail = self.details.get_details(&summary.id).await;
        RecipeCard::compose(summary, detail)
    }

    fn session_lock(&self, session: SessionId) -> Arc<Mutex<()>> {
        self.locks.entry(session).or_default().clone()
    }

    /// Drop the lock entry once no in-flight request holds it
    fn prune_lock(&self, session: &SessionId) {
        self.locks
            .remove_if(session, |_, lock| Arc::strong_count(lock) == 1);
    }
}
