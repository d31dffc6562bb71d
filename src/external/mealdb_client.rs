// ABOUTME: TheMealDB API client for ingredient search and recipe lookup
// ABOUTME: Rate-limits searches and degrades to empty or missing results on upstream failure

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! TheMealDB API Client
//!
//! Two endpoints are used:
//! - `filter.php?i=<ingredient>` returns `{"meals": [...] | null}` summaries
//! - `lookup.php?i=<id>` returns `{"meals": [<full meal record>]}`
//!
//! # Features
//! - Sliding-window rate limiting on searches (50 calls per 60 s by default)
//! - TLS via rustls with bundled web PKI roots; verification is never disabled
//! - Upstream failures are logged and absorbed: searches return an empty
//!   list and lookups return `None`
//!
//! # API Reference
//! TheMealDB: <https://www.themealdb.com/api.php>

use super::rate_limiter::SlidingWindowLimiter;
use crate::config::MealDbConfig;
use crate::constants::mealdb::{
    FILTER_ENDPOINT, LOOKUP_ENDPOINT, MAX_INGREDIENT_SLOTS, QUERY_PARAM, SERVICE_LABEL,
};
use crate::errors::{AppError, AppResult};
use crate::models::RecipeSummary;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Upstream source of recipe summaries and raw meal records
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes that use the given ingredient; empty on any upstream failure
    async fn search_by_ingredient(&self, term: &str) -> Vec<RecipeSummary>;

    /// Full meal record for an id; `None` when unavailable
    async fn lookup_by_id(&self, recipe_id: &str) -> Option<MealRecord>;
}

/// Raw meal record as returned by the lookup endpoint
///
/// Kept as the upstream JSON object because ingredients arrive as twenty
/// numbered `strIngredientN`/`strMeasureN` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealRecord(Map<String, Value>);

impl MealRecord {
    /// String value of a field, `None` when absent, null or not a string
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.field("strMeal")
    }

    /// Preparation instructions
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.field("strInstructions")
    }

    /// Ingredient name and measure for slot `1..=20`
    #[must_use]
    pub fn ingredient_slot(&self, slot: usize) -> (Option<&str>, Option<&str>) {
        (
            self.field(&format!("strIngredient{slot}")),
            self.field(&format!("strMeasure{slot}")),
        )
    }

    /// All ingredient slots in order
    pub fn ingredient_slots(&self) -> impl Iterator<Item = (Option<&str>, Option<&str>)> + '_ {
        (1..=MAX_INGREDIENT_SLOTS).map(|slot| self.ingredient_slot(slot))
    }
}

impl From<Map<String, Value>> for MealRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct FilterResponse {
    #[serde(default)]
    meals: Option<Vec<MealSummaryResponse>>,
}

#[derive(Debug, Deserialize)]
struct MealSummaryResponse {
    #[serde(rename = "idMeal")]
    id_meal: String,
    #[serde(rename = "strMeal")]
    str_meal: Option<String>,
    #[serde(rename = "strMealThumb")]
    str_meal_thumb: Option<String>,
}

impl From<MealSummaryResponse> for RecipeSummary {
    fn from(meal: MealSummaryResponse) -> Self {
        Self {
            id: meal.id_meal,
            title: meal.str_meal,
            thumbnail_url: meal.str_meal_thumb,
        }
    }
}

/// Lookup response envelope
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    meals: Option<Vec<MealRecord>>,
}

/// TheMealDB HTTP client
pub struct MealDbClient {
    base_url: String,
    http_client: Client,
    rate_limiter: SlidingWindowLimiter,
}

impl MealDbClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS-backed HTTP client cannot be built
    pub fn new(config: &MealDbConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                AppError::internal(format!("Failed to build {SERVICE_LABEL} HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http_client,
            rate_limiter: SlidingWindowLimiter::new(
                config.rate_limit_calls,
                config.rate_limit_window,
            ),
        })
    }

    /// Issue a GET against `endpoint?i=<value>` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, value: &str) -> AppResult<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[(QUERY_PARAM, value)])
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_LABEL, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_LABEL,
                format!("HTTP {status} from {endpoint}"),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_LABEL, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_ingredient(&self, term: &str) -> Vec<RecipeSummary> {
        self.rate_limiter.acquire().await;

        match self.get_json::<FilterResponse>(FILTER_ENDPOINT, term).await {
            Ok(FilterResponse {
                meals: Some(meals),
            }) => {
                debug!(ingredient = %term, count = meals.len(), "Upstream search succeeded");
                meals.into_iter().map(RecipeSummary::from).collect()
            }
            Ok(FilterResponse { meals: None }) => {
                info!(ingredient = %term, "No recipes found for ingredient");
                Vec::new()
            }
            Err(e) => {
                warn!(ingredient = %term, error = %e, "Upstream search failed");
                Vec::new()
            }
        }
    }

    async fn lookup_by_id(&self, recipe_id: &str) -> Option<MealRecord> {
        match self
            .get_json::<LookupResponse>(LOOKUP_ENDPOINT, recipe_id)
            .await
        {
            Ok(response) => {
                let record = response.meals.and_then(|meals| meals.into_iter().next());
                if record.is_none() {
                    info!(recipe_id = %recipe_id, "Upstream returned no meal for id");
                }
                record
            }
            Err(e) => {
                warn!(recipe_id = %recipe_id, error = %e, "Upstream lookup failed");
                None
            }
        }
    }
}
