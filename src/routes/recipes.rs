// ABOUTME: Recipe swipe route handlers for recipe presentation and feedback
// ABOUTME: Resolves the signed session cookie and delegates to the recipe queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe swipe routes
//!
//! - `GET /recipes?ingredients=a,b` presents the current recipe for the
//!   ingredient set, issuing a session cookie on first contact
//! - `POST /feedback` with `{"feedback": "yes" | "no"}` accepts or skips it

use crate::constants::messages::{
    FEEDBACK_ACCEPTED, INGREDIENTS_INVALID, INGREDIENTS_REQUIRED, NO_MORE_RECIPES,
    SESSION_DATA_MISSING,
};
use crate::context::ServerResources;
use crate::errors::{AppError, AppResult};
use crate::models::RecipeCard;
use crate::services::QueueOutcome;
use crate::sessions::SessionId;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Query parameters for `GET /recipes`
#[derive(Debug, Deserialize)]
pub struct RecipesQuery {
    /// Comma-separated raw ingredient names
    pub ingredients: Option<String>,
}

/// Body of `POST /feedback`
///
/// Any JSON value is accepted for `feedback` so a wrong type is reported as
/// invalid feedback rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackRequest {
    /// Expected `"yes"` or `"no"`
    #[serde(default)]
    pub feedback: Option<Value>,
}

/// Plain message body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Body returned when a recipe is accepted
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackAcceptedResponse {
    /// Acknowledgement
    pub message: String,
    /// The accepted recipe in full
    pub recipe: RecipeCard,
}

/// Recipe swipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe swipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", get(Self::handle_get_recipe))
            .route("/feedback", post(Self::handle_feedback))
            .with_state(resources)
    }

    /// Handle `GET /recipes`
    async fn handle_get_recipe(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<RecipesQuery>,
    ) -> Result<Response, AppError> {
        let raw = params
            .ingredients
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| AppError::invalid_ingredients(INGREDIENTS_REQUIRED))?;
        info!(ingredients = %raw, "Received ingredients");

        let ingredients = resources.normalizer.canonicalize_list(&raw).await;
        if ingredients.is_empty() {
            return Err(AppError::invalid_ingredients(INGREDIENTS_INVALID));
        }
        info!(?ingredients, "Processed ingredient list");

        let existing = resources.cookies.session_from_headers(&headers);
        let session = existing.unwrap_or_else(SessionId::generate);

        let outcome = resources
            .recipe_queue
            .current_recipe(session, &ingredients)
            .await?;

        let mut response = outcome_response(outcome);
        if existing.is_none() {
            attach_session_cookie(&resources, &session, &mut response)?;
        }
        Ok(response)
    }

    /// Handle `POST /feedback`
    async fn handle_feedback(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let session = resources
            .cookies
            .session_from_headers(&headers)
            .ok_or_else(|| AppError::session_missing(SESSION_DATA_MISSING))?;

        let request: FeedbackRequest = serde_json::from_slice(&body).unwrap_or_default();
        let feedback = request.feedback.as_ref().and_then(Value::as_str);

        let outcome = resources
            .recipe_queue
            .submit_feedback(session, feedback)
            .await?;

        Ok(outcome_response(outcome))
    }
}

/// Map a queue outcome to its HTTP response
fn outcome_response(outcome: QueueOutcome) -> Response {
    match outcome {
        QueueOutcome::Recipe(card) => (StatusCode::OK, Json(card)).into_response(),
        QueueOutcome::Accepted(card) => (
            StatusCode::OK,
            Json(FeedbackAcceptedResponse {
                message: FEEDBACK_ACCEPTED.to_owned(),
                recipe: card,
            }),
        )
            .into_response(),
        QueueOutcome::Exhausted => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: NO_MORE_RECIPES.to_owned(),
            }),
        )
            .into_response(),
    }
}

fn attach_session_cookie(
    resources: &ServerResources,
    session: &SessionId,
    response: &mut Response,
) -> AppResult<()> {
    let cookie = HeaderValue::from_str(&resources.cookies.set_cookie_header(session))
        .map_err(|e| AppError::internal(format!("Invalid session cookie header: {e}")))?;
    response.headers_mut().append(header::SET_COOKIE, cookie);
    Ok(())
}
