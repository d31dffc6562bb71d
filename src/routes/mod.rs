// ABOUTME: Route module organization for Mealswipe server HTTP endpoints
// ABOUTME: Composes domain routers and applies CORS and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Mealswipe server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Recipe presentation and feedback routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::{FeedbackRequest, RecipeRoutes, RecipesQuery};

use crate::context::ServerResources;
use crate::middleware::{request_trace_layer, setup_cors};
use axum::Router;
use std::sync::Arc;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources))
        .layer(cors)
        .layer(request_trace_layer())
}
