// ABOUTME: Main library entry point for the Mealswipe recipe discovery server
// ABOUTME: Mediates between a swipe-style client and TheMealDB recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealswipe Server
//!
//! Given a comma-separated list of ingredients, the server normalizes them,
//! searches TheMealDB for recipes using each one, and presents the results
//! one at a time. The client accepts ("yes") or rejects ("no") each recipe;
//! accepted recipes are shown in full, rejected ones advance the queue.
//!
//! ## Architecture
//!
//! - **Intelligence**: ingredient normalization and sustainability scoring
//! - **External**: rate-limited TheMealDB client behind `RecipeSource`
//! - **Services**: cached detail enrichment and the per-session queue
//! - **Sessions**: bounded session store keyed by a signed cookie
//! - **Routes**: axum handlers for `/recipes`, `/feedback` and health checks
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealswipe_server::config::ServerConfig;
//! use mealswipe_server::context::ServerResources;
//! use mealswipe_server::errors::AppResult;
//! use mealswipe_server::routes::build_router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config).await?);
//!     let _router = build_router(resources);
//!     Ok(())
//! }
//! ```

/// Cache abstraction layer with pluggable backends
pub mod cache;

/// Configuration management
pub mod config;

/// Dependency injection context for route handlers
pub mod context;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External API clients (TheMealDB)
pub mod external;

/// Ingredient normalization and sustainability scoring
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// HTTP middleware: CORS and request tracing
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Session cookie signing
pub mod security;

/// Business logic services
pub mod services;

/// Session state and storage
pub mod sessions;

/// Application constants organized by domain
pub use mealswipe_core::constants;

/// Recipe data models
pub use mealswipe_core::models;
