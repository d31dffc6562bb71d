// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Mealswipe server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

/// Cache-related constants (capacities, TTLs)
pub mod cache;
/// TheMealDB upstream contract and rate limit constants
pub mod mealdb;
/// User-facing messages and placeholder values
pub mod messages;
/// Session cookie and session store constants
pub mod session;

/// Service identification used in structured logs
pub mod service_names {
    /// Default service name
    pub const MEALSWIPE_SERVER: &str = "mealswipe-server";
}

/// HTTP server defaults
pub mod server {
    /// Default HTTP port (matches the port the web client expects)
    pub const DEFAULT_HTTP_PORT: u16 = 5001;
}
