// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request span creation and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{request_trace_layer, RequestSpan};
