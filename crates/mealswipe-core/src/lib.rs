// ABOUTME: Core types and constants for the Mealswipe recipe discovery server
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealswipe Core
//!
//! Foundation crate providing shared types and constants for the Mealswipe
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Recipe summaries, enriched details and sustainability scores

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core recipe data models
pub mod models;
