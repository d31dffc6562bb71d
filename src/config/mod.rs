// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Mealswipe server
//!
//! All settings come from environment variables; see [`ServerConfig::from_env`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CacheSettings, CorsConfig, Environment, MealDbConfig, ServerConfig, SessionConfig,
};
