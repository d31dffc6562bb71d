// ABOUTME: Re-exports the unified error system from the core crate
// ABOUTME: Keeps `crate::errors` paths stable for server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! See [`mealswipe_core::errors`] for the definitions.

pub use mealswipe_core::errors::*;
