// ABOUTME: Session cookie attributes and session store bounds
// ABOUTME: Shared by the cookie signer and the in-memory session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Name of the session cookie
pub const SESSION_COOKIE_NAME: &str = "mealswipe_session";

/// Default maximum number of live sessions held in memory
pub const DEFAULT_SESSION_MAX_ENTRIES: usize = 10_000;

/// Length of a generated session secret in bytes
pub const GENERATED_SECRET_LEN: usize = 32;
