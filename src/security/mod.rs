// ABOUTME: Security module for session cookie signing and verification
// ABOUTME: Re-exports the session secret and cookie manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Signed session cookies
pub mod cookies;

pub use cookies::{get_cookie_value, SessionCookieManager, SessionSecret};
