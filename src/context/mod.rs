// ABOUTME: Dependency injection context shared by all route handlers
// ABOUTME: Re-exports the ServerResources container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Process-scoped resource container
pub mod resources;

pub use resources::ServerResources;
