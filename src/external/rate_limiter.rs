// ABOUTME: Sliding-window rate limiter for outbound upstream calls
// ABOUTME: Blocks callers until a slot frees up instead of rejecting them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Rate limiter admitting at most `limit` calls in any trailing `window`
///
/// Timestamps come from `tokio::time`, so tests can drive the limiter with
/// a paused clock.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    calls: Mutex<VecDeque<Instant>>,
    limit: usize,
    window: Duration,
}

impl SlidingWindowLimiter {
    /// Create a limiter; a zero limit is treated as one
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        let limit = (limit as usize).max(1);
        Self {
            calls: Mutex::new(VecDeque::with_capacity(limit)),
            limit,
            window,
        }
    }

    /// Wait until a call is permitted, then record it
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut calls = self.calls.lock().await;
                let now = Instant::now();
                while calls
                    .front()
                    .is_some_and(|&oldest| now.duration_since(oldest) >= self.window)
                {
                    calls.pop_front();
                }

                if calls.len() < self.limit {
                    calls.push_back(now);
                    return;
                }

                // Oldest call leaves the window first
                calls
                    .front()
                    .map_or(Duration::ZERO, |&oldest| {
                        (oldest + self.window).saturating_duration_since(now)
                    })
            };

            tracing::info!(
                wait_ms = wait.as_millis() as u64,
                "Upstream rate limit reached, waiting for a free slot"
            );
            tokio::time::sleep(wait).await;
        }
    }
}
