// ABOUTME: In-memory session store with LRU eviction
// ABOUTME: Bounds the number of live sessions held by the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{SessionId, SessionState, SessionStore};
use crate::constants::session::DEFAULT_SESSION_MAX_ENTRIES;
use crate::errors::AppResult;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;

/// Session store backed by a bounded `LruCache`
pub struct InMemorySessionStore {
    sessions: Mutex<LruCache<SessionId, SessionState>>,
}

impl InMemorySessionStore {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_SESSION_MAX_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store holding at most `max_entries` sessions
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_MAX_ENTRIES)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> AppResult<Option<SessionState>> {
        Ok(self.sessions.lock().await.get(id).cloned())
    }

    async fn put(&self, id: SessionId, state: SessionState) -> AppResult<()> {
        let displaced = self.sessions.lock().await.push(id, state);
        if let Some((evicted, _)) = displaced {
            if evicted != id {
                tracing::debug!(session_id = %evicted, "Evicted least recently used session");
            }
        }
        Ok(())
    }
}
