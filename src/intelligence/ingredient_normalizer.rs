// ABOUTME: Ingredient normalization combining spelling correction and synonym resolution
// ABOUTME: Memoizes canonical forms in a bounded LRU cache and counts lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::spelling::SpellCorrector;
use crate::cache::{factory::Cache, CacheConfig, CacheKey};
use crate::errors::AppResult;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Regional ingredient names mapped to the term the upstream indexes
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("scallion", "green onion"),
        ("capsicum", "bell pepper"),
        ("coriander", "cilantro"),
        ("aubergine", "eggplant"),
        ("courgette", "zucchini"),
        ("rocket", "arugula"),
    ])
});

/// Memoization counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizerStats {
    /// Calls to [`IngredientNormalizer::canonicalize`]
    pub lookups: u64,
    /// Lookups that missed the memo and ran correction
    pub computations: u64,
}

/// Turns raw user tokens into canonical search terms
pub struct IngredientNormalizer {
    corrector: SpellCorrector,
    memo: Cache,
    lookups: AtomicU64,
    computations: AtomicU64,
}

impl IngredientNormalizer {
    /// Create a normalizer with the built-in dictionary and a memo of `max_entries`
    ///
    /// # Errors
    ///
    /// Returns an error if the memo cache cannot be created
    pub async fn new(max_entries: usize) -> AppResult<Self> {
        Self::with_corrector(SpellCorrector::default(), max_entries).await
    }

    /// Create a normalizer over a custom corrector
    ///
    /// # Errors
    ///
    /// Returns an error if the memo cache cannot be created
    pub async fn with_corrector(corrector: SpellCorrector, max_entries: usize) -> AppResult<Self> {
        let memo = Cache::new(CacheConfig {
            max_entries,
            cleanup_interval: None,
        })
        .await?;

        debug!(
            vocabulary = corrector.vocabulary_size(),
            memo_capacity = max_entries,
            "Ingredient normalizer ready"
        );

        Ok(Self {
            corrector,
            memo,
            lookups: AtomicU64::new(0),
            computations: AtomicU64::new(0),
        })
    }

    /// Canonical form of a single raw token, memoized
    ///
    /// The token is trimmed and lower-cased first; an empty result stays empty.
    pub async fn canonicalize(&self, raw: &str) -> String {
        let token = raw.trim().to_lowercase();
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let key = CacheKey::canonical_ingredient(token.as_str());
        match self.memo.get::<String>(&key).await {
            Ok(Some(canonical)) => return canonical,
            Ok(None) => {}
            Err(e) => warn!(token = %token, error = %e, "Ingredient memo read failed"),
        }

        self.computations.fetch_add(1, Ordering::Relaxed);
        let canonical = self.resolve(&token);
        if canonical != token {
            debug!(raw = %token, canonical = %canonical, "Normalized ingredient");
        }

        if let Err(e) = self.memo.set(&key, &canonical, None).await {
            warn!(token = %token, error = %e, "Ingredient memo write failed");
        }
        canonical
    }

    /// Canonical ingredients from a comma-separated list
    ///
    /// Empty tokens are skipped and duplicates after normalization dropped,
    /// keeping the first occurrence in input order.
    pub async fn canonicalize_list(&self, raw_list: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut canonical = Vec::new();

        for token in raw_list.split(',').filter(|t| !t.trim().is_empty()) {
            let ingredient = self.canonicalize(token).await;
            if !ingredient.is_empty() && seen.insert(ingredient.clone()) {
                canonical.push(ingredient);
            }
        }

        canonical
    }

    /// Spell-correct then substitute a synonym, without memoization
    #[must_use]
    pub fn resolve(&self, token: &str) -> String {
        let corrected = self.corrector.correct_phrase(token);
        SYNONYMS
            .get(corrected.as_str())
            .map_or(corrected, |synonym| (*synonym).to_owned())
    }

    /// Current memoization counters
    #[must_use]
    pub fn stats(&self) -> NormalizerStats {
        NormalizerStats {
            lookups: self.lookups.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_synonym_applied_after_correction() -> AppResult<()> {
        let normalizer = IngredientNormalizer::new(16).await?;

        assert_eq!(normalizer.canonicalize("scallion").await, "green onion");
        assert_eq!(normalizer.canonicalize("  Courgete ").await, "zucchini");
        assert_eq!(normalizer.canonicalize("chiken").await, "chicken");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_passes_through() -> AppResult<()> {
        let normalizer = IngredientNormalizer::new(16).await?;
        assert_eq!(normalizer.canonicalize("xyzzyq").await, "xyzzyq");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_dedupes_after_normalization() -> AppResult<()> {
        let normalizer = IngredientNormalizer::new(16).await?;

        let list = normalizer
            .canonicalize_list("Chicken, rice,, chiken ,coriander, cilantro")
            .await;
        assert_eq!(list, vec!["chicken", "rice", "cilantro"]);
        Ok(())
    }
}
