// ABOUTME: Dictionary-based spelling correction for ingredient tokens
// ABOUTME: Frequency-weighted candidates ranked by optimal string alignment distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Largest edit distance a correction may span
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Words up to this many characters are corrected by at most one edit
pub const SHORT_WORD_LEN: usize = 5;

/// Words shorter than this are never corrected
pub const MIN_CORRECTABLE_LEN: usize = 4;

/// English and culinary word frequency list, one `word frequency` pair per line
const DICTIONARY_SOURCE: &str = include_str!("dictionary.txt");

static DEFAULT_DICTIONARY: LazyLock<Vec<(&'static str, u32)>> =
    LazyLock::new(|| parse_dictionary(DICTIONARY_SOURCE).collect());

/// Parse `word frequency` lines, skipping comments and malformed entries
fn parse_dictionary(source: &'static str) -> impl Iterator<Item = (&'static str, u32)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (word, frequency) = line.split_once(' ')?;
            Some((word, frequency.trim().parse().ok()?))
        })
}

/// Edit distance allowed when correcting a word of `len` characters
#[must_use]
pub const fn max_distance_for(len: usize) -> usize {
    if len <= SHORT_WORD_LEN {
        1
    } else {
        MAX_EDIT_DISTANCE
    }
}

/// Frequency-weighted spelling corrector
#[derive(Debug, Clone)]
pub struct SpellCorrector {
    words: HashMap<&'static str, u32>,
    by_length: BTreeMap<usize, Vec<(&'static str, u32)>>,
}

impl Default for SpellCorrector {
    fn default() -> Self {
        Self::with_default_dictionary()
    }
}

impl SpellCorrector {
    /// Corrector over the built-in English and culinary dictionary
    #[must_use]
    pub fn with_default_dictionary() -> Self {
        Self::from_words(DEFAULT_DICTIONARY.iter().copied())
    }

    /// Corrector over a custom vocabulary
    pub fn from_words(words: impl IntoIterator<Item = (&'static str, u32)>) -> Self {
        let words: HashMap<&'static str, u32> = words.into_iter().collect();
        let mut by_length: BTreeMap<usize, Vec<(&'static str, u32)>> = BTreeMap::new();
        for (word, frequency) in &words {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push((*word, *frequency));
        }
        Self { words, by_length }
    }

    /// Number of words in the vocabulary
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.words.len()
    }

    /// Whether a word is in the vocabulary
    #[must_use]
    pub fn is_known(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Correct a single lower-case word
    ///
    /// Known words, short words and words with non-alphabetic characters are
    /// returned unchanged, as are words with no candidate within
    /// [`max_distance_for`] their length.
    #[must_use]
    pub fn correct_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let word_len = word.chars().count();
        if self.is_known(word)
            || word_len < MIN_CORRECTABLE_LEN
            || !word.chars().all(char::is_alphabetic)
        {
            return Cow::Borrowed(word);
        }

        let max_distance = max_distance_for(word_len);
        self.by_length
            .range(word_len.saturating_sub(max_distance)..=word_len + max_distance)
            .flat_map(|(_, bucket)| bucket.iter())
            .filter_map(|(candidate, frequency)| {
                let distance = strsim::osa_distance(word, candidate);
                (distance <= max_distance).then_some((distance, *frequency, *candidate))
            })
            // closest first, then most frequent, then alphabetical
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(b.2)))
            .map_or(Cow::Borrowed(word), |(_, _, candidate)| {
                Cow::Owned(candidate.to_owned())
            })
    }

    /// Correct each whitespace-separated word of a phrase
    #[must_use]
    pub fn correct_phrase(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .map(|word| self.correct_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
