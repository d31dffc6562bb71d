// ABOUTME: Recipe data models shared by the upstream client, caches and routes
// ABOUTME: Defines RecipeSummary, RecipeDetail, RecipeCard and SustainabilityScore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::{
    INGREDIENTS_UNAVAILABLE, INSTRUCTIONS_UNAVAILABLE, PLACEHOLDER_IMAGE_URL,
    UNKNOWN_RECIPE_TITLE,
};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimal recipe record returned by a search-by-ingredient call
///
/// `id` is the only stable identity; title and thumbnail are display hints
/// that the upstream occasionally omits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Upstream recipe identifier
    pub id: String,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Thumbnail image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl RecipeSummary {
    /// Create a summary with all display fields present
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            thumbnail_url: Some(thumbnail.into()),
        }
    }

    /// Title, or the generic placeholder when the upstream sent none
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_RECIPE_TITLE)
    }

    /// Thumbnail, or the placeholder image when the upstream sent none
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// Heuristic sustainability score
///
/// Serialized as a bare integer, or as the string `"Unknown"` when the
/// recipe details could not be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SustainabilityScore {
    /// Score clamped to `0..=100`
    Rated(u8),
    /// Details unavailable, score not computed
    Unknown,
}

impl SustainabilityScore {
    /// Literal used on the wire for [`SustainabilityScore::Unknown`]
    pub const UNKNOWN_LABEL: &'static str = "Unknown";

    /// Numeric value when rated
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::Rated(score) => Some(*score),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for SustainabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rated(score) => write!(f, "{score}"),
            Self::Unknown => f.write_str(Self::UNKNOWN_LABEL),
        }
    }
}

impl Serialize for SustainabilityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rated(score) => serializer.serialize_u8(*score),
            Self::Unknown => serializer.serialize_str(Self::UNKNOWN_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for SustainabilityScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreVisitor;

        impl Visitor<'_> for ScoreVisitor {
            type Value = SustainabilityScore;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer between 0 and 100 or \"Unknown\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u8::try_from(v)
                    .ok()
                    .filter(|score| *score <= 100)
                    .map(SustainabilityScore::Rated)
                    .ok_or_else(|| E::custom(format!("score {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("score {v} out of range")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == SustainabilityScore::UNKNOWN_LABEL {
                    Ok(SustainabilityScore::Unknown)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(ScoreVisitor)
    }
}

/// Enriched recipe detail derived from an upstream lookup
///
/// Immutable once computed; cached process-wide keyed by recipe id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Ordered `"name quantity"` lines
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Heuristic sustainability score
    pub sustainability_score: SustainabilityScore,
}

impl RecipeDetail {
    /// Placeholder returned when the upstream lookup fails
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            ingredients: vec![INGREDIENTS_UNAVAILABLE.to_owned()],
            instructions: INSTRUCTIONS_UNAVAILABLE.to_owned(),
            sustainability_score: SustainabilityScore::Unknown,
        }
    }
}

/// Presentation of a single recipe as rendered by the swipe client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCard {
    /// Upstream recipe identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Thumbnail URL
    pub image: String,
    /// Ordered `"name quantity"` lines
    pub ingredients: Vec<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Heuristic sustainability score
    pub sustainability_score: SustainabilityScore,
}

impl RecipeCard {
    /// Combine a search summary with its enriched detail
    #[must_use]
    pub fn compose(summary: &RecipeSummary, detail: RecipeDetail) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.display_title().to_owned(),
            image: summary.display_image().to_owned(),
            ingredients: detail.ingredients,
            instructions: detail.instructions,
            sustainability_score: detail.sustainability_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_serializes_as_number_or_unknown() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&SustainabilityScore::Rated(80))?, "80");
        assert_eq!(
            serde_json::to_string(&SustainabilityScore::Unknown)?,
            "\"Unknown\""
        );

        let rated: SustainabilityScore = serde_json::from_str("95")?;
        assert_eq!(rated, SustainabilityScore::Rated(95));
        let unknown: SustainabilityScore = serde_json::from_str("\"Unknown\"")?;
        assert_eq!(unknown, SustainabilityScore::Unknown);
        assert!(serde_json::from_str::<SustainabilityScore>("101").is_err());
        Ok(())
    }

    #[test]
    fn test_card_falls_back_to_placeholders() {
        let summary = RecipeSummary {
            id: "52772".to_owned(),
            title: None,
            thumbnail_url: None,
        };
        let card = RecipeCard::compose(&summary, RecipeDetail::unavailable());

        assert_eq!(card.title, UNKNOWN_RECIPE_TITLE);
        assert_eq!(card.image, PLACEHOLDER_IMAGE_URL);
        assert_eq!(card.ingredients, vec![INGREDIENTS_UNAVAILABLE.to_owned()]);
        assert_eq!(card.sustainability_score, SustainabilityScore::Unknown);
    }
}
