// ABOUTME: Heuristic sustainability scoring for recipe ingredient lists
// ABOUTME: Penalizes high-impact proteins and rewards plant-based ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Score every recipe starts from
pub const BASE_SCORE: i32 = 100;

/// Deduction per line mentioning a high-impact protein
pub const HIGH_IMPACT_PENALTY: i32 = 20;

/// Bonus per line mentioning a plant-based category
pub const PLANT_BASED_BONUS: i32 = 5;

/// Substrings marking a high-impact protein
const HIGH_IMPACT_MARKERS: &[&str] = &["beef", "pork"];

/// Substrings marking a plant-based ingredient
const PLANT_BASED_MARKERS: &[&str] = &["vegetable", "fruit"];

/// Score an ingredient list on a 0-100 scale
///
/// Each line is checked case-insensitively. A line mentioning a high-impact
/// protein costs [`HIGH_IMPACT_PENALTY`] and is not also considered for the
/// plant-based bonus. The total is clamped to `0..=100`, so an empty list
/// scores 100.
#[must_use]
pub fn sustainability_score<S: AsRef<str>>(ingredients: &[S]) -> u8 {
    let total = ingredients
        .iter()
        .map(|line| line_adjustment(line.as_ref()))
        .fold(BASE_SCORE, i32::saturating_add);

    total.clamp(0, 100) as u8
}

fn line_adjustment(line: &str) -> i32 {
    let line = line.to_lowercase();
    if HIGH_IMPACT_MARKERS.iter().any(|marker| line.contains(marker)) {
        -HIGH_IMPACT_PENALTY
    } else if PLANT_BASED_MARKERS.iter().any(|marker| line.contains(marker)) {
        PLANT_BASED_BONUS
    } else {
        0
    }
}
