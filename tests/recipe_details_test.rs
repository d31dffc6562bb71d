// ABOUTME: Integration tests for cached recipe detail enrichment
// ABOUTME: Verifies cache hits, placeholder handling and sustainability scoring
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_detail_fetcher, ScriptedRecipeSource};
use mealswipe_server::{
    constants::messages::{INGREDIENTS_UNAVAILABLE, INSTRUCTIONS_UNAVAILABLE},
    models::SustainabilityScore,
};
use serde_json::json;
use std::sync::Arc;

fn beef_stew_source() -> ScriptedRecipeSource {
    ScriptedRecipeSource::new().with_meal(
        "52874",
        json!({
            "idMeal": "52874",
            "strMeal": "Beef and Mustard Pie",
            "strInstructions": "Brown the beef, then bake.",
            "strIngredient1": "Beef",
            "strMeasure1": "1kg",
            "strIngredient2": "Plain Flour",
            "strMeasure2": "2 tbs",
            "strIngredient3": "Carrots",
            "strMeasure3": "3 chopped",
            "strIngredient4": "",
            "strMeasure4": "",
        }),
    )
}

#[tokio::test]
async fn test_details_are_cached_after_first_lookup() -> Result<()> {
    let source = Arc::new(beef_stew_source());
    let fetcher = create_detail_fetcher(source.clone()).await?;

    let first = fetcher.get_details("52874").await;
    let second = fetcher.get_details("52874").await;

    assert_eq!(first, second);
    assert_eq!(source.lookup_calls(), 1);
    assert_eq!(
        first.ingredients,
        vec!["Beef 1kg", "Plain Flour 2 tbs", "Carrots 3 chopped"]
    );
    assert_eq!(first.instructions, "Brown the beef, then bake.");
    Ok(())
}

#[tokio::test]
async fn test_score_reflects_meat_and_produce() -> Result<()> {
    let source = Arc::new(beef_stew_source().with_meal(
        "1",
        json!({
            "strInstructions": "Roast.",
            "strIngredient1": "Roasted vegetables",
            "strMeasure1": "500g",
            "strIngredient2": "Pork belly",
            "strMeasure2": "1kg",
            "strIngredient3": "Dried fruit mix",
            "strMeasure3": "50g",
        }),
    ));
    let fetcher = create_detail_fetcher(source).await?;

    // Beef -20 only: no line mentions vegetable or fruit
    let stew = fetcher.get_details("52874").await;
    assert_eq!(stew.sustainability_score, SustainabilityScore::Rated(80));

    // +5 -20 +5
    let roast = fetcher.get_details("1").await;
    assert_eq!(roast.sustainability_score, SustainabilityScore::Rated(90));
    Ok(())
}

#[tokio::test]
async fn test_unavailable_details_use_placeholder_and_are_not_cached() -> Result<()> {
    let source = Arc::new(ScriptedRecipeSource::new().with_unavailable("404"));
    let fetcher = create_detail_fetcher(source.clone()).await?;

    let detail = fetcher.get_details("404").await;
    assert_eq!(detail.ingredients, vec![INGREDIENTS_UNAVAILABLE]);
    assert_eq!(detail.instructions, INSTRUCTIONS_UNAVAILABLE);
    assert_eq!(detail.sustainability_score, SustainabilityScore::Unknown);

    fetcher.get_details("404").await;
    assert_eq!(source.lookup_calls(), 2);
    Ok(())
}

#[tokio::test]
async fn test_missing_instructions_and_ingredients_fall_back() -> Result<()> {
    let source = Arc::new(ScriptedRecipeSource::new().with_meal(
        "7",
        json!({
            "strMeal": "Mystery",
            "strInstructions": null,
        }),
    ));
    let fetcher = create_detail_fetcher(source).await?;

    let detail = fetcher.get_details("7").await;
    assert_eq!(detail.instructions, INSTRUCTIONS_UNAVAILABLE);
    assert_eq!(detail.ingredients, vec![INGREDIENTS_UNAVAILABLE]);
    assert_eq!(detail.sustainability_score, SustainabilityScore::Rated(100));
    Ok(())
}
