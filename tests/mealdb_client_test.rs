// ABOUTME: Integration tests for the TheMealDB client against a mock HTTP server
// ABOUTME: Covers search and lookup decoding, graceful degradation and rate limiting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use mealswipe_server::{
    config::MealDbConfig,
    external::{MealDbClient, RecipeSource},
};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Result<MealDbClient> {
    common::init_test_logging();
    let config = MealDbConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        ..MealDbConfig::default()
    };
    Ok(MealDbClient::new(&config)?)
}

#[tokio::test]
async fn test_search_decodes_summaries() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("i", "chicken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meals": [
                {
                    "idMeal": "52795",
                    "strMeal": "Chicken Handi",
                    "strMealThumb": "https://www.themealdb.com/images/media/meals/wyxwsp1486979827.jpg"
                },
                { "idMeal": "52796", "strMeal": "Chicken Alfredo Primavera" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let recipes = client.search_by_ingredient("chicken").await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, "52795");
    assert_eq!(recipes[0].display_title(), "Chicken Handi");
    assert_eq!(recipes[1].id, "52796");
    assert!(recipes[1].thumbnail_url.is_none());
    Ok(())
}

#[tokio::test]
async fn test_search_with_null_meals_is_empty() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    assert!(client.search_by_ingredient("unobtainium").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_degrades_on_server_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    assert!(client.search_by_ingredient("chicken").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_degrades_on_malformed_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    assert!(client.search_by_ingredient("chicken").await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_lookup_returns_first_meal() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strInstructions": "Preheat oven to 350F.",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": "",
                "strMeasure2": null
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let meal = client.lookup_by_id("52772").await.expect("meal present");

    assert_eq!(meal.title(), Some("Teriyaki Chicken Casserole"));
    assert_eq!(meal.instructions(), Some("Preheat oven to 350F."));
    assert_eq!(meal.ingredient_slot(1), (Some("soy sauce"), Some("3/4 cup")));
    assert_eq!(meal.ingredient_slot(2), (Some(""), None));
    Ok(())
}

#[tokio::test]
async fn test_lookup_unavailable_is_none() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    assert!(client.lookup_by_id("missing").await.is_none());
    assert!(client.lookup_by_id("broken").await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_searches_wait_for_rate_limit_window() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .expect(3)
        .mount(&server)
        .await;

    let config = MealDbConfig {
        base_url: server.uri(),
        rate_limit_calls: 2,
        rate_limit_window: Duration::from_millis(300),
        ..MealDbConfig::default()
    };
    let client = MealDbClient::new(&config)?;

    let started = Instant::now();
    for term in ["a", "b", "c"] {
        client.search_by_ingredient(term).await;
    }

    assert!(
        started.elapsed() >= Duration::from_millis(290),
        "third search should wait for the window, took {:?}",
        started.elapsed()
    );
    Ok(())
}
