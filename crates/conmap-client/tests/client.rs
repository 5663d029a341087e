//! Integration tests for `StoreClient` using wiremock HTTP mocks.

use std::time::Duration;

use conmap_client::{fetch_selected, CategorySelection, ClientError, FetchGuard, StoreClient};
use conmap_core::{Category, CircleStyle, StorePoint};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StoreClient {
    StoreClient::new(base_url, "test-token", 30).expect("client construction should not fail")
}

fn style(color: &str, radius_m: u32) -> CircleStyle {
    CircleStyle {
        color: color.to_string(),
        radius_m,
    }
}

#[tokio::test]
async fn fetch_category_parses_locations() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "latitude": 19.076, "longitude": 72.8777 },
        { "latitude": 19.0821, "longitude": 72.7411 }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let locations = client
        .fetch_category(Category::Food)
        .await
        .expect("should parse locations");

    assert_eq!(locations.len(), 2);
    assert!((locations[0].latitude - 19.076).abs() < 1e-9);
    assert!((locations[0].longitude - 72.8777).abs() < 1e-9);
}

#[tokio::test]
async fn fetch_category_surfaces_non_2xx() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/lifestyle/all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_category(Category::Lifestyle).await;

    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_category_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_category(Category::Food).await;

    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_selected_merges_both_categories_with_styles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "latitude": 19.076, "longitude": 72.8777 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lifestyle/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "latitude": 19.0821, "longitude": 72.7411 },
            { "latitude": 19.2183, "longitude": 72.9781 }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let selection = CategorySelection {
        food: Some(style("#FF0000", 100)),
        lifestyle: Some(style("#FFFF00", 200)),
    };
    let outcome = fetch_selected(&client, &selection).await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.stores.len(), 3);

    let food: Vec<_> = outcome
        .stores
        .iter()
        .filter(|s| s.category == Category::Food)
        .collect();
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].color, "#FF0000");
    assert_eq!(food[0].radius_m, 100);

    let lifestyle: Vec<_> = outcome
        .stores
        .iter()
        .filter(|s| s.category == Category::Lifestyle)
        .collect();
    assert_eq!(lifestyle.len(), 2);
    assert_eq!(lifestyle[0].radius_m, 200);
}

#[tokio::test]
async fn fetch_selected_degrades_failed_category_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lifestyle/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "latitude": 19.0821, "longitude": 72.7411 }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let selection = CategorySelection {
        food: Some(style("#FF0000", 100)),
        lifestyle: Some(style("#FFFF00", 200)),
    };
    let outcome = fetch_selected(&client, &selection).await;

    assert_eq!(outcome.stores.len(), 1);
    assert_eq!(outcome.stores[0].category, Category::Lifestyle);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].0, Category::Food);
}

#[tokio::test]
async fn fetch_selected_skips_unselected_categories() {
    let server = MockServer::start().await;

    // Only the food endpoint exists; hitting lifestyle would 404 and show up
    // as a failure.
    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "latitude": 19.076, "longitude": 72.8777 }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let selection = CategorySelection {
        food: Some(style("#FF0000", 100)),
        lifestyle: None,
    };
    let outcome = fetch_selected(&client, &selection).await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.stores.len(), 1);
}

#[tokio::test]
async fn stale_fetch_result_is_not_installed() {
    let server = MockServer::start().await;

    // The first request is served slowly with the old data; the follow-up
    // request gets the new data immediately.
    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([
                    { "latitude": 11.0, "longitude": 11.0 }
                ]))
                .set_delay(Duration::from_millis(250)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "latitude": 22.0, "longitude": 22.0 }
        ])))
        .mount(&server)
        .await;

    let selection = CategorySelection {
        food: Some(style("#FF0000", 100)),
        lifestyle: None,
    };

    let guard = FetchGuard::new();
    let mut installed: Option<Vec<StorePoint>> = None;

    let first_generation = guard.begin();
    let first_fetch = tokio::spawn({
        let uri = server.uri();
        let selection = selection.clone();
        async move {
            let client = test_client(&uri);
            fetch_selected(&client, &selection).await
        }
    });
    // Let the slow request reach the server before starting the newer one.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let second_generation = guard.begin();
    let second = fetch_selected(&test_client(&server.uri()), &selection).await;
    if guard.is_current(second_generation) {
        installed = Some(second.stores);
    }

    // The old fetch resolves last; its generation is no longer current, so
    // its result must not overwrite the newer one.
    let first = first_fetch.await.expect("fetch task should not panic");
    assert!((first.stores[0].lat - 11.0).abs() < 1e-9);
    assert!(!guard.is_current(first_generation));
    if guard.is_current(first_generation) {
        installed = Some(first.stores);
    }

    let installed = installed.expect("newest fetch should have been installed");
    assert_eq!(installed.len(), 1);
    assert!((installed[0].lat - 22.0).abs() < 1e-9);
}

#[tokio::test]
async fn base_url_with_trailing_slash_is_normalised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/food/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/", server.uri()));
    let locations = client.fetch_category(Category::Food).await.unwrap();
    assert!(locations.is_empty());
}
