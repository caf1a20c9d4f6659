mod common;

use axum::http::{header, StatusCode};
use chrono::{DateTime, Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

// Matches src/infra/seed_data/products.json.
const SEEDED_PRODUCTS: usize = 5;

#[tokio::test]
async fn test_list_returns_seeded_products() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    let response = app.get("/api/v1/products", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    let products = body.as_array().expect("expected an array");
    assert_eq!(products.len(), SEEDED_PRODUCTS);
}

#[tokio::test]
async fn test_empty_list_maps_to_not_found() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    // Preserved behavior: zero rows is reported as 404, not an empty array.
    sqlx::query("DELETE FROM products").execute(&app.pool).await.unwrap();
    sqlx::query("DELETE FROM product_details").execute(&app.pool).await.unwrap();

    let response = app.get("/api/v1/products", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    let arrival = Utc::now() + Duration::days(14);
    let before = Utc::now();

    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({
            "product_name": "Widget",
            "in_stock": true,
            "arrival_date": arrival.to_rfc3339(),
        }),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let created = parse_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/v1/products/{id}"));

    let response = app.get(&location, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = parse_body(response).await;
    assert_eq!(fetched["name"], "Widget");
    assert_eq!(fetched["in_stock"], true);

    let fetched_arrival: DateTime<Utc> =
        fetched["arrival_date"].as_str().unwrap().parse().unwrap();
    assert!((fetched_arrival - arrival).num_seconds().abs() < 1);

    let date_added: DateTime<Utc> =
        fetched["date_added"].as_str().unwrap().parse().unwrap();
    assert!(date_added >= before - Duration::seconds(5));
    assert!(date_added <= Utc::now() + Duration::seconds(5));
}

#[tokio::test]
async fn test_update_touches_only_stock_fields() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "Gadget", "in_stock": true, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_body(response).await;
    let id = created["id"].as_i64().unwrap();
    let original_date_added = created["date_added"].as_str().unwrap().to_string();

    let new_arrival = Utc::now() + Duration::days(30);
    let response = app.put_json(
        "/api/v1/products",
        &token,
        &json!({
            "product_id": id,
            "in_stock": false,
            "arrival_date": new_arrival.to_rfc3339(),
        }),
    ).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched = parse_body(app.get(&format!("/api/v1/products/{id}"), &token).await).await;
    assert_eq!(fetched["name"], "Gadget");
    assert_eq!(fetched["in_stock"], false);
    assert_eq!(fetched["date_added"].as_str().unwrap(), original_date_added);

    let fetched_arrival: DateTime<Utc> =
        fetched["arrival_date"].as_str().unwrap().parse().unwrap();
    assert!((fetched_arrival - new_arrival).num_seconds().abs() < 1);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_and_store_unchanged() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    let before = parse_body(app.get("/api/v1/products", &token).await).await;

    let response = app.put_json(
        "/api/v1/products",
        &token,
        &json!({ "product_id": 999_999, "in_stock": false, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after = parse_body(app.get("/api/v1/products", &token).await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_get_missing_id_is_not_found() {
    let app = TestApp::new().await;
    let (token, _) = app.login("viewer", "viewer123").await;

    let response = app.get("/api/v1/products/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_each_listed_product_is_retrievable_with_identical_fields() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    for name in ["Cable", "Adapter", "Charger"] {
        let response = app.post_json(
            "/api/v1/products",
            &token,
            &json!({ "product_name": name, "in_stock": true, "arrival_date": null }),
        ).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = parse_body(app.get("/api/v1/products", &token).await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), SEEDED_PRODUCTS + 3);

    for entry in listed {
        let id = entry["id"].as_i64().unwrap();
        let single = parse_body(app.get(&format!("/api/v1/products/{id}"), &token).await).await;
        assert_eq!(&single, entry);
    }
}

#[tokio::test]
async fn test_viewer_can_read_but_not_write() {
    let app = TestApp::new().await;
    let (token, role) = app.login("viewer", "viewer123").await;
    assert_eq!(role, "Viewer");

    let response = app.get("/api/v1/products", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = parse_body(response).await;
    let id = listed.as_array().unwrap()[0]["id"].as_i64().unwrap();
    let response = app.get(&format!("/api/v1/products/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "Sneaky", "in_stock": true, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.put_json(
        "/api/v1/products",
        &token,
        &json!({ "product_id": id, "in_stock": false, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    // in_stock omitted entirely
    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "Widget" }),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // arrival_date present but not a date
    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "Widget", "in_stock": true, "arrival_date": "not-a-date" }),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // update without a product_id
    let response = app.put_json(
        "/api/v1/products",
        &token,
        &json!({ "in_stock": false }),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_validation_rules() {
    let app = TestApp::new().await;
    let (token, _) = app.login("admin", "admin123").await;

    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "   ", "in_stock": true, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "x".repeat(21), "in_stock": true, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("20 characters"));

    // Exactly at the limit is allowed.
    let response = app.post_json(
        "/api/v1/products",
        &token,
        &json!({ "product_name": "x".repeat(20), "in_stock": true, "arrival_date": null }),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
