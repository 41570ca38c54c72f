use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use cafe_orders::{handler::AppRouter, state::AppState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

async fn test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    AppRouter::build(AppState::new(pool))
}

async fn request(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

async fn create_order(app: &Router, body: Value) -> i64 {
    let (status, value) = request(app, "POST", "/api/orders/", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    value["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_order_computes_total() {
    let app = test_app().await;

    let id = create_order(
        &app,
        json!({
            "table_number": 5,
            "items": [
                {"name": "Pizza", "price": 12.0},
                {"name": "Juice", "price": 3.5}
            ]
        }),
    )
    .await;

    let (status, order) = request(&app, "GET", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["table_number"], 5);
    assert_eq!(order["status"], "waiting");
    assert_eq!(order["total_price"], 15.5);
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_order_with_empty_items() {
    let app = test_app().await;

    let id = create_order(&app, json!({"table_number": 2})).await;

    let (status, order) = request(&app, "GET", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["total_price"], 0.0);
    assert_eq!(order["items"], json!([]));
}

#[tokio::test]
async fn test_create_order_rejects_bad_payload() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/orders/",
        Some(json!({"table_number": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Table number must be a positive integer");

    // unknown lifecycle value fails deserialization
    let (status, _) = request(
        &app,
        "POST",
        "/api/orders/",
        Some(json!({"table_number": 1, "status": "cooked"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_orders_ascending_with_filters() {
    let app = test_app().await;

    create_order(&app, json!({"table_number": 5, "status": "paid"})).await;
    create_order(&app, json!({"table_number": 5, "status": "waiting"})).await;
    create_order(&app, json!({"table_number": 7, "status": "paid"})).await;

    let (status, all) = request(&app, "GET", "/api/orders/", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let (status, filtered) = request(
        &app,
        "GET",
        "/api/orders/?table_number=5&status=paid",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap().clone();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], 1);

    let (status, _) = request(&app, "GET", "/api/orders/?status=cooked", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blank_query_values_are_treated_as_absent() {
    let app = test_app().await;

    create_order(
        &app,
        json!({"table_number": 5, "status": "paid", "items": [{"name": "Steak", "price": 15.0}]}),
    )
    .await;
    create_order(&app, json!({"table_number": 6, "status": "waiting"})).await;

    // blank filter values match everything, same as leaving them off
    let (status, all) = request(&app, "GET", "/api/orders/?table_number=&status=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, body) = request(&app, "GET", "/api/revenue/?date_from=&date_to=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 15.0);
}

#[tokio::test]
async fn test_update_status() {
    let app = test_app().await;

    let id = create_order(
        &app,
        json!({"table_number": 3, "items": [{"name": "Tea", "price": 2.0}]}),
    )
    .await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/orders/{id}/"),
        Some(json!({"status": "ready"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Status updated");

    // status changed, the rest of the order untouched
    let (_, order) = request(&app, "GET", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(order["status"], "ready");
    assert_eq!(order["total_price"], 2.0);
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value() {
    let app = test_app().await;

    let id = create_order(&app, json!({"table_number": 1})).await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/orders/{id}/"),
        Some(json!({"status": "cooked"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status");

    let (_, order) = request(&app, "GET", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(order["status"], "waiting");
}

#[tokio::test]
async fn test_update_status_unknown_order_is_404() {
    let app = test_app().await;

    let (status, _) = request(
        &app,
        "PATCH",
        "/api/orders/99/",
        Some(json!({"status": "cooked"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_order() {
    let app = test_app().await;

    let id = create_order(&app, json!({"table_number": 4})).await;

    let (status, body) = request(&app, "DELETE", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = request(&app, "GET", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = request(&app, "GET", "/api/orders/", None).await;
    assert_eq!(all.as_array().unwrap().len(), 0);

    let (status, _) = request(&app, "DELETE", &format!("/api/orders/{id}/"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_lists_seeded_catalog_by_name() {
    let app = test_app().await;

    let (status, menu) = request(&app, "GET", "/api/menu/", None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Borscht",
            "Caesar Salad",
            "Espresso",
            "Grilled Salmon",
            "Tiramisu"
        ]
    );
    assert_eq!(menu[0]["category"], "Soups");
    assert_eq!(menu[0]["price"], 7.5);
}

#[tokio::test]
async fn test_revenue_sums_paid_orders_only() {
    let app = test_app().await;

    create_order(
        &app,
        json!({"table_number": 1, "status": "paid", "items": [{"name": "Steak", "price": 15.0}]}),
    )
    .await;
    create_order(
        &app,
        json!({"table_number": 2, "status": "paid", "items": [{"name": "Salad", "price": 8.0}]}),
    )
    .await;
    create_order(
        &app,
        json!({"table_number": 3, "status": "waiting", "items": [{"name": "Cake", "price": 100.0}]}),
    )
    .await;

    let (status, body) = request(&app, "GET", "/api/revenue/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 23.0);

    let (status, body) = request(&app, "GET", "/api/revenue/?date_from=2000-01-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 23.0);

    let (status, body) = request(&app, "GET", "/api/revenue/?date_to=2000-01-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], 0.0);

    let (status, body) = request(&app, "GET", "/api/revenue/?date_from=yesterday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid date"));
}

#[tokio::test]
async fn test_statistics_counts_and_average() {
    let app = test_app().await;

    create_order(
        &app,
        json!({"table_number": 1, "status": "waiting", "items": [{"name": "Soup", "price": 12.0}]}),
    )
    .await;
    create_order(
        &app,
        json!({"table_number": 2, "status": "paid", "items": [{"name": "Fish", "price": 10.0}]}),
    )
    .await;

    let (status, body) = request(&app, "GET", "/api/statistics/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["status_counts"],
        json!({"waiting": 1, "ready": 0, "paid": 1})
    );
    assert_eq!(body["total_orders"], 2);
    assert_eq!(body["average_order_value"], 10.0);
}

#[tokio::test]
async fn test_statistics_empty_database() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/api/statistics/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["status_counts"],
        json!({"waiting": 0, "ready": 0, "paid": 0})
    );
    assert_eq!(body["total_orders"], 0);
    assert_eq!(body["average_order_value"], 0.0);
}
