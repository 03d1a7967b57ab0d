use axum::http::StatusCode;
use serde_json::{Value, json};

use boxops_testing::db::MockStore;

use crate::helpers::{invalid_data_body, server};

#[tokio::test]
async fn should_return_flattened_user_details() {
    let row = json!({
        "user_id": 1,
        "username": "alice",
        "role": "packer",
        "location_id": 3,
        "location_type": "dock",
        "number_of_boxes": 50,
        "total_minutes": 10,
        "average_boxes_per_minute": 5.0
    });
    let server = server(MockStore::new().rows(vec![row.clone()]));

    let response = server.get("/api/user-details").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([row]));
}

#[tokio::test]
async fn should_return_500_when_user_details_fails() {
    let server = server(MockStore::new().error("relation \"locations\" does not exist"));

    let response = server.get("/api/user-details").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error al obtener la información de los usuarios" })
    );
}

#[tokio::test]
async fn should_return_weekly_aggregates_in_week_order() {
    let server = server(MockStore::new().rows(vec![
        json!({
            "username": "alice",
            "product_type": "dock",
            "week_start": "2024-03-04",
            "total_boxes": 120,
            "total_minutes": 60,
            "average_boxes_per_minute": 2.0
        }),
        json!({
            "username": "bob",
            "product_type": "dock",
            "week_start": "2024-03-11",
            "total_boxes": 30,
            "total_minutes": 0,
            "average_boxes_per_minute": null
        }),
    ]));

    let response = server.get("/api/weekly-operations/3").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let weeks: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["week_start"].as_str().unwrap())
        .collect();
    assert_eq!(weeks, vec!["2024-03-04", "2024-03-11"]);
    assert_eq!(body[0]["total_boxes"], 120);
    assert_eq!(body[0]["average_boxes_per_minute"], 2.0);
    assert_eq!(body[1]["average_boxes_per_minute"], Value::Null);
}

#[tokio::test]
async fn should_return_500_when_weekly_report_fails() {
    let server = server(MockStore::new().error("timeout"));

    let response = server.get("/api/weekly-operations/3").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Error al obtener operaciones semanales" })
    );
}

#[tokio::test]
async fn should_reject_non_integer_product_id() {
    let server = server(MockStore::new());

    let response = server.get("/api/weekly-operations/pallets").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), invalid_data_body());
}
