//! HTTP-level integration tests for the device endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn get_device_by_id() {
    let (app, _) = common::seeded_app().await;
    let response = get(app, "/api/devices/3").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Drone-Alpha");
    assert_eq!(json["type"], "drone");
    assert_eq!(json["status"], "warning");
    assert_eq!(json["battery"], 34);
    assert_eq!(json["ipAddress"], "192.168.1.201");
    assert!(json["lastPing"].is_string());
}

#[tokio::test]
async fn wired_device_reports_null_battery() {
    let (app, _) = common::seeded_app().await;
    let json = body_json(get(app, "/api/devices/1").await).await;
    assert_eq!(json["name"], "Cam-01 Main Gate");
    assert!(json["battery"].is_null());
}

#[tokio::test]
async fn unknown_device_returns_404() {
    let (app, _) = common::empty_app();
    let response = get(app, "/api/devices/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Device not found"})
    );
}

#[tokio::test]
async fn non_numeric_device_id_returns_404() {
    let (app, _) = common::seeded_app().await;
    let response = get(app, "/api/devices/cam-01").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Device not found");
}

#[tokio::test]
async fn created_device_defaults_to_map_centre() {
    let (app, _) = common::empty_app();
    let response = post_json(
        app.clone(),
        "/api/devices",
        json!({
            "name": "Server-Core",
            "type": "server",
            "status": "online",
            "location": "Data Room",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["x"], 2500);
    assert_eq!(json["y"], 2500);
    assert!(json["battery"].is_null());
    assert!(json["ipAddress"].is_null());
    assert!(json["videoUrl"].is_null());

    let fetched = body_json(get(app, "/api/devices/1").await).await;
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn created_device_keeps_coordinates() {
    let (app, _) = common::empty_app();
    let json = body_json(
        post_json(
            app,
            "/api/devices",
            json!({
                "name": "Drone-Bravo",
                "type": "drone",
                "status": "maintenance",
                "location": "Hangar",
                "battery": 100,
                "x": 1800,
                "y": 3200,
            }),
        )
        .await,
    )
    .await;
    assert_eq!((json["x"].as_i64(), json["y"].as_i64()), (Some(1800), Some(3200)));
}

#[tokio::test]
async fn create_with_invalid_battery_names_battery() {
    let (app, _) = common::empty_app();
    let response = post_json(
        app,
        "/api/devices",
        json!({
            "name": "Drone-Bravo",
            "type": "drone",
            "status": "online",
            "location": "Hangar",
            "battery": 250,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "battery");
}

#[tokio::test]
async fn list_keeps_registration_order() {
    let (app, _) = common::seeded_app().await;
    post_json(
        app.clone(),
        "/api/devices",
        json!({"name": "Cam-05", "type": "camera", "status": "offline", "location": "Zone D"}),
    )
    .await;

    let json = body_json(get(app, "/api/devices").await).await;
    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}
