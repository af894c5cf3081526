// ABOUTME: Integration tests for the exercise endpoints over HTTP
// ABOUTME: Covers resolved listings, text normalization, and wholesale muscle set replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, login_cookie, send, send_json, test_app};
use serde_json::{json, Value};

/// Create an equipment record and return its id
async fn create_equipment(app: &Router, cookie: &str) -> String {
    let body = body_json(
        send_json(
            app,
            "POST",
            "/admin/equipment",
            Some(cookie),
            &json!({ "name": "Lat Pulldown Machine", "category": "machines" }),
        )
        .await,
    )
    .await;
    body["id"].as_str().unwrap().to_owned()
}

/// Resolve a lookup id by name from one of the lookup endpoints
async fn lookup_id(app: &Router, endpoint: &str, name: &str) -> i64 {
    let body = body_json(send(app, "GET", endpoint, None).await).await;
    body.as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["name"] == json!(name))
        .unwrap()["id"]
        .as_i64()
        .unwrap()
}

/// Create an exercise targeting the given muscles, returning the response body
async fn create_exercise(app: &Router, cookie: &str, muscles: &[i64]) -> Value {
    let equipment_id = create_equipment(app, cookie).await;
    let difficulty_id = lookup_id(app, "/admin/difficulties", "beginner").await;

    let response = send_json(
        app,
        "POST",
        "/admin/exercise",
        Some(cookie),
        &json!({
            "name": "Lat Pulldown",
            "description": "Vertical pull",
            "instructions": ["Sit down", "Pull the bar to your chest"],
            "tips": ["Keep your torso upright"],
            "equipment_id": equipment_id,
            "difficulty_id": difficulty_id,
            "muscle_ids": muscles
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_list_is_public_and_initially_empty() {
    let app = test_app().await;

    let response = send(&app, "GET", "/admin/exercise", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_mutations_require_session_before_body_validation() {
    let app = test_app().await;

    let garbage = json!({ "nope": true });
    for method in ["POST", "PUT"] {
        let response = send_json(&app, method, "/admin/exercise", None, &garbage).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method}");
    }

    let response = send(&app, "DELETE", "/admin/exercise?id=whatever", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_resolves_difficulty_and_muscle_names() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let lats = lookup_id(&app, "/admin/muscles", "lats").await;
    let biceps = lookup_id(&app, "/admin/muscles", "biceps").await;

    let created = create_exercise(&app, &cookie, &[lats, biceps]).await;

    assert_eq!(created["difficulty"]["name"], json!("beginner"));
    assert_eq!(created["target_muscles"], json!(["biceps", "lats"]));
    assert_eq!(
        created["instructions"],
        json!(["Sit down", "Pull the bar to your chest"])
    );

    // Public listing carries the same resolved detail
    let listing = body_json(send(&app, "GET", "/admin/exercise", None).await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["target_muscles"], json!(["biceps", "lats"]));
}

#[tokio::test]
async fn test_create_normalizes_multiline_instructions() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let equipment_id = create_equipment(&app, &cookie).await;
    let difficulty_id = lookup_id(&app, "/admin/difficulties", "intermediate").await;

    let response = send_json(
        &app,
        "POST",
        "/admin/exercise",
        Some(&cookie),
        &json!({
            "name": "Seated Row",
            "instructions": "Sit upright\n\n  Pull the handle to your waist  \n",
            "tips": "Squeeze at the end\n",
            "equipment_id": equipment_id,
            "difficulty_id": difficulty_id,
            "muscle_ids": []
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body["instructions"],
        json!(["Sit upright", "Pull the handle to your waist"])
    );
    assert_eq!(body["tips"], json!(["Squeeze at the end"]));
    assert_eq!(body["target_muscles"], json!([]));
}

#[tokio::test]
async fn test_create_rejects_malformed_typed_fields() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let equipment_id = create_equipment(&app, &cookie).await;

    // Non-numeric difficulty id
    let response = send_json(
        &app,
        "POST",
        "/admin/exercise",
        Some(&cookie),
        &json!({
            "name": "Seated Row",
            "equipment_id": equipment_id,
            "difficulty_id": "easy",
            "muscle_ids": []
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Muscle ids must be an array of numbers
    let response = send_json(
        &app,
        "POST",
        "/admin/exercise",
        Some(&cookie),
        &json!({
            "name": "Seated Row",
            "equipment_id": equipment_id,
            "difficulty_id": 1,
            "muscle_ids": "all"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_muscle_set_wholesale() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let lats = lookup_id(&app, "/admin/muscles", "lats").await;
    let biceps = lookup_id(&app, "/admin/muscles", "biceps").await;
    let chest = lookup_id(&app, "/admin/muscles", "chest").await;

    let created = create_exercise(&app, &cookie, &[lats, biceps]).await;
    assert_eq!(created["target_muscles"], json!(["biceps", "lats"]));

    let response = send_json(
        &app,
        "PUT",
        "/admin/exercise",
        Some(&cookie),
        &json!({
            "id": created["id"],
            "name": "Lat Pulldown",
            "instructions": created["instructions"],
            "tips": created["tips"],
            "equipment_id": created["equipment_id"],
            "difficulty_id": created["difficulty_id"],
            "muscle_ids": [chest]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // No trace of the previous set remains
    assert_eq!(body["target_muscles"], json!(["chest"]));
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let equipment_id = create_equipment(&app, &cookie).await;
    let difficulty_id = lookup_id(&app, "/admin/difficulties", "beginner").await;

    let response = send_json(
        &app,
        "PUT",
        "/admin/exercise",
        Some(&cookie),
        &json!({
            "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "name": "Ghost",
            "equipment_id": equipment_id,
            "difficulty_id": difficulty_id,
            "muscle_ids": []
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_exercise() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let lats = lookup_id(&app, "/admin/muscles", "lats").await;
    let created = create_exercise(&app, &cookie, &[lats]).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &app,
        "DELETE",
        &format!("/admin/exercise?id={id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(send(&app, "GET", "/admin/exercise", None).await).await;
    assert_eq!(listing, json!([]));

    // Gone means a second delete is a 404
    let response = send(
        &app,
        "DELETE",
        &format!("/admin/exercise?id={id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
