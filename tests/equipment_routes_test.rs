// ABOUTME: Integration tests for the equipment endpoints over HTTP
// ABOUTME: Covers public listing, guarded mutations, and QR code URL derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::StatusCode;
use common::{body_json, login_cookie, send, send_json, test_app, BASE_URL};
use serde_json::json;

#[tokio::test]
async fn test_list_is_public_and_initially_empty() {
    let app = test_app().await;

    let response = send(&app, "GET", "/admin/equipment", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_mutations_require_session_before_body_validation() {
    let app = test_app().await;

    // Even a garbage body must yield 401, not 400, without a session
    let garbage = json!({ "definitely": "not equipment" });

    for method in ["POST", "PUT"] {
        let response = send_json(&app, method, "/admin/equipment", None, &garbage).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method}");
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!("AUTH_REQUIRED"));
    }

    let response = send(&app, "DELETE", "/admin/equipment", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_derives_qr_code_url_from_id() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/admin/equipment",
        Some(&cookie),
        &json!({
            "name": "Rowing Machine",
            "description": "Cable rower",
            "category": "cardio"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["id"].as_str().unwrap();
    assert_eq!(
        body["qr_code_url"],
        json!(format!("{BASE_URL}/equipment/{id}"))
    );
    assert_eq!(body["name"], json!("Rowing Machine"));
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_honors_explicit_qr_code_url() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/admin/equipment",
        Some(&cookie),
        &json!({
            "name": "Bench Press",
            "category": "free weights",
            "qr_code_url": "https://example.com/custom/bench"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["qr_code_url"], json!("https://example.com/custom/bench"));
}

#[tokio::test]
async fn test_create_rejects_blank_required_fields() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/admin/equipment",
        Some(&cookie),
        &json!({ "name": "  ", "category": "cardio" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));

    // Missing category entirely is also a 400
    let response = send_json(
        &app,
        "POST",
        "/admin/equipment",
        Some(&cookie),
        &json!({ "name": "Treadmill" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_fields_and_bumps_timestamp() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let created = body_json(
        send_json(
            &app,
            "POST",
            "/admin/equipment",
            Some(&cookie),
            &json!({ "name": "Treadmill", "category": "cardio" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = send_json(
        &app,
        "PUT",
        "/admin/equipment",
        Some(&cookie),
        &json!({
            "id": id,
            "name": "Treadmill Pro",
            "description": "Incline model",
            "category": "cardio"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], json!("Treadmill Pro"));
    assert_eq!(body["description"], json!("Incline model"));
    // QR code URL untouched when not resubmitted
    assert_eq!(body["qr_code_url"], created["qr_code_url"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let response = send_json(
        &app,
        "PUT",
        "/admin/equipment",
        Some(&cookie),
        &json!({
            "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "name": "Ghost",
            "category": "cardio"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], json!("RESOURCE_NOT_FOUND"));
}

#[tokio::test]
async fn test_delete_requires_id_parameter() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let response = send(&app, "DELETE", "/admin/equipment", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        "DELETE",
        "/admin/equipment?id=not-a-uuid",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        "DELETE",
        "/admin/equipment?id=6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_record_from_listing() {
    let app = test_app().await;
    let cookie = login_cookie(&app).await;

    let created = body_json(
        send_json(
            &app,
            "POST",
            "/admin/equipment",
            Some(&cookie),
            &json!({ "name": "Cable Tower", "category": "machines" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &app,
        "DELETE",
        &format!("/admin/equipment?id={id}"),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], json!(true));

    let listing = body_json(send(&app, "GET", "/admin/equipment", None).await).await;
    assert_eq!(listing, json!([]));
}
