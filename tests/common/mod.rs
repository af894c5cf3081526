// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds in-memory resources, seeded lookups, and HTTP request plumbing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use repscan_server::config::environment::{
    AuthConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
use repscan_server::database::Database;
use repscan_server::resources::ServerResources;
use repscan_server::routes::create_router;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

/// Access code shared by all integration tests
pub const ACCESS_CODE: &str = "integration-test-code";

/// Base URL configured for QR code derivation in tests
pub const BASE_URL: &str = "http://testhost:8081";

/// Build server resources over a fresh in-memory database with seeded lookups
pub async fn test_resources() -> Arc<ServerResources> {
    let database = Database::new("sqlite::memory:").await.unwrap();
    seed_lookups(database.pool()).await;

    let config = ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        auth: AuthConfig {
            admin_access_code: ACCESS_CODE.into(),
            token_expiry_hours: 8,
        },
        public_base_url: BASE_URL.into(),
        environment: Environment::Testing,
    };

    Arc::new(ServerResources::new(database, config))
}

/// Build the full application router over fresh test resources
pub async fn test_app() -> Router {
    create_router(test_resources().await)
}

/// Insert the lookup rows the exercise tests reference by name
pub async fn seed_lookups(pool: &SqlitePool) {
    for (name, description) in [
        ("beginner", "Suitable for first-time gym visitors"),
        ("intermediate", "Requires familiarity with the movement"),
        ("advanced", "For experienced lifters only"),
    ] {
        sqlx::query("INSERT OR IGNORE INTO difficulties (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(pool)
            .await
            .unwrap();
    }

    for name in ["biceps", "chest", "lats"] {
        sqlx::query("INSERT OR IGNORE INTO muscles (name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await
            .unwrap();
    }
}

/// Send a request without a body
pub async fn send(app: &Router, method: &str, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a request with a JSON body
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: &Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Read and parse a JSON response body
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the test access code and return the session cookie pair
pub async fn login_cookie(app: &Router) -> String {
    let response = send_json(
        app,
        "POST",
        "/admin/login",
        None,
        &serde_json::json!({ "code": ACCESS_CODE }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap();

    // Keep only the name=value pair for replay in request headers
    set_cookie.split(';').next().unwrap().to_owned()
}
