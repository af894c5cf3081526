// ABOUTME: HTTP route definitions and router assembly
// ABOUTME: Wires the public catalog, admin auth, and admin CRUD endpoints into one axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes
//!
//! Router assembly for the catalog server. Reads on `/admin/equipment` and
//! `/admin/exercise` are public (the visitor-facing catalog is served from
//! the same endpoints); writes require the admin session cookie. Every
//! response under `/admin` carries the `x-admin-auth` status header.

/// Admin login, logout, and session check
pub mod auth;
/// Muscle and difficulty lookup endpoints
pub mod catalog;
/// Equipment catalog and admin CRUD
pub mod equipment;
/// Exercise catalog and admin CRUD
pub mod exercises;
/// Health check endpoint
pub mod health;

use crate::errors::AppError;
use crate::middleware::admin_status_header;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::http::Method;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the full application router
#[must_use]
pub fn create_router(resources: Arc<ServerResources>) -> Router {
    let admin = Router::new()
        .merge(auth::AdminAuthRoutes::routes(resources.clone()))
        .merge(equipment::EquipmentRoutes::routes(resources.clone()))
        .merge(exercises::ExerciseRoutes::routes(resources.clone()))
        .merge(catalog::CatalogRoutes::routes(resources.clone()))
        .layer(axum::middleware::from_fn_with_state(
            resources.clone(),
            admin_status_header,
        ));

    Router::new()
        .merge(admin)
        .merge(health::HealthRoutes::routes(resources))
        .layer(cors_layer())
}

/// Permissive CORS for the browser-based catalog frontend
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Map a JSON body rejection to the standard validation error
pub(crate) fn body_error(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {rejection}"))
}
