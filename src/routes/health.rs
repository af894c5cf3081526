// ABOUTME: Health check endpoint for deployment probes
// ABOUTME: Reports service status, name, and timestamp without touching auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check route

use crate::constants::service_names::REPSCAN_SERVER;
use crate::resources::ServerResources;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health check route handlers
pub struct HealthRoutes;

impl HealthRoutes {
    /// Build the health router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .with_state(resources)
    }

    /// Handle `GET /health`
    async fn health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": REPSCAN_SERVER,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}
