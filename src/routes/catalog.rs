// ABOUTME: Lookup endpoints for muscles and difficulty levels
// ABOUTME: Read-only lists consumed by the admin forms and the public catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Muscle and difficulty lookup routes

use crate::database::catalog::{CatalogManager, Difficulty, Muscle};
use crate::errors::AppResult;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Lookup route handlers
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Build the lookup router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/admin/muscles", get(Self::list_muscles))
            .route("/admin/difficulties", get(Self::list_difficulties))
            .with_state(resources)
    }

    /// Handle `GET /admin/muscles`
    async fn list_muscles(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<Muscle>>> {
        let manager = CatalogManager::new(resources.database.pool().clone());
        Ok(Json(manager.list_muscles().await?))
    }

    /// Handle `GET /admin/difficulties`
    async fn list_difficulties(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<Difficulty>>> {
        let manager = CatalogManager::new(resources.database.pool().clone());
        Ok(Json(manager.list_difficulties().await?))
    }
}
