// ABOUTME: Equipment catalog endpoints with admin-guarded mutations
// ABOUTME: Public list plus create, update, and delete behind the session cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Equipment routes
//!
//! Listing is public so the visitor-facing catalog can render without a
//! session. Mutations validate the admin cookie before the request body is
//! even inspected, so an unauthenticated caller gets 401 no matter how
//! malformed the payload is.

use crate::database::equipment::{
    CreateEquipmentRequest, Equipment, EquipmentManager, UpdateEquipmentRequest,
};
use crate::errors::{AppError, AppResult};
use crate::middleware::require_admin;
use crate::resources::ServerResources;
use crate::routes::body_error;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters for delete operations
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// Record id to delete
    pub id: Option<String>,
}

impl DeleteParams {
    /// Parse the id parameter, rejecting absent or malformed values
    pub(crate) fn parse_id(&self) -> AppResult<Uuid> {
        let id = self
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::invalid_input("Missing id query parameter"))?;

        Uuid::parse_str(id).map_err(|_| AppError::invalid_input(format!("Invalid id: {id}")))
    }
}

/// Equipment route handlers
pub struct EquipmentRoutes;

impl EquipmentRoutes {
    /// Build the equipment router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/admin/equipment",
                get(Self::list)
                    .post(Self::create)
                    .put(Self::update)
                    .delete(Self::delete),
            )
            .with_state(resources)
    }

    fn manager(resources: &ServerResources) -> EquipmentManager {
        EquipmentManager::new(resources.database.pool().clone())
    }

    /// Handle `GET /admin/equipment` (public)
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<Equipment>>> {
        Ok(Json(Self::manager(&resources).list().await?))
    }

    /// Handle `POST /admin/equipment`
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<CreateEquipmentRequest>, JsonRejection>,
    ) -> AppResult<Json<Equipment>> {
        require_admin(&headers, &resources.auth)?;
        let Json(request) = body.map_err(|e| body_error(&e))?;

        let equipment = Self::manager(&resources)
            .create(&request, &resources.config.public_base_url)
            .await?;

        tracing::info!(equipment.id = %equipment.id, "Equipment created");
        Ok(Json(equipment))
    }

    /// Handle `PUT /admin/equipment`
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<UpdateEquipmentRequest>, JsonRejection>,
    ) -> AppResult<Json<Equipment>> {
        require_admin(&headers, &resources.auth)?;
        let Json(request) = body.map_err(|e| body_error(&e))?;

        let equipment = Self::manager(&resources).update(&request).await?;

        tracing::info!(equipment.id = %equipment.id, "Equipment updated");
        Ok(Json(equipment))
    }

    /// Handle `DELETE /admin/equipment?id=...`
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<DeleteParams>,
    ) -> AppResult<Json<Value>> {
        require_admin(&headers, &resources.auth)?;
        let id = params.parse_id()?;

        if !Self::manager(&resources).delete(id).await? {
            return Err(AppError::not_found(format!("Equipment {id}")));
        }

        tracing::info!(equipment.id = %id, "Equipment deleted");
        Ok(Json(json!({ "success": true })))
    }
}
