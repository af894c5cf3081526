// ABOUTME: Exercise catalog endpoints with admin-guarded mutations
// ABOUTME: Public list with resolved names plus create, update, and delete behind the session cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise routes
//!
//! The public list resolves difficulty and muscle names so the catalog
//! frontend never joins ids client-side. Instruction and tip fields accept
//! either arrays or multi-line text and are normalized at this boundary.

use crate::database::exercises::{
    CreateExerciseRequest, ExerciseDetail, ExercisesManager, UpdateExerciseRequest,
};
use crate::errors::{AppError, AppResult};
use crate::middleware::require_admin;
use crate::resources::ServerResources;
use crate::routes::body_error;
use crate::routes::equipment::DeleteParams;
use crate::utils::text::LineList;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Create request body, with boundary-normalized text fields
#[derive(Debug, Deserialize)]
pub struct CreateExercisePayload {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Instruction steps, as an array or multi-line text
    #[serde(default)]
    pub instructions: LineList,
    /// Coaching tips, as an array or multi-line text
    #[serde(default)]
    pub tips: LineList,
    /// Illustration URL
    #[serde(default)]
    pub image_url: String,
    /// Owning equipment record
    pub equipment_id: Uuid,
    /// Difficulty level id
    pub difficulty_id: i64,
    /// Targeted muscle ids
    #[serde(default)]
    pub muscle_ids: Vec<i64>,
}

impl From<CreateExercisePayload> for CreateExerciseRequest {
    fn from(payload: CreateExercisePayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            instructions: payload.instructions.into_inner(),
            tips: payload.tips.into_inner(),
            image_url: payload.image_url,
            equipment_id: payload.equipment_id,
            difficulty_id: payload.difficulty_id,
            muscle_ids: payload.muscle_ids,
        }
    }
}

/// Update request body, same shape as create plus the record id
#[derive(Debug, Deserialize)]
pub struct UpdateExercisePayload {
    /// Record to update
    pub id: Uuid,
    /// New display name
    pub name: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New instruction steps
    #[serde(default)]
    pub instructions: LineList,
    /// New coaching tips
    #[serde(default)]
    pub tips: LineList,
    /// New illustration URL
    #[serde(default)]
    pub image_url: String,
    /// New owning equipment record
    pub equipment_id: Uuid,
    /// New difficulty level id
    pub difficulty_id: i64,
    /// Replacement muscle set
    #[serde(default)]
    pub muscle_ids: Vec<i64>,
}

impl From<UpdateExercisePayload> for UpdateExerciseRequest {
    fn from(payload: UpdateExercisePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            instructions: payload.instructions.into_inner(),
            tips: payload.tips.into_inner(),
            image_url: payload.image_url,
            equipment_id: payload.equipment_id,
            difficulty_id: payload.difficulty_id,
            muscle_ids: payload.muscle_ids,
        }
    }
}

/// Exercise route handlers
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Build the exercise router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/admin/exercise",
                get(Self::list)
                    .post(Self::create)
                    .put(Self::update)
                    .delete(Self::delete),
            )
            .with_state(resources)
    }

    fn manager(resources: &ServerResources) -> ExercisesManager {
        ExercisesManager::new(resources.database.pool().clone())
    }

    /// Handle `GET /admin/exercise` (public)
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<ExerciseDetail>>> {
        Ok(Json(Self::manager(&resources).list().await?))
    }

    /// Handle `POST /admin/exercise`, responding 201 on success
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<CreateExercisePayload>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<ExerciseDetail>)> {
        require_admin(&headers, &resources.auth)?;
        let Json(payload) = body.map_err(|e| body_error(&e))?;

        let exercise = Self::manager(&resources)
            .create(&CreateExerciseRequest::from(payload))
            .await?;

        tracing::info!(exercise.id = %exercise.exercise.id, "Exercise created");
        Ok((StatusCode::CREATED, Json(exercise)))
    }

    /// Handle `PUT /admin/exercise`, replacing the muscle set wholesale
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<UpdateExercisePayload>, JsonRejection>,
    ) -> AppResult<Json<ExerciseDetail>> {
        require_admin(&headers, &resources.auth)?;
        let Json(payload) = body.map_err(|e| body_error(&e))?;

        let exercise = Self::manager(&resources)
            .update(&UpdateExerciseRequest::from(payload))
            .await?;

        tracing::info!(exercise.id = %exercise.exercise.id, "Exercise updated");
        Ok(Json(exercise))
    }

    /// Handle `DELETE /admin/exercise?id=...`
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<DeleteParams>,
    ) -> AppResult<Json<Value>> {
        require_admin(&headers, &resources.auth)?;
        let id = params.parse_id()?;

        if !Self::manager(&resources).delete(id).await? {
            return Err(AppError::not_found(format!("Exercise {id}")));
        }

        tracing::info!(exercise.id = %id, "Exercise deleted");
        Ok(Json(json!({ "success": true })))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_create_payload_normalizes_text_fields() {
        let payload: CreateExercisePayload = serde_json::from_value(serde_json::json!({
            "name": "Lat Pulldown",
            "instructions": "Sit down\n\nPull the bar to your chest\n",
            "tips": ["Keep your back straight", ""],
            "equipment_id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "difficulty_id": 1,
            "muscle_ids": [2, 5]
        }))
        .unwrap();

        let request = CreateExerciseRequest::from(payload);
        assert_eq!(
            request.instructions,
            vec!["Sit down", "Pull the bar to your chest"]
        );
        assert_eq!(request.tips, vec!["Keep your back straight"]);
    }

    #[test]
    fn test_create_payload_rejects_non_numeric_difficulty() {
        let result = serde_json::from_value::<CreateExercisePayload>(serde_json::json!({
            "name": "Lat Pulldown",
            "equipment_id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "difficulty_id": "easy",
            "muscle_ids": [2]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_payload_rejects_non_array_muscles() {
        let result = serde_json::from_value::<CreateExercisePayload>(serde_json::json!({
            "name": "Lat Pulldown",
            "equipment_id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "difficulty_id": 1,
            "muscle_ids": "all of them"
        }));
        assert!(result.is_err());
    }
}
