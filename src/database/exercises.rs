// ABOUTME: Database operations for exercises and their muscle associations
// ABOUTME: Handles transactional CRUD with wholesale replacement of the muscle set
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise database operations
//!
//! An exercise belongs to exactly one equipment record and one difficulty
//! level, and targets a set of muscles through the `exercise_muscles` join
//! table. Updates replace the muscle set wholesale (delete all join rows,
//! recreate from the submitted set) inside a single transaction; there is no
//! diffing. Instruction and tip sequences are stored as JSON array columns.

use crate::database::catalog::Difficulty;
use crate::database::equipment::parse_timestamp;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashMap;
use uuid::Uuid;

/// A named routine performable on a piece of equipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Ordered coaching tips
    pub tips: Vec<String>,
    /// Illustration URL
    pub image_url: String,
    /// Owning equipment record
    pub equipment_id: Uuid,
    /// Assigned difficulty level
    pub difficulty_id: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// An exercise with its difficulty and muscle names resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDetail {
    /// The exercise record
    #[serde(flatten)]
    pub exercise: Exercise,
    /// Resolved difficulty level
    pub difficulty: Difficulty,
    /// Names of the targeted muscles (no duplicates, storage order)
    pub target_muscles: Vec<String>,
}

/// Validated command to create a new exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Ordered instruction steps (already boundary-normalized)
    pub instructions: Vec<String>,
    /// Ordered coaching tips (already boundary-normalized)
    pub tips: Vec<String>,
    /// Illustration URL
    #[serde(default)]
    pub image_url: String,
    /// Owning equipment record
    pub equipment_id: Uuid,
    /// Assigned difficulty level
    pub difficulty_id: i64,
    /// Targeted muscle ids
    pub muscle_ids: Vec<i64>,
}

/// Validated command to update an existing exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExerciseRequest {
    /// Record to update
    pub id: Uuid,
    /// New display name
    pub name: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New instruction steps
    pub instructions: Vec<String>,
    /// New coaching tips
    pub tips: Vec<String>,
    /// New illustration URL
    #[serde(default)]
    pub image_url: String,
    /// New owning equipment record
    pub equipment_id: Uuid,
    /// New difficulty level
    pub difficulty_id: i64,
    /// Replacement muscle set (wholesale, not a diff)
    pub muscle_ids: Vec<i64>,
}

/// Exercise database operations manager
pub struct ExercisesManager {
    pool: SqlitePool,
}

impl ExercisesManager {
    /// Create a new exercises manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all exercises with resolved difficulty and muscle names
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn list(&self) -> AppResult<Vec<ExerciseDetail>> {
        let rows = sqlx::query(&detail_query("ORDER BY e.created_at DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        let mut details = rows
            .iter()
            .map(row_to_detail)
            .collect::<AppResult<Vec<_>>>()?;

        let mut muscles = self.muscle_names_by_exercise().await?;
        for detail in &mut details {
            if let Some(names) = muscles.remove(&detail.exercise.id) {
                detail.target_muscles = names;
            }
        }

        Ok(details)
    }

    /// Get one exercise by id with resolved names
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn get(&self, id: Uuid) -> AppResult<Option<ExerciseDetail>> {
        let row = sqlx::query(&detail_query("WHERE e.id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut detail = row_to_detail(&row)?;
        detail.target_muscles = self.muscle_names_for(id).await?;
        Ok(Some(detail))
    }

    /// Create a new exercise and its muscle associations in one transaction
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, or a database error if
    /// the insert fails (including foreign-key violations for unknown
    /// equipment, difficulty, or muscle ids)
    pub async fn create(&self, request: &CreateExerciseRequest) -> AppResult<ExerciseDetail> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }

        let now = Utc::now();
        let id = Uuid::new_v4();
        let instructions_json = serde_json::to_string(&request.instructions)?;
        let tips_json = serde_json::to_string(&request.tips)?;
        let muscle_ids = dedupe_ids(&request.muscle_ids);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO exercises (
                id, name, description, instructions, tips, image_url,
                equipment_id, difficulty_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            ",
        )
        .bind(id.to_string())
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&instructions_json)
        .bind(&tips_json)
        .bind(&request.image_url)
        .bind(request.equipment_id.to_string())
        .bind(request.difficulty_id)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;

        for muscle_id in &muscle_ids {
            sqlx::query("INSERT INTO exercise_muscles (exercise_id, muscle_id) VALUES ($1, $2)")
                .bind(id.to_string())
                .bind(muscle_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to associate muscle {muscle_id}: {e}"))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit exercise create: {e}")))?;

        self.get(id)
            .await?
            .ok_or_else(|| AppError::internal("Created exercise vanished before readback"))
    }

    /// Update an exercise, replacing its muscle set wholesale
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, `NotFound` if the
    /// record does not exist, or a database error otherwise
    pub async fn update(&self, request: &UpdateExerciseRequest) -> AppResult<ExerciseDetail> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name must not be empty"));
        }

        let now = Utc::now();
        let instructions_json = serde_json::to_string(&request.instructions)?;
        let tips_json = serde_json::to_string(&request.tips)?;
        let muscle_ids = dedupe_ids(&request.muscle_ids);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            r"
            UPDATE exercises
            SET name = $2, description = $3, instructions = $4, tips = $5,
                image_url = $6, equipment_id = $7, difficulty_id = $8, updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(request.id.to_string())
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&instructions_json)
        .bind(&tips_json)
        .bind(&request.image_url)
        .bind(request.equipment_id.to_string())
        .bind(request.difficulty_id)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update exercise: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Exercise {}", request.id)));
        }

        // Wholesale replacement: clear the association set, then recreate it
        sqlx::query("DELETE FROM exercise_muscles WHERE exercise_id = $1")
            .bind(request.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear muscle set: {e}")))?;

        for muscle_id in &muscle_ids {
            sqlx::query("INSERT INTO exercise_muscles (exercise_id, muscle_id) VALUES ($1, $2)")
                .bind(request.id.to_string())
                .bind(muscle_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to associate muscle {muscle_id}: {e}"))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit exercise update: {e}")))?;

        self.get(request.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {}", request.id)))
    }

    /// Delete an exercise, cascading to its muscle-association rows
    ///
    /// Returns whether a record was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Resolve muscle names for one exercise
    async fn muscle_names_for(&self, exercise_id: Uuid) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            r"
            SELECT m.name
            FROM exercise_muscles em
            JOIN muscles m ON m.id = em.muscle_id
            WHERE em.exercise_id = $1
            ORDER BY m.name ASC
            ",
        )
        .bind(exercise_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to resolve muscles: {e}")))?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(AppError::from))
            .collect()
    }

    /// Resolve muscle names for all exercises in one query
    async fn muscle_names_by_exercise(&self) -> AppResult<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query(
            r"
            SELECT em.exercise_id, m.name
            FROM exercise_muscles em
            JOIN muscles m ON m.id = em.muscle_id
            ORDER BY m.name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to resolve muscles: {e}")))?;

        let mut by_exercise: HashMap<Uuid, Vec<String>> = HashMap::new();
        for row in &rows {
            let exercise_id: String = row.try_get("exercise_id")?;
            let name: String = row.try_get("name")?;
            let exercise_id = Uuid::parse_str(&exercise_id)
                .map_err(|e| AppError::database(format!("Invalid exercise id in store: {e}")))?;
            by_exercise.entry(exercise_id).or_default().push(name);
        }

        Ok(by_exercise)
    }
}

/// Deduplicate muscle ids while preserving submission order
fn dedupe_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    ids.iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Shared SELECT for exercise rows joined with their difficulty
fn detail_query(suffix: &str) -> String {
    format!(
        r"
        SELECT e.id, e.name, e.description, e.instructions, e.tips, e.image_url,
               e.equipment_id, e.difficulty_id, e.created_at, e.updated_at,
               d.name AS difficulty_name, d.description AS difficulty_description
        FROM exercises e
        JOIN difficulties d ON d.id = e.difficulty_id
        {suffix}
        "
    )
}

/// Map a joined database row to an [`ExerciseDetail`] (muscles filled later)
fn row_to_detail(row: &SqliteRow) -> AppResult<ExerciseDetail> {
    let id_str: String = row.try_get("id")?;
    let equipment_id_str: String = row.try_get("equipment_id")?;
    let instructions_json: String = row.try_get("instructions")?;
    let tips_json: String = row.try_get("tips")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;
    let difficulty_id: i64 = row.try_get("difficulty_id")?;

    Ok(ExerciseDetail {
        exercise: Exercise {
            id: Uuid::parse_str(&id_str)
                .map_err(|e| AppError::database(format!("Invalid exercise id in store: {e}")))?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            instructions: serde_json::from_str(&instructions_json)?,
            tips: serde_json::from_str(&tips_json)?,
            image_url: row.try_get("image_url")?,
            equipment_id: Uuid::parse_str(&equipment_id_str)
                .map_err(|e| AppError::database(format!("Invalid equipment id in store: {e}")))?,
            difficulty_id,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        },
        difficulty: Difficulty {
            id: difficulty_id,
            name: row.try_get("difficulty_name")?,
            description: row.try_get("difficulty_description")?,
        },
        target_muscles: Vec::new(),
    })
}
