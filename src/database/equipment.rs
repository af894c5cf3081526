// ABOUTME: Database operations for gym equipment records
// ABOUTME: Handles CRUD with server-generated ids and derived QR code URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Equipment database operations
//!
//! Equipment ids are server-generated UUIDs, which lets the QR code URL be
//! derived inside the single create step instead of the create-then-patch
//! dance a sequential id would force.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// A piece of gym apparatus, identified by a scannable QR code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Category for grouping (cardio, free weights, ...)
    pub category: String,
    /// URL encoded into the printed QR code
    pub qr_code_url: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new equipment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEquipmentRequest {
    /// Display name (required, non-empty)
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Category for grouping (required, non-empty)
    pub category: String,
    /// Explicit QR code URL; derived from the public base URL when absent
    #[serde(default)]
    pub qr_code_url: Option<String>,
}

/// Request to update an existing equipment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEquipmentRequest {
    /// Record to update
    pub id: Uuid,
    /// New display name
    pub name: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New category
    pub category: String,
    /// New QR code URL; unchanged when absent
    #[serde(default)]
    pub qr_code_url: Option<String>,
}

/// Equipment database operations manager
pub struct EquipmentManager {
    pool: SqlitePool,
}

impl EquipmentManager {
    /// Create a new equipment manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all equipment, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, category, qr_code_url, created_at, updated_at
            FROM equipment
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list equipment: {e}")))?;

        rows.iter().map(row_to_equipment).collect()
    }

    /// Get one equipment record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Equipment>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, category, qr_code_url, created_at, updated_at
            FROM equipment
            WHERE id = $1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get equipment: {e}")))?;

        row.as_ref().map(row_to_equipment).transpose()
    }

    /// Create a new equipment record
    ///
    /// When the request carries no explicit QR code URL, one is derived from
    /// `public_base_url` and the freshly generated id in the same step.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty name/category, or a database
    /// error if the insert fails
    pub async fn create(
        &self,
        request: &CreateEquipmentRequest,
        public_base_url: &str,
    ) -> AppResult<Equipment> {
        validate_fields(&request.name, &request.category)?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let qr_code_url = request
            .qr_code_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("{public_base_url}/equipment/{id}"));

        sqlx::query(
            r"
            INSERT INTO equipment (id, name, description, category, qr_code_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ",
        )
        .bind(id.to_string())
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(request.category.trim())
        .bind(&qr_code_url)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create equipment: {e}")))?;

        Ok(Equipment {
            id,
            name: request.name.trim().to_owned(),
            description: request.description.clone(),
            category: request.category.trim().to_owned(),
            qr_code_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Update an existing equipment record
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty name/category, `NotFound` if the
    /// record does not exist, or a database error if the update fails
    pub async fn update(&self, request: &UpdateEquipmentRequest) -> AppResult<Equipment> {
        validate_fields(&request.name, &request.category)?;

        let now = Utc::now();

        let result = if let Some(qr_code_url) = request
            .qr_code_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
        {
            sqlx::query(
                r"
                UPDATE equipment
                SET name = $2, description = $3, category = $4, qr_code_url = $5, updated_at = $6
                WHERE id = $1
                ",
            )
            .bind(request.id.to_string())
            .bind(request.name.trim())
            .bind(&request.description)
            .bind(request.category.trim())
            .bind(qr_code_url)
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await
        } else {
            sqlx::query(
                r"
                UPDATE equipment
                SET name = $2, description = $3, category = $4, updated_at = $5
                WHERE id = $1
                ",
            )
            .bind(request.id.to_string())
            .bind(request.name.trim())
            .bind(&request.description)
            .bind(request.category.trim())
            .bind(now.to_rfc3339())
            .execute(&self.pool)
            .await
        };

        let result =
            result.map_err(|e| AppError::database(format!("Failed to update equipment: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Equipment {}", request.id)));
        }

        self.get(request.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Equipment {}", request.id)))
    }

    /// Delete an equipment record, cascading to its exercises
    ///
    /// Returns whether a record was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete equipment: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Required-field validation shared by create and update
fn validate_fields(name: &str, category: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Equipment name must not be empty"));
    }
    if category.trim().is_empty() {
        return Err(AppError::invalid_input(
            "Equipment category must not be empty",
        ));
    }
    Ok(())
}

/// Map a database row to an [`Equipment`]
fn row_to_equipment(row: &SqliteRow) -> AppResult<Equipment> {
    let id_str: String = row.try_get("id")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Equipment {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::database(format!("Invalid equipment id in store: {e}")))?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        qr_code_url: row.try_get("qr_code_url")?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// Parse an RFC 3339 timestamp stored as TEXT
pub(crate) fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp in store: {e}")))
}
