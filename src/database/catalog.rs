// ABOUTME: Database operations for muscle and difficulty lookup tables
// ABOUTME: Read-only lists used by the public catalog and admin selection UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Muscle and difficulty lookups

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// A target muscle group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Muscle {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// A difficulty level (beginner / intermediate / advanced)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Difficulty {
    /// Unique identifier
    pub id: i64,
    /// Level name
    pub name: String,
    /// Optional description of the level
    pub description: Option<String>,
}

/// Lookup table operations manager
pub struct CatalogManager {
    pool: SqlitePool,
}

impl CatalogManager {
    /// Create a new catalog manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all muscles, ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_muscles(&self) -> AppResult<Vec<Muscle>> {
        let rows = sqlx::query("SELECT id, name FROM muscles ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list muscles: {e}")))?;

        rows.iter().map(row_to_muscle).collect()
    }

    /// List all difficulty levels, ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_difficulties(&self) -> AppResult<Vec<Difficulty>> {
        let rows = sqlx::query("SELECT id, name, description FROM difficulties ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list difficulties: {e}")))?;

        rows.iter().map(row_to_difficulty).collect()
    }
}

fn row_to_muscle(row: &SqliteRow) -> AppResult<Muscle> {
    Ok(Muscle {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

pub(crate) fn row_to_difficulty(row: &SqliteRow) -> AppResult<Difficulty> {
    Ok(Difficulty {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}
