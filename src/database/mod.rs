// ABOUTME: Database handle, pool management, and schema migrations
// ABOUTME: Creates the SQLite pool with enforced foreign keys and gym catalog tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! This module provides the database handle for the Repscan catalog. It owns
//! the `SQLite` connection pool, runs schema migrations, and exposes
//! per-domain managers for equipment, exercises, and lookup tables.
//!
//! Referential integrity policy: deleting equipment cascades to its
//! exercises, and deleting an exercise cascades to its muscle-association
//! rows. `SQLite` only honors `ON DELETE CASCADE` when `foreign_keys` is
//! enabled, so every pooled connection sets the pragma.

/// Muscle and difficulty lookup operations
pub mod catalog;
/// Equipment CRUD operations
pub mod equipment;
/// Exercise CRUD operations with muscle associations
pub mod exercises;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

/// Database manager for the gym catalog
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // create_if_missing so a fresh deployment bootstraps its own file;
        // foreign_keys so CASCADE actually fires
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Each :memory: connection is its own database, so the pool must be
        // pinned to a single long-lived connection for in-memory use
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_lookups().await?;
        self.migrate_equipment().await?;
        self.migrate_exercises().await?;
        Ok(())
    }

    /// Create difficulty and muscle lookup tables
    async fn migrate_lookups(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS difficulties (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS muscles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Create the equipment table
    async fn migrate_equipment(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS equipment (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL,
                qr_code_url TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_equipment_category ON equipment(category)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Create exercise and exercise-muscle join tables
    async fn migrate_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                instructions TEXT NOT NULL DEFAULT '[]',
                tips TEXT NOT NULL DEFAULT '[]',
                image_url TEXT NOT NULL DEFAULT '',
                equipment_id TEXT NOT NULL REFERENCES equipment(id) ON DELETE CASCADE,
                difficulty_id INTEGER NOT NULL REFERENCES difficulties(id),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_muscles (
                exercise_id TEXT NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                muscle_id INTEGER NOT NULL REFERENCES muscles(id) ON DELETE CASCADE,
                PRIMARY KEY (exercise_id, muscle_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_equipment ON exercises(equipment_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercise_muscles_muscle ON exercise_muscles(muscle_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        // Running migrations twice must not fail
        db.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        // Inserting an exercise for a nonexistent equipment row must fail
        let result = sqlx::query(
            r"
            INSERT INTO exercises (id, name, equipment_id, difficulty_id, created_at, updated_at)
            VALUES ('ex-1', 'Curl', 'missing-equipment', 1, '2025-01-01', '2025-01-01')
            ",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err());
    }
}
