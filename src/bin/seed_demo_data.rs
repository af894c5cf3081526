// ABOUTME: Seeds the catalog database with lookup rows and demo equipment
// ABOUTME: Idempotent; safe to re-run against an existing database file
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo data seeder
//!
//! Populates the difficulty and muscle lookup tables and, with `--demo`,
//! inserts a sample equipment record with one exercise so a fresh deployment
//! has something to render.

use anyhow::{Context, Result};
use clap::Parser;
use repscan_server::config::environment::DatabaseUrl;
use repscan_server::constants::{defaults, env_config};
use repscan_server::database::equipment::{CreateEquipmentRequest, EquipmentManager};
use repscan_server::database::exercises::{CreateExerciseRequest, ExercisesManager};
use repscan_server::database::Database;
use repscan_server::logging;
use sqlx::Row;
use tracing::info;

const DIFFICULTIES: &[(&str, &str)] = &[
    ("beginner", "Suitable for first-time gym visitors"),
    ("intermediate", "Requires familiarity with the movement"),
    ("advanced", "For experienced lifters only"),
];

const MUSCLES: &[&str] = &[
    "abs",
    "biceps",
    "calves",
    "chest",
    "glutes",
    "hamstrings",
    "lats",
    "quadriceps",
    "shoulders",
    "triceps",
];

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Seed lookup tables and optional demo records",
    version
)]
struct Args {
    /// Database URL (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Also insert a demo equipment record with one exercise
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env().context("Failed to initialize logging")?;

    let database_url = args.database_url.unwrap_or_else(|| {
        std::env::var(env_config::DATABASE_URL).unwrap_or_else(|_| defaults::DATABASE_URL.into())
    });
    let database_url = DatabaseUrl::parse_url(&database_url).to_connection_string();

    let db = Database::new(&database_url)
        .await
        .context("Failed to connect to database")?;

    seed_lookups(&db).await?;
    info!("Lookup tables seeded");

    if args.demo {
        seed_demo_records(&db).await?;
        info!("Demo records seeded");
    }

    Ok(())
}

/// Insert lookup rows, skipping any that already exist
async fn seed_lookups(db: &Database) -> Result<()> {
    for (name, description) in DIFFICULTIES {
        sqlx::query("INSERT OR IGNORE INTO difficulties (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(db.pool())
            .await
            .with_context(|| format!("Failed to seed difficulty {name}"))?;
    }

    for name in MUSCLES {
        sqlx::query("INSERT OR IGNORE INTO muscles (name) VALUES ($1)")
            .bind(name)
            .execute(db.pool())
            .await
            .with_context(|| format!("Failed to seed muscle {name}"))?;
    }

    Ok(())
}

/// Insert one demo equipment record with a single exercise
async fn seed_demo_records(db: &Database) -> Result<()> {
    let public_base_url = std::env::var(env_config::PUBLIC_BASE_URL)
        .unwrap_or_else(|_| defaults::PUBLIC_BASE_URL.into());

    let equipment_manager = EquipmentManager::new(db.pool().clone());
    let equipment = equipment_manager
        .create(
            &CreateEquipmentRequest {
                name: "Lat Pulldown Machine".into(),
                description: "Cable machine with an overhead bar for vertical pulling".into(),
                category: "machines".into(),
                qr_code_url: None,
            },
            public_base_url.trim_end_matches('/'),
        )
        .await
        .context("Failed to seed demo equipment")?;

    let difficulty_id: i64 = sqlx::query("SELECT id FROM difficulties WHERE name = 'beginner'")
        .fetch_one(db.pool())
        .await
        .context("Difficulty lookup missing; run without --demo first")?
        .try_get("id")?;

    let muscle_ids: Vec<i64> = sqlx::query("SELECT id FROM muscles WHERE name IN ('lats', 'biceps')")
        .fetch_all(db.pool())
        .await
        .context("Muscle lookup missing; run without --demo first")?
        .iter()
        .map(|row| row.try_get("id"))
        .collect::<Result<_, _>>()?;

    let exercises_manager = ExercisesManager::new(db.pool().clone());
    exercises_manager
        .create(&CreateExerciseRequest {
            name: "Lat Pulldown".into(),
            description: "Vertical pull targeting the upper back".into(),
            instructions: vec![
                "Sit with thighs secured under the pads".into(),
                "Grip the bar slightly wider than shoulder width".into(),
                "Pull the bar down to your upper chest".into(),
                "Return under control to the start position".into(),
            ],
            tips: vec![
                "Keep your torso upright".into(),
                "Avoid using momentum".into(),
            ],
            image_url: String::new(),
            equipment_id: equipment.id,
            difficulty_id,
            muscle_ids,
        })
        .await
        .context("Failed to seed demo exercise")?;

    info!(equipment.id = %equipment.id, "Demo equipment created");
    Ok(())
}
