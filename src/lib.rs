// ABOUTME: Main library entry point for the Repscan gym catalog server
// ABOUTME: Provides the public catalog API and the admin CRUD API behind a JWT cookie
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Repscan Server
//!
//! A gym-equipment catalog web service. Visitors scan QR codes on equipment
//! to look up exercise instructions; an admin API behind a shared-secret
//! login lets staff manage equipment and exercises.
//!
//! ## Architecture
//!
//! - **Auth**: shared-secret credential check issuing an HS256 JWT cookie
//! - **Database**: SQLite via sqlx with per-domain managers
//! - **Routes**: axum routers per domain, dependency-injected resources
//! - **Config**: environment-based typed configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use repscan_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Repscan server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Admin credential check and JWT session token management
pub mod auth;

/// Configuration management from environment variables
pub mod config;

/// Application constants and default values
pub mod constants;

/// Database handle, migrations, and per-domain data managers
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for session guarding and admin status headers
pub mod middleware;

/// Centralized resource container for dependency injection
pub mod resources;

/// HTTP routes for the public catalog and the admin API
pub mod routes;

/// Cookie handling for the admin session token
pub mod security;

/// Utility functions and helpers
pub mod utils;
