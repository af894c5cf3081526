// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Bundles the database, auth manager, and config behind one Arc handed to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared server resources
//!
//! All route handlers receive one `Arc<ServerResources>` instead of reaching
//! for globals. Tests construct their own resources over an in-memory
//! database and exercise routers in isolation.

use crate::auth::AdminAuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Container for all shared server resources
pub struct ServerResources {
    /// Database handle with connection pool
    pub database: Arc<Database>,
    /// Admin authentication manager
    pub auth: AdminAuthManager,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create a new resource container from a connected database and config
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let auth = AdminAuthManager::new(
            config.auth.admin_access_code.clone(),
            config.auth.token_expiry_hours,
        );

        Self {
            database: Arc::new(database),
            auth,
            config: Arc::new(config),
        }
    }

    /// Whether session cookies should carry the `Secure` attribute
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.config.environment.is_production()
    }
}
