// ABOUTME: Application constants shared across modules
// ABOUTME: Centralizes cookie parameters, env var names, and default values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants and configuration defaults

/// Session and token limits
pub mod limits {
    /// Admin session token lifetime in hours
    pub const ADMIN_SESSION_EXPIRY_HOURS: i64 = 8;

    /// Seconds per hour, for cookie max-age computation
    pub const SECONDS_PER_HOUR: i64 = 3600;
}

/// Cookie parameters for the admin session
pub mod cookies {
    /// Name of the admin session cookie
    pub const ADMIN_TOKEN: &str = "admin_token";
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_config {
    /// Shared secret: admin login code and JWT signing key
    pub const ADMIN_ACCESS_CODE: &str = "ADMIN_ACCESS_CODE";

    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Base URL used to derive equipment QR code URLs
    pub const PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;

    /// Default SQLite database path
    pub const DATABASE_URL: &str = "sqlite:./data/repscan.db";

    /// Default public base URL for QR code derivation
    pub const PUBLIC_BASE_URL: &str = "http://localhost:8081";
}

/// Service identification for structured logging
pub mod service_names {
    /// Canonical service name
    pub const REPSCAN_SERVER: &str = "repscan-server";
}

/// JWT claim values
pub mod claims {
    /// Role claim carried by admin session tokens
    pub const ADMIN_ROLE: &str = "admin";
}
