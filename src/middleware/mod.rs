// ABOUTME: HTTP middleware for the admin API
// ABOUTME: Session guarding plus the x-admin-auth status header on admin paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

/// Session guard requiring a valid admin cookie
pub mod admin_guard;
/// Response header advertising admin auth status
pub mod auth_status;

pub use admin_guard::require_admin;
pub use auth_status::admin_status_header;
