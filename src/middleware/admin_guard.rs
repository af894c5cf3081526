// ABOUTME: Session guard for admin-only operations
// ABOUTME: Extracts the admin cookie and validates the JWT before any handler work
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin session guard
//!
//! Mutating catalog operations call [`require_admin`] before touching the
//! request body, so a missing or bad session always wins over a malformed
//! payload.

use crate::auth::{AdminAuthManager, AdminClaims};
use crate::constants::cookies::ADMIN_TOKEN;
use crate::errors::{AppError, AppResult};
use crate::security::cookies::get_cookie_value;
use axum::http::HeaderMap;

/// Require a valid admin session cookie on the request
///
/// # Errors
///
/// Returns `AuthRequired` when the cookie is absent, `AuthExpired` when the
/// token has expired, and `AuthInvalid` for any other validation failure
pub fn require_admin(headers: &HeaderMap, auth: &AdminAuthManager) -> AppResult<AdminClaims> {
    let Some(token) = get_cookie_value(headers, ADMIN_TOKEN) else {
        return Err(AppError::auth_required());
    };

    auth.validate_token_detailed(&token).map_err(|e| {
        tracing::debug!("Admin session rejected: {e}");
        AppError::from(e)
    })
}
