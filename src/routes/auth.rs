// ABOUTME: Admin authentication endpoints for login, logout, and session check
// ABOUTME: Issues and clears the HttpOnly session cookie backing the admin API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin authentication routes

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::routes::body_error;
use crate::security::cookies::{admin_session_cookie, expired_session_cookie};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header::SET_COOKIE, HeaderMap};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// The shared admin access code
    pub code: String,
}

/// Session status response for `GET /admin/check`
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether the request carried a valid admin session
    pub authenticated: bool,
}

/// Admin authentication route handlers
pub struct AdminAuthRoutes;

impl AdminAuthRoutes {
    /// Build the authentication router
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/admin/login", post(Self::login))
            .route("/admin/logout", post(Self::logout))
            .route("/admin/check", get(Self::check))
            .with_state(resources)
    }

    /// Handle `POST /admin/login`
    ///
    /// Verifies the submitted access code and sets the session cookie.
    async fn login(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<LoginRequest>, JsonRejection>,
    ) -> AppResult<impl IntoResponse> {
        let Json(request) = body.map_err(|e| body_error(&e))?;

        let token = resources.auth.login(&request.code).inspect_err(|_| {
            AppLogger::log_auth_event("login", false, Some("access code mismatch"));
        })?;
        AppLogger::log_auth_event("login", true, None);
        let cookie = admin_session_cookie(
            &token,
            resources.auth.session_max_age_secs(),
            resources.secure_cookies(),
        );

        Ok((
            [(SET_COOKIE, cookie)],
            Json(SessionStatus {
                authenticated: true,
            }),
        ))
    }

    /// Handle `POST /admin/logout`
    ///
    /// Clears the session cookie. Always succeeds, session or not.
    async fn logout(State(resources): State<Arc<ServerResources>>) -> impl IntoResponse {
        AppLogger::log_auth_event("logout", true, None);
        let cookie = expired_session_cookie(resources.secure_cookies());

        (
            [(SET_COOKIE, cookie)],
            Json(SessionStatus {
                authenticated: false,
            }),
        )
    }

    /// Handle `GET /admin/check`
    ///
    /// Returns 200 with `authenticated: true` for a valid session, 401
    /// otherwise.
    async fn check(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> AppResult<Json<SessionStatus>> {
        crate::middleware::require_admin(&headers, &resources.auth)?;
        Ok(Json(SessionStatus {
            authenticated: true,
        }))
    }
}
