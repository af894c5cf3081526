// ABOUTME: Response middleware advertising whether the request carried a valid admin session
// ABOUTME: Sets x-admin-auth true/false so clients can render admin UI without a second request
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin status response header
//!
//! Every response from the admin router carries `x-admin-auth: true` or
//! `x-admin-auth: false` reflecting the session cookie on the request. The
//! header is advisory only; enforcement lives in the per-handler guard.

use crate::middleware::require_admin;
use crate::resources::ServerResources;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Header name carrying the admin auth status
pub const ADMIN_AUTH_HEADER: &str = "x-admin-auth";

/// Middleware layer that stamps the admin auth status onto the response
pub async fn admin_status_header(
    State(resources): State<Arc<ServerResources>>,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = require_admin(request.headers(), &resources.auth).is_ok();

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        ADMIN_AUTH_HEADER,
        HeaderValue::from_static(if authenticated { "true" } else { "false" }),
    );
    response
}
