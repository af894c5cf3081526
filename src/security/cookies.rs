// ABOUTME: Cookie parsing and construction for the admin session token
// ABOUTME: Builds HttpOnly SameSite=Strict cookies and extracts values from request headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cookie handling for the admin session
//!
//! The session token travels exclusively in an `HttpOnly`, `SameSite=Strict`
//! cookie. Logout overwrites the cookie with an empty value and `Max-Age=0`.

use crate::constants::cookies::ADMIN_TOKEN;
use axum::http::HeaderMap;

/// Extract a cookie value by name from request headers
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get("cookie")?.to_str().ok()?;

    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Build the `Set-Cookie` value for a fresh admin session
///
/// `secure` should be true in production deployments so the cookie is only
/// sent over TLS.
#[must_use]
pub fn admin_session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{ADMIN_TOKEN}={token}; HttpOnly; Path=/; Max-Age={max_age_secs}; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the admin session on logout
#[must_use]
pub fn expired_session_cookie(secure: bool) -> String {
    let mut cookie = format!("{ADMIN_TOKEN}=; HttpOnly; Path=/; Max-Age=0; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
