// ABOUTME: Security module organization
// ABOUTME: Hosts cookie handling for the admin session token
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Security helpers for cookie-based admin sessions

/// Cookie parsing and admin session cookie construction
pub mod cookies;
