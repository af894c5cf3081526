// ABOUTME: Utility module organization for shared helpers
// ABOUTME: Currently hosts boundary text normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utility functions and helpers

/// Text normalization for instruction and tip input
pub mod text;
