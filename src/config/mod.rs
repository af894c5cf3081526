// ABOUTME: Configuration module organization for the Repscan server
// ABOUTME: Exposes environment-based runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management for production deployment

/// Environment-based configuration parsing
pub mod environment;
