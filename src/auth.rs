// ABOUTME: Admin credential check and JWT-based session token management
// ABOUTME: Verifies the shared admin secret and issues/validates HS256 session tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Authentication and Session Management
//!
//! This module implements the admin authentication gate: a submitted access
//! code is compared against the configured shared secret in constant time,
//! and on match an HS256-signed session token is issued. The token itself is
//! the session; there is no persistent session store.

use crate::constants::claims::ADMIN_ROLE;
use crate::constants::limits::SECONDS_PER_HOUR;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
    },
    /// Token signature is invalid or the role claim is wrong
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired { expired_at } => {
                write!(
                    f,
                    "Session token expired at {}",
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => {
                write!(f, "Session token is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "Session token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            other => Self::auth_invalid(other.to_string()),
        }
    }
}

/// `JWT` claims for admin session tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Role claim; always `admin` for tokens issued by this server
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authentication manager for the admin shared secret and session tokens
///
/// The configured access code doubles as the HS256 signing key, matching the
/// single-shared-secret deployment model: one environment value configures
/// both the login code and token verification.
#[derive(Clone)]
pub struct AdminAuthManager {
    secret: Vec<u8>,
    token_expiry_hours: i64,
}

impl AdminAuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>, token_expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            token_expiry_hours,
        }
    }

    /// Session token lifetime in seconds, for cookie max-age
    #[must_use]
    pub const fn session_max_age_secs(&self) -> i64 {
        self.token_expiry_hours * SECONDS_PER_HOUR
    }

    /// Verify a submitted access code and issue a session token on match
    ///
    /// The comparison is constant-time to avoid leaking secret length or
    /// prefix information through response timing.
    ///
    /// # Errors
    ///
    /// Returns an auth error if the code does not match, or an internal
    /// error if token encoding fails.
    pub fn login(&self, code: &str) -> AppResult<String> {
        let submitted = code.as_bytes();
        let matches = submitted.len() == self.secret.len()
            && submitted.ct_eq(&self.secret).unwrap_u8() == 1;

        if !matches {
            tracing::warn!("Admin login rejected: access code mismatch");
            return Err(AppError::auth_invalid("Invalid access code"));
        }

        let token = self.generate_token()?;
        tracing::info!("Admin login accepted, session token issued");
        Ok(token)
    }

    /// Generate an HS256 session token with the configured expiry
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails
    pub fn generate_token(&self) -> AppResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = AdminClaims {
            role: ADMIN_ROLE.to_owned(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(&self.secret);

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Validate a session token with detailed error information
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] if:
    /// - Token signature is invalid
    /// - Token has expired
    /// - Token is malformed or not valid JWT format
    /// - The role claim is not `admin`
    pub fn validate_token_detailed(&self, token: &str) -> Result<AdminClaims, JwtValidationError> {
        let claims = self.decode_token_claims(token)?;
        Self::validate_claims_expiry(&claims)?;

        if claims.role != ADMIN_ROLE {
            return Err(JwtValidationError::TokenInvalid {
                reason: format!("Unexpected role claim: {}", claims.role),
            });
        }

        Ok(claims)
    }

    /// Decode token claims without expiration validation
    fn decode_token_claims(&self, token: &str) -> Result<AdminClaims, JwtValidationError> {
        let decoding_key = DecodingKey::from_secret(&self.secret);

        // Expiry is checked separately so we can report expired-vs-invalid
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<AdminClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))
    }

    /// Validate claims expiration with logging
    fn validate_claims_expiry(claims: &AdminClaims) -> Result<(), JwtValidationError> {
        let current_time = Utc::now();
        if current_time.timestamp() > claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or_else(Utc::now);
            tracing::warn!(
                "Admin session token expired at {}",
                expired_at.to_rfc3339()
            );
            return Err(JwtValidationError::TokenExpired { expired_at });
        }
        Ok(())
    }

    /// Convert JWT library errors to detailed validation errors
    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;
        tracing::warn!("Session token validation failed: {:?}", e);

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }
}
