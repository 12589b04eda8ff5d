//! Validation of identity-provider bearer tokens.
//!
//! Authentication is delegated entirely to the hosted identity
//! provider; this server never stores credentials or issues tokens. It
//! validates the provider's HS256-signed JWTs with the shared signing
//! secret and reads the subject's email out of the claims. Ownership
//! rules key off that email (`trucks.owner_email`), and one configured
//! address is the super-admin who can see and edit everything.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use truckstop_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Claims the identity provider embeds in every access token.
///
/// Only the fields this server reads; the provider adds more.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider's opaque user id.
    pub sub: String,
    /// The user's email address; the ownership key for trucks.
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Token-validation configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub jwt_secret: String,
    /// The one email address with unrestricted access.
    pub super_admin_email: String,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var             | Required |
    /// |---------------------|----------|
    /// | `AUTH_JWT_SECRET`   | **yes**  |
    /// | `SUPER_ADMIN_EMAIL` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is missing or empty.
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("AUTH_JWT_SECRET").expect("AUTH_JWT_SECRET must be set");
        assert!(!jwt_secret.is_empty(), "AUTH_JWT_SECRET must not be empty");

        let super_admin_email =
            std::env::var("SUPER_ADMIN_EMAIL").expect("SUPER_ADMIN_EMAIL must be set");
        assert!(
            !super_admin_email.is_empty(),
            "SUPER_ADMIN_EMAIL must not be empty"
        );

        Self {
            jwt_secret,
            super_admin_email,
        }
    }
}

/// Validate and decode a provider token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &AuthConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Authenticated user extracted from a Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's email, as asserted by the identity provider.
    pub email: String,
    /// Whether the caller is the configured super-admin.
    pub is_super_admin: bool,
}

impl AuthUser {
    /// Reject callers other than the super-admin.
    pub fn require_super_admin(&self) -> Result<(), AppError> {
        if self.is_super_admin {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "super-admin access required".into(),
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.auth).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let is_super_admin = claims.email == state.config.auth.super_admin_email;

        Ok(AuthUser {
            email: claims.email,
            is_super_admin,
        })
    }
}
