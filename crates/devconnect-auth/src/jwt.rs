//! JWT issuing and verification.
//!
//! Tokens are HS256-signed with the configured secret and expire
//! `JwtConfig::expiry` seconds after issue. Verification failures of any
//! kind (bad signature, malformed, expired) collapse into a single
//! unauthorized error so callers learn nothing about why a token was
//! refused.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use devconnect_config::JwtConfig;
use devconnect_core::AppError;

use crate::claims::{Claims, ClaimsUser};

pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";

/// Signs a token for `user_id`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let lifetime = usize::try_from(jwt_config.expiry.max(0)).unwrap_or(usize::MAX);
    let exp = now.saturating_add(lifetime);

    let claims = Claims {
        user: ClaimsUser { id: user_id },
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Checks signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error with [`INVALID_TOKEN_MESSAGE`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(INVALID_TOKEN_MESSAGE.to_string()))
}
