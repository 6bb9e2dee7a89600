use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use devconnect_auth::{Claims, INVALID_TOKEN_MESSAGE, verify_token};
use devconnect_config::JwtConfig;
use devconnect_core::AppError;
use devconnect_observability::track_jwt_validation;

use crate::state::AppState;

/// Header carrying the bearer token.
pub const AUTH_HEADER: &str = "x-auth-token";

pub const MISSING_TOKEN_MESSAGE: &str = "No token, authorization denied";

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id()
    }
}

fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let value = match headers.get(AUTH_HEADER) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::unauthorized(MISSING_TOKEN_MESSAGE.to_string())),
    };

    let token = value
        .to_str()
        .map_err(|_| AppError::unauthorized(INVALID_TOKEN_MESSAGE.to_string()))?;

    let claims = verify_token(token, jwt_config);
    track_jwt_validation(claims.is_ok());

    Ok(AuthUser(claims?))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // already verified by `require_auth`
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}

/// Rejects requests without a valid token before they reach the handler.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/", get(handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use devconnect_auth::issue_token;

    fn headers_with(token: &[u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_bytes(token).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        let err = authenticate(&HeaderMap::new(), &JwtConfig::default()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), MISSING_TOKEN_MESSAGE);
    }

    #[test]
    fn test_empty_header() {
        let err = authenticate(&headers_with(b""), &JwtConfig::default()).unwrap_err();
        assert_eq!(err.error.to_string(), MISSING_TOKEN_MESSAGE);
    }

    #[test]
    fn test_invalid_token() {
        let err = authenticate(&headers_with(b"not-a-token"), &JwtConfig::default()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn test_valid_token() {
        let config = JwtConfig::default();
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, &config).unwrap();

        let auth_user = authenticate(&headers_with(token.as_bytes()), &config).unwrap();
        assert_eq!(auth_user.user_id(), user_id);
    }
}
