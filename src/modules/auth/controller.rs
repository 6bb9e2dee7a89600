use axum::{Json, extract::State};
use tracing::instrument;

use devconnect_core::AppError;
use devconnect_models::{LoginRequest, TokenResponse, User};

use super::service::AuthService;
use crate::docs::{ErrorResponse, ValidationErrorResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/api/auth",
    responses(
        (status = 200, description = "The caller's account, without password", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::current_user(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(Json(user))
}

/// Log in and receive a token
#[utoipa::path(
    post,
    path = "/api/auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation failed or invalid credentials", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::login(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(token))
}
