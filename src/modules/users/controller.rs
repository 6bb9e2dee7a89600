use axum::{Json, extract::State};
use tracing::instrument;

use devconnect_core::AppError;
use devconnect_models::{RegisterUserDto, TokenResponse};

use crate::docs::{ErrorResponse, ValidationErrorResponse};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Account created; token for the new user", body = TokenResponse),
        (status = 400, description = "Validation failed or email already registered", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = UserService::register(state.store.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(token))
}
