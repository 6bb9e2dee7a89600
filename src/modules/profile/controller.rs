use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::instrument;

use devconnect_core::AppError;
use devconnect_models::{AddEducationDto, MessageResponse, Profile, UpsertProfileDto};

use super::service::ProfileService;
use crate::docs::{ErrorResponse, ValidationErrorResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/profile/me",
    responses(
        (status = 200, description = "The caller's profile", body = Profile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::own_profile(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(Json(profile))
}

/// Create or update the caller's profile
///
/// Omitted optional fields keep their stored values.
#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Saved profile", body = Profile),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpsertProfileDto>,
) -> Result<Json<Profile>, AppError> {
    let profile =
        ProfileService::upsert(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok(Json(profile))
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "All profiles, oldest first", body = Vec<Profile>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = ProfileService::list(state.store.as_ref()).await?;
    Ok(Json(profiles))
}

/// Get a user's profile
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Profile", body = Profile),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::by_user(state.store.as_ref(), &user_id).await?;
    Ok(Json(profile))
}

/// Delete the caller's profile and account
#[utoipa::path(
    delete,
    path = "/api/profile",
    responses(
        (status = 200, description = "Account removed", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    let response =
        ProfileService::delete_account(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(Json(response))
}

/// Add an education entry
#[utoipa::path(
    patch,
    path = "/api/profile/education",
    request_body = AddEducationDto,
    responses(
        (status = 200, description = "Updated profile, newest entry first", body = Profile),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn add_education(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<AddEducationDto>,
) -> Result<Json<Profile>, AppError> {
    let profile =
        ProfileService::add_education(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok(Json(profile))
}

/// Remove an education entry
#[utoipa::path(
    patch,
    path = "/api/profile/education/{edu_id}",
    params(("edu_id" = String, Path, description = "Education entry ID")),
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Education not found", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn remove_education(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let profile =
        ProfileService::remove_education(state.store.as_ref(), auth_user.user_id(), &edu_id)
            .await?;
    Ok(Json(profile))
}

/// List a GitHub user's repositories
///
/// Proxies GitHub's repository listing: five repositories, oldest first.
#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    params(("username" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "Repository list as returned by GitHub"),
        (status = 404, description = "No Github profile found", body = ErrorResponse),
        (status = 500, description = "GitHub unreachable", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_github_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    let repos = ProfileService::github_repos(&state.github, &username).await?;
    Ok(Json(repos))
}
