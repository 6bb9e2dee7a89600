use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use devconnect_core::AppError;
use devconnect_models::{Comment, CreateCommentDto, CreatePostDto, Like, MessageResponse, Post};

use super::service::PostService;
use crate::docs::{ErrorResponse, ValidationErrorResponse};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn create_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::create(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok(Json(post))
}

/// List posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts", body = Vec<Post>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::list(state.store.as_ref()).await?;
    Ok(Json(posts))
}

/// Get a post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::get(state.store.as_ref(), &id).await?;
    Ok(Json(post))
}

/// Delete one of the caller's posts
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post removed", body = MessageResponse),
        (status = 401, description = "Missing token or not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = PostService::delete(state.store.as_ref(), auth_user.user_id(), &id).await?;
    Ok(Json(response))
}

/// Like a post
#[utoipa::path(
    patch,
    path = "/api/posts/like/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Likes, newest first", body = Vec<Like>),
        (status = 400, description = "Post already liked", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn like_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, AppError> {
    let likes = PostService::like(state.store.as_ref(), auth_user.user_id(), &id).await?;
    Ok(Json(likes))
}

/// Remove the caller's like
#[utoipa::path(
    patch,
    path = "/api/posts/unlike/{id}",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Remaining likes", body = Vec<Like>),
        (status = 400, description = "Post has not yet been liked", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn unlike_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Like>>, AppError> {
    let likes = PostService::unlike(state.store.as_ref(), auth_user.user_id(), &id).await?;
    Ok(Json(likes))
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/comment/{id}",
    params(("id" = String, Path, description = "Post ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Comments, newest first", body = Vec<Comment>),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn add_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments =
        PostService::comment(state.store.as_ref(), auth_user.user_id(), &id, dto).await?;
    Ok(Json(comments))
}

/// Delete one of the caller's comments
#[utoipa::path(
    delete,
    path = "/api/posts/comment/{id}/{comment_id}",
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Remaining comments", body = Vec<Comment>),
        (status = 401, description = "Missing token or not the author", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("token" = []))
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = PostService::delete_comment(
        state.store.as_ref(),
        auth_user.user_id(),
        &id,
        &comment_id,
    )
    .await?;
    Ok(Json(comments))
}
