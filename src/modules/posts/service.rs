use anyhow::anyhow;
use tracing::instrument;
use uuid::Uuid;

use devconnect_core::{AppError, parse_id};
use devconnect_db::{PostStore, Store, StoreError, UserStore};
use devconnect_models::{
    Comment, CreateCommentDto, CreatePostDto, Like, MessageResponse, NewComment, NewPost, Post,
    User,
};
use devconnect_observability::track_post_operation;

pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found";
pub const COMMENT_NOT_FOUND_MESSAGE: &str = "No comment found";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const NOT_AUTHORIZED_MESSAGE: &str = "User not authorized";
pub const COMMENT_NOT_AUTHORIZED_MESSAGE: &str = "User is not authorized";
pub const ALREADY_LIKED_MESSAGE: &str = "Post already liked";
pub const NOT_LIKED_MESSAGE: &str = "Post has not yet been liked";

fn not_found(message: &str) -> AppError {
    AppError::not_found(anyhow!(message.to_string()))
}

fn not_authorized(message: &str) -> AppError {
    AppError::unauthorized(message.to_string())
}

/// Store failures on a post-scoped write: a vanished post is a 404.
fn post_write_error(err: StoreError) -> AppError {
    match err {
        StoreError::MissingReference => not_found(POST_NOT_FOUND_MESSAGE),
        other => other.into(),
    }
}

pub struct PostService;

impl PostService {
    async fn author(store: &dyn Store, user_id: Uuid) -> Result<User, AppError> {
        store
            .find_user(user_id)
            .await?
            .ok_or_else(|| not_found(USER_NOT_FOUND_MESSAGE))
    }

    async fn find(store: &dyn Store, id: Uuid) -> Result<Post, AppError> {
        store
            .find_post(id)
            .await?
            .ok_or_else(|| not_found(POST_NOT_FOUND_MESSAGE))
    }

    #[instrument(skip(store))]
    pub async fn create(
        store: &dyn Store,
        user_id: Uuid,
        dto: CreatePostDto,
    ) -> Result<Post, AppError> {
        let author = Self::author(store, user_id).await?;

        let post = store
            .insert_post(NewPost {
                user: author.id,
                text: dto.text,
                name: author.name,
                avatar: author.avatar,
            })
            .await?;

        track_post_operation("create");
        Ok(post)
    }

    #[instrument(skip(store))]
    pub async fn list(store: &dyn Store) -> Result<Vec<Post>, AppError> {
        Ok(store.list_posts().await?)
    }

    #[instrument(skip(store))]
    pub async fn get(store: &dyn Store, post_id: &str) -> Result<Post, AppError> {
        let post_id = parse_id(post_id, POST_NOT_FOUND_MESSAGE)?;
        Self::find(store, post_id).await
    }

    #[instrument(skip(store))]
    pub async fn delete(
        store: &dyn Store,
        user_id: Uuid,
        post_id: &str,
    ) -> Result<MessageResponse, AppError> {
        let post = Self::get(store, post_id).await?;

        if post.user != user_id {
            tracing::warn!(post_id = %post.id, user_id = %user_id, "Delete by non-author refused");
            return Err(not_authorized(NOT_AUTHORIZED_MESSAGE));
        }

        store.delete_post(post.id).await?;
        track_post_operation("delete");

        Ok(MessageResponse::new("Post removed"))
    }

    #[instrument(skip(store))]
    pub async fn like(store: &dyn Store, user_id: Uuid, post_id: &str) -> Result<Vec<Like>, AppError> {
        let post_id = parse_id(post_id, POST_NOT_FOUND_MESSAGE)?;

        let added = store
            .add_like(post_id, user_id)
            .await
            .map_err(post_write_error)?;
        if !added {
            return Err(AppError::bad_request(anyhow!(ALREADY_LIKED_MESSAGE)));
        }

        track_post_operation("like");
        Ok(store.likes(post_id).await?)
    }

    #[instrument(skip(store))]
    pub async fn unlike(
        store: &dyn Store,
        user_id: Uuid,
        post_id: &str,
    ) -> Result<Vec<Like>, AppError> {
        let post = Self::get(store, post_id).await?;

        if !store.remove_like(post.id, user_id).await? {
            return Err(AppError::bad_request(anyhow!(NOT_LIKED_MESSAGE)));
        }

        track_post_operation("unlike");
        Ok(store.likes(post.id).await?)
    }

    #[instrument(skip(store))]
    pub async fn comment(
        store: &dyn Store,
        user_id: Uuid,
        post_id: &str,
        dto: CreateCommentDto,
    ) -> Result<Vec<Comment>, AppError> {
        let post_id = parse_id(post_id, POST_NOT_FOUND_MESSAGE)?;
        let author = Self::author(store, user_id).await?;

        store
            .add_comment(
                post_id,
                NewComment {
                    user: author.id,
                    text: dto.text,
                    name: author.name,
                    avatar: author.avatar,
                },
            )
            .await
            .map_err(post_write_error)?;

        track_post_operation("comment");
        Ok(store.comments(post_id).await?)
    }

    /// Removes exactly the addressed comment, if the caller wrote it.
    #[instrument(skip(store))]
    pub async fn delete_comment(
        store: &dyn Store,
        user_id: Uuid,
        post_id: &str,
        comment_id: &str,
    ) -> Result<Vec<Comment>, AppError> {
        let post = Self::get(store, post_id).await?;
        let comment_id = parse_id(comment_id, COMMENT_NOT_FOUND_MESSAGE)?;

        let comment = post
            .comment(comment_id)
            .ok_or_else(|| not_found(COMMENT_NOT_FOUND_MESSAGE))?;
        if comment.user != user_id {
            return Err(not_authorized(COMMENT_NOT_AUTHORIZED_MESSAGE));
        }

        if !store.remove_comment(post.id, comment_id).await? {
            return Err(not_found(COMMENT_NOT_FOUND_MESSAGE));
        }

        track_post_operation("uncomment");
        Ok(store.comments(post.id).await?)
    }
}
