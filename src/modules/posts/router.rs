use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use super::controller::{
    add_comment, create_post, delete_comment, delete_post, get_post, like_post, list_posts,
    unlike_post,
};
use crate::state::AppState;

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).delete(delete_post))
        .route("/like/{id}", patch(like_post))
        .route("/unlike/{id}", patch(unlike_post))
        .route("/comment/{id}", post(add_comment))
        .route("/comment/{id}/{comment_id}", delete(delete_comment))
}
