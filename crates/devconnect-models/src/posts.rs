//! Post, like and comment models.
//!
//! Author name and avatar are snapshotted onto posts and comments when
//! they are written, so later profile changes do not rewrite history.

use chrono::{DateTime, Utc};
use devconnect_core::serde::deserialize_trimmed_string;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One user's like on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Like {
    pub user: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: Uuid,
    /// Author id.
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    /// Newest first, at most one per user.
    pub likes: Vec<Like>,
    /// Newest first.
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user_id)
    }

    pub fn comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Text field is required"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Text field is required"))]
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
}
