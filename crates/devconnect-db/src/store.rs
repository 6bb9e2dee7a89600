//! Storage contracts.
//!
//! Handlers only see these traits. Each operation touches a single
//! logical document (a user, a profile with its education, a post with its
//! likes and comments) and is atomic with respect to that document.

use std::fmt::Debug;

use async_trait::async_trait;
use uuid::Uuid;

use devconnect_models::{
    Comment, Education, Like, NewComment, NewEducation, NewPost, NewUser, Post, Profile,
    ProfileFields, User, UserCredentials,
};

use crate::error::StoreResult;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_credentials(&self, email: &str) -> StoreResult<Option<UserCredentials>>;

    async fn email_taken(&self, email: &str) -> StoreResult<bool>;

    /// Fails with `StoreError::Duplicate` if the email is already registered.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;

    /// Removes the user together with their profile. Posts, likes and
    /// comments written by the user are left in place.
    async fn delete_user(&self, id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile(&self, user_id: Uuid) -> StoreResult<Option<Profile>>;

    /// Oldest profile first.
    async fn list_profiles(&self) -> StoreResult<Vec<Profile>>;

    /// Creates the user's profile or merges `fields` into the existing one.
    /// Fails with `StoreError::MissingReference` if the user is gone.
    async fn upsert_profile(&self, user_id: Uuid, fields: ProfileFields) -> StoreResult<Profile>;

    async fn add_education(&self, profile_id: Uuid, entry: NewEducation)
    -> StoreResult<Education>;

    /// `false` if the profile has no such entry.
    async fn remove_education(&self, profile_id: Uuid, education_id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post>;

    /// Newest post first.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;

    /// Records a like. Returns `false` without changing anything when the
    /// user already likes the post; the check and the insert are one step.
    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool>;

    /// `false` if the user did not like the post.
    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool>;

    async fn likes(&self, post_id: Uuid) -> StoreResult<Vec<Like>>;

    async fn add_comment(&self, post_id: Uuid, comment: NewComment) -> StoreResult<Comment>;

    async fn remove_comment(&self, post_id: Uuid, comment_id: Uuid) -> StoreResult<bool>;

    async fn comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>>;
}

/// Everything the API needs from a backend.
pub trait Store: UserStore + ProfileStore + PostStore + Debug {}

impl<T> Store for T where T: UserStore + ProfileStore + PostStore + Debug {}
