//! In-process store.
//!
//! All tables live behind one `RwLock`, so every operation sees and leaves
//! a consistent snapshot.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use devconnect_models::{
    Comment, Education, Like, NewComment, NewEducation, NewPost, NewUser, Post, Profile,
    ProfileFields, ProfileOwner, User, UserCredentials,
};

use crate::error::{StoreError, StoreResult};
use crate::store::{PostStore, ProfileStore, UserStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRecord>,
    profiles: Vec<ProfileRecord>,
    /// Oldest first.
    posts: Vec<Post>,
}

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

#[derive(Debug, Clone)]
struct ProfileRecord {
    id: Uuid,
    user_id: Uuid,
    fields: ProfileFields,
    education: Vec<Education>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl Tables {
    fn user(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.iter().find(|r| r.user.id == id)
    }

    fn post_mut(&mut self, id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Joins a profile with its owner. Profiles whose user is gone are skipped.
    fn profile_view(&self, record: &ProfileRecord) -> Option<Profile> {
        let owner = self.user(record.user_id)?;
        let fields = record.fields.clone();

        Some(Profile {
            id: record.id,
            user: ProfileOwner {
                id: owner.user.id,
                name: owner.user.name.clone(),
                avatar: owner.user.avatar.clone(),
            },
            company: fields.company,
            website: fields.website,
            location: fields.location,
            bio: fields.bio,
            status: fields.status,
            github_username: fields.github_username,
            skills: fields.skills,
            social: fields.social,
            education: record.education.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.user(id).map(|r| r.user.clone()))
    }

    async fn find_credentials(&self, email: &str) -> StoreResult<Option<UserCredentials>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| UserCredentials {
                id: r.user.id,
                password: r.password_hash.clone(),
            }))
    }

    async fn email_taken(&self, email: &str) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|r| r.user.email == email))
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|r| r.user.email == user.email) {
            return Err(StoreError::Duplicate);
        }

        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: Utc::now(),
        };
        tables.users.push(UserRecord {
            user: created.clone(),
            password_hash: user.password_hash,
        });

        Ok(created)
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        tables.profiles.retain(|p| p.user_id != id);

        let before = tables.users.len();
        tables.users.retain(|r| r.user.id != id);
        Ok(tables.users.len() < before)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile(&self, user_id: Uuid) -> StoreResult<Option<Profile>> {
        let tables = self.tables.read().await;
        Ok(tables
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .and_then(|p| tables.profile_view(p)))
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let tables = self.tables.read().await;
        Ok(tables
            .profiles
            .iter()
            .filter_map(|p| tables.profile_view(p))
            .collect())
    }

    async fn upsert_profile(&self, user_id: Uuid, fields: ProfileFields) -> StoreResult<Profile> {
        let mut tables = self.tables.write().await;
        if tables.user(user_id).is_none() {
            return Err(StoreError::MissingReference);
        }

        let now = Utc::now();
        let index = match tables.profiles.iter().position(|p| p.user_id == user_id) {
            Some(index) => {
                let record = &mut tables.profiles[index];
                record.fields = fields.merged_onto(&record.fields);
                record.updated_at = now;
                index
            }
            None => {
                tables.profiles.push(ProfileRecord {
                    id: Uuid::new_v4(),
                    user_id,
                    fields,
                    education: Vec::new(),
                    created_at: now,
                    updated_at: now,
                });
                tables.profiles.len() - 1
            }
        };

        tables
            .profile_view(&tables.profiles[index])
            .ok_or(StoreError::MissingReference)
    }

    async fn add_education(
        &self,
        profile_id: Uuid,
        entry: NewEducation,
    ) -> StoreResult<Education> {
        let mut tables = self.tables.write().await;
        let record = tables
            .profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .ok_or(StoreError::MissingReference)?;

        let education = entry.into_education(Uuid::new_v4());
        record.education.insert(0, education.clone());
        record.updated_at = Utc::now();

        Ok(education)
    }

    async fn remove_education(&self, profile_id: Uuid, education_id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.profiles.iter_mut().find(|p| p.id == profile_id) else {
            return Ok(false);
        };

        match record.education.iter().position(|e| e.id == education_id) {
            Some(index) => {
                record.education.remove(index);
                record.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let created = Post {
            id: Uuid::new_v4(),
            user: post.user,
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        self.tables.write().await.posts.push(created.clone());
        Ok(created)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().rev().cloned().collect())
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        Ok(tables.posts.len() < before)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let post = tables
            .post_mut(post_id)
            .ok_or(StoreError::MissingReference)?;

        if post.is_liked_by(user_id) {
            return Ok(false);
        }
        post.likes.insert(0, Like { user: user_id });
        Ok(true)
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(post) = tables.post_mut(post_id) else {
            return Ok(false);
        };

        let before = post.likes.len();
        post.likes.retain(|like| like.user != user_id);
        Ok(post.likes.len() < before)
    }

    async fn likes(&self, post_id: Uuid) -> StoreResult<Vec<Like>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.likes.clone())
            .unwrap_or_default())
    }

    async fn add_comment(&self, post_id: Uuid, comment: NewComment) -> StoreResult<Comment> {
        let mut tables = self.tables.write().await;
        let post = tables
            .post_mut(post_id)
            .ok_or(StoreError::MissingReference)?;

        let created = Comment {
            id: Uuid::new_v4(),
            user: comment.user,
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            created_at: Utc::now(),
        };
        post.comments.insert(0, created.clone());
        Ok(created)
    }

    async fn remove_comment(&self, post_id: Uuid, comment_id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(post) = tables.post_mut(post_id) else {
            return Ok(false);
        };

        let before = post.comments.len();
        post.comments.retain(|c| c.id != comment_id);
        Ok(post.comments.len() < before)
    }

    async fn comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.comments.clone())
            .unwrap_or_default())
    }
}
