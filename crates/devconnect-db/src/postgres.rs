use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use devconnect_config::DatabaseConfig;
use devconnect_models::{
    Comment, Education, Like, NewComment, NewEducation, NewPost, NewUser, Post, Profile,
    ProfileFields, ProfileOwner, SocialLinks, User, UserCredentials,
};

use crate::error::{StoreError, StoreResult};
use crate::store::{PostStore, ProfileStore, UserStore};

const USER_COLUMNS: &str = "id, name, email, avatar, created_at";

const PROFILE_SELECT: &str = r#"
    SELECT p.id, p.user_id, u.name AS user_name, u.avatar AS user_avatar,
           p.company, p.website, p.location, p.bio, p.status, p.github_username,
           p.skills, p.youtube, p.twitter, p.facebook, p.linkedin, p.instagram,
           p.created_at, p.updated_at
    FROM profiles p
    JOIN users u ON u.id = p.user_id
"#;

const EDUCATION_COLUMNS: &str =
    "id, profile_id, school, degree, field_of_study, from_date, to_date, is_current, description";

const POST_COLUMNS: &str = "id, user_id, text, name, avatar, created_at";

const COMMENT_COLUMNS: &str = "id, post_id, user_id, text, name, avatar, created_at";

/// PostgreSQL-backed store.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    async fn educations_for(&self, profile_ids: &[Uuid]) -> StoreResult<HashMap<Uuid, Vec<Education>>> {
        let rows = sqlx::query_as::<_, EducationRow>(&format!(
            "SELECT {EDUCATION_COLUMNS} FROM educations WHERE profile_id = ANY($1) ORDER BY created_at DESC"
        ))
        .bind(profile_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Education>> = HashMap::new();
        for row in rows {
            grouped.entry(row.profile_id).or_default().push(row.into());
        }
        Ok(grouped)
    }

    async fn assemble_profiles(&self, rows: Vec<ProfileRow>) -> StoreResult<Vec<Profile>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut educations = self.educations_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let education = educations.remove(&row.id).unwrap_or_default();
                row.into_profile(education)
            })
            .collect())
    }

    async fn assemble_posts(&self, rows: Vec<PostRow>) -> StoreResult<Vec<Post>> {
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();

        let like_rows = sqlx::query_as::<_, LikeRow>(
            "SELECT post_id, user_id FROM post_likes WHERE post_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let comment_rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM post_comments WHERE post_id = ANY($1) ORDER BY created_at DESC"
        ))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut likes: HashMap<Uuid, Vec<Like>> = HashMap::new();
        for row in like_rows {
            likes
                .entry(row.post_id)
                .or_default()
                .push(Like { user: row.user_id });
        }

        let mut comments: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for row in comment_rows {
            comments.entry(row.post_id).or_default().push(row.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let likes = likes.remove(&row.id).unwrap_or_default();
                let comments = comments.remove(&row.id).unwrap_or_default();
                row.into_post(likes, comments)
            })
            .collect())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_credentials(&self, email: &str) -> StoreResult<Option<UserCredentials>> {
        let credentials =
            sqlx::query_as::<_, UserCredentials>("SELECT id, password FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(credentials)
    }

    async fn email_taken(&self, email: &str) -> StoreResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password, avatar) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_profile(&self, user_id: Uuid) -> StoreResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!("{PROFILE_SELECT} WHERE p.user_id = $1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.assemble_profiles(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "{PROFILE_SELECT} ORDER BY p.created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.assemble_profiles(rows).await
    }

    async fn upsert_profile(&self, user_id: Uuid, fields: ProfileFields) -> StoreResult<Profile> {
        // Optional columns keep their stored value when the update leaves them unset.
        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, company, website, location, bio, status, github_username, skills,
                youtube, twitter, facebook, linkedin, instagram
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                company = COALESCE(EXCLUDED.company, profiles.company),
                website = COALESCE(EXCLUDED.website, profiles.website),
                location = COALESCE(EXCLUDED.location, profiles.location),
                bio = COALESCE(EXCLUDED.bio, profiles.bio),
                status = EXCLUDED.status,
                github_username = COALESCE(EXCLUDED.github_username, profiles.github_username),
                skills = EXCLUDED.skills,
                youtube = COALESCE(EXCLUDED.youtube, profiles.youtube),
                twitter = COALESCE(EXCLUDED.twitter, profiles.twitter),
                facebook = COALESCE(EXCLUDED.facebook, profiles.facebook),
                linkedin = COALESCE(EXCLUDED.linkedin, profiles.linkedin),
                instagram = COALESCE(EXCLUDED.instagram, profiles.instagram),
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(&fields.company)
        .bind(&fields.website)
        .bind(&fields.location)
        .bind(&fields.bio)
        .bind(&fields.status)
        .bind(&fields.github_username)
        .bind(&fields.skills)
        .bind(&fields.social.youtube)
        .bind(&fields.social.twitter)
        .bind(&fields.social.facebook)
        .bind(&fields.social.linkedin)
        .bind(&fields.social.instagram)
        .execute(&self.pool)
        .await?;

        self.find_profile(user_id)
            .await?
            .ok_or(StoreError::MissingReference)
    }

    async fn add_education(
        &self,
        profile_id: Uuid,
        entry: NewEducation,
    ) -> StoreResult<Education> {
        let row = sqlx::query_as::<_, EducationRow>(&format!(
            r#"
            INSERT INTO educations (
                profile_id, school, degree, field_of_study, from_date, to_date, is_current, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {EDUCATION_COLUMNS}
            "#
        ))
        .bind(profile_id)
        .bind(&entry.school)
        .bind(&entry.degree)
        .bind(&entry.field_of_study)
        .bind(entry.from)
        .bind(entry.to)
        .bind(entry.current)
        .bind(&entry.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn remove_education(&self, profile_id: Uuid, education_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1 AND profile_id = $2")
            .bind(education_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn insert_post(&self, post: NewPost) -> StoreResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (user_id, text, name, avatar) VALUES ($1, $2, $3, $4) RETURNING {POST_COLUMNS}"
        ))
        .bind(post.user)
        .bind(&post.text)
        .bind(&post.name)
        .bind(&post.avatar)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post(Vec::new(), Vec::new()))
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.assemble_posts(rows).await
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(self.assemble_posts(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query(
            "INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove_like(&self, post_id: Uuid, user_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn likes(&self, post_id: Uuid) -> StoreResult<Vec<Like>> {
        let users = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM post_likes WHERE post_id = $1 ORDER BY created_at DESC",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(|user| Like { user }).collect())
    }

    async fn add_comment(&self, post_id: Uuid, comment: NewComment) -> StoreResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO post_comments (post_id, user_id, text, name, avatar) VALUES ($1, $2, $3, $4, $5) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(post_id)
        .bind(comment.user)
        .bind(&comment.text)
        .bind(&comment.name)
        .bind(&comment.avatar)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn remove_comment(&self, post_id: Uuid, comment_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM post_comments WHERE id = $1 AND post_id = $2")
            .bind(comment_id)
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn comments(&self, post_id: Uuid) -> StoreResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM post_comments WHERE post_id = $1 ORDER BY created_at DESC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

#[derive(FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    user_name: String,
    user_avatar: String,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: String,
    github_username: Option<String>,
    skills: Vec<String>,
    youtube: Option<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self, education: Vec<Education>) -> Profile {
        Profile {
            id: self.id,
            user: ProfileOwner {
                id: self.user_id,
                name: self.user_name,
                avatar: self.user_avatar,
            },
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: self.skills,
            social: SocialLinks {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
            education,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(FromRow)]
struct EducationRow {
    id: Uuid,
    profile_id: Uuid,
    school: String,
    degree: String,
    field_of_study: String,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    is_current: bool,
    description: Option<String>,
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Education {
            id: row.id,
            school: row.school,
            degree: row.degree,
            field_of_study: row.field_of_study,
            from: row.from_date,
            to: row.to_date,
            current: row.is_current,
            description: row.description,
        }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, likes: Vec<Like>, comments: Vec<Comment>) -> Post {
        Post {
            id: self.id,
            user: self.user_id,
            text: self.text,
            name: self.name,
            avatar: self.avatar,
            likes,
            comments,
            created_at: self.created_at,
        }
    }
}

#[derive(FromRow)]
struct LikeRow {
    post_id: Uuid,
    user_id: Uuid,
}

#[derive(FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            user: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            created_at: row.created_at,
        }
    }
}
