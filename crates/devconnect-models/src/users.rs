//! User entity and registration DTO.

use chrono::{DateTime, Utc};
use devconnect_core::serde::deserialize_trimmed_string;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered account as returned to clients.
///
/// The password hash is deliberately not part of this type; see
/// [`UserCredentials`].
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Login lookup result: the id and the stored bcrypt hash.
#[derive(FromRow, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub password: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    #[schema(example = "secret1")]
    pub password: String,
}

impl std::fmt::Debug for RegisterUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Emails are matched case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Insert payload; `password_hash` is already bcrypt-hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
}
