//! # DevConnect Models
//!
//! Domain entities and request/response DTOs.
//!
//! - [`auth`]: login request and token responses
//! - [`users`]: user entity, registration DTO, stored credentials
//! - [`profiles`]: developer profiles, social links, education entries
//! - [`posts`]: posts, likes, comments
//!
//! Request DTOs derive `validator::Validate`; their messages are the exact
//! strings returned to clients in the `errors` list.

pub mod auth;
pub mod posts;
pub mod profiles;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, MessageResponse, TokenResponse};
pub use posts::{Comment, CreateCommentDto, CreatePostDto, Like, NewComment, NewPost, Post};
pub use profiles::{
    AddEducationDto, Education, NewEducation, Profile, ProfileFields, ProfileOwner, SocialLinks,
    UpsertProfileDto, parse_skills,
};
pub use users::{NewUser, RegisterUserDto, User, UserCredentials, normalize_email};
