use serde::Serialize;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use devconnect_core::FieldError;
use devconnect_models::{
    AddEducationDto, Comment, CreateCommentDto, CreatePostDto, Education, Like, LoginRequest,
    MessageResponse, Post, Profile, ProfileOwner, RegisterUserDto, SocialLinks, TokenResponse,
    UpsertProfileDto, User,
};

use crate::middleware::auth::AUTH_HEADER;

/// Body of every non-validation error.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Body of a validation failure.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::auth::controller::get_current_user,
        crate::modules::auth::controller::login_user,
        crate::modules::profile::controller::get_my_profile,
        crate::modules::profile::controller::upsert_profile,
        crate::modules::profile::controller::list_profiles,
        crate::modules::profile::controller::get_profile_by_user,
        crate::modules::profile::controller::delete_account,
        crate::modules::profile::controller::add_education,
        crate::modules::profile::controller::remove_education,
        crate::modules::profile::controller::get_github_repos,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::list_posts,
        crate::modules::posts::controller::get_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::posts::controller::like_post,
        crate::modules::posts::controller::unlike_post,
        crate::modules::posts::controller::add_comment,
        crate::modules::posts::controller::delete_comment,
    ),
    components(
        schemas(
            User,
            RegisterUserDto,
            LoginRequest,
            TokenResponse,
            MessageResponse,
            Profile,
            ProfileOwner,
            SocialLinks,
            Education,
            UpsertProfileDto,
            AddEducationDto,
            Post,
            Like,
            Comment,
            CreatePostDto,
            CreateCommentDto,
            FieldError,
            ErrorResponse,
            ValidationErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Account registration"),
        (name = "Authentication", description = "Login and current user"),
        (name = "Profiles", description = "Developer profiles, education and GitHub repositories"),
        (name = "Posts", description = "Posts, likes and comments")
    ),
    info(
        title = "DevConnect API",
        version = "0.1.0",
        description = "Social network backend for developers: profiles, posts, likes and comments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_HEADER))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/auth",
            "/api/profile",
            "/api/profile/education/{edu_id}",
            "/api/posts/comment/{id}/{comment_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
