use tracing::instrument;

use devconnect_auth::issue_token;
use devconnect_config::JwtConfig;
use devconnect_core::{AppError, FieldError, gravatar_url, hash_password};
use devconnect_db::{Store, StoreError, UserStore};
use devconnect_models::{NewUser, RegisterUserDto, TokenResponse, normalize_email};
use devconnect_observability::{track_jwt_issued, track_user_registered};

pub const USER_EXISTS_MESSAGE: &str = "User already exists";

fn user_exists() -> AppError {
    AppError::validation(vec![FieldError::general(USER_EXISTS_MESSAGE)])
}

pub struct UserService;

impl UserService {
    #[instrument(skip(store, jwt_config))]
    pub async fn register(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        dto: RegisterUserDto,
    ) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&dto.email);

        if store.email_taken(&email).await? {
            return Err(user_exists());
        }

        let new_user = NewUser {
            name: dto.name,
            avatar: gravatar_url(&email),
            email,
            password_hash: hash_password(&dto.password)?,
        };

        // a concurrent registration can still win the race to the unique index
        let user = match store.insert_user(new_user).await {
            Ok(user) => user,
            Err(StoreError::Duplicate) => return Err(user_exists()),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %user.id, "User registered");
        track_user_registered();

        let token = issue_token(user.id, jwt_config)?;
        track_jwt_issued();

        Ok(TokenResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use devconnect_auth::verify_token;
    use devconnect_db::MemoryStore;

    fn dto(email: &str) -> RegisterUserDto {
        RegisterUserDto {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_issues_token_for_new_user() {
        let store = MemoryStore::new();
        let config = JwtConfig::default();

        let response = UserService::register(&store, &config, dto("A@x.com"))
            .await
            .unwrap();
        let claims = verify_token(&response.token, &config).unwrap();

        let user = store.find_user(claims.user_id()).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
        assert!(user.avatar.starts_with("https://www.gravatar.com/avatar/"));

        let creds = store.find_credentials("a@x.com").await.unwrap().unwrap();
        assert_ne!(creds.password, "secret1");
    }

    #[tokio::test]
    async fn test_register_twice_rejected() {
        let store = MemoryStore::new();
        let config = JwtConfig::default();

        UserService::register(&store, &config, dto("a@x.com"))
            .await
            .unwrap();
        let err = UserService::register(&store, &config, dto("a@x.com"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.field_errors[0].message, USER_EXISTS_MESSAGE);
    }
}
