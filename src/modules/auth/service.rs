use tracing::instrument;
use uuid::Uuid;

use devconnect_auth::issue_token;
use devconnect_config::JwtConfig;
use devconnect_core::{AppError, FieldError, verify_password};
use devconnect_db::{Store, UserStore};
use devconnect_models::{LoginRequest, TokenResponse, User, normalize_email};
use devconnect_observability::{track_jwt_issued, track_login_failure, track_login_success};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Same error for unknown email and wrong password.
fn invalid_credentials() -> AppError {
    AppError::validation(vec![FieldError::general(INVALID_CREDENTIALS_MESSAGE)])
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store))]
    pub async fn current_user(store: &dyn Store, user_id: Uuid) -> Result<User, AppError> {
        store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!(USER_NOT_FOUND_MESSAGE)))
    }

    #[instrument(skip(store, jwt_config, dto), fields(email = %dto.email))]
    pub async fn login(
        store: &dyn Store,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&dto.email);

        let Some(credentials) = store.find_credentials(&email).await? else {
            track_login_failure("unknown_email");
            return Err(invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password)? {
            track_login_failure("wrong_password");
            return Err(invalid_credentials());
        }

        let token = issue_token(credentials.id, jwt_config)?;
        track_login_success();
        track_jwt_issued();

        Ok(TokenResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use devconnect_core::hash_password;
    use devconnect_db::MemoryStore;
    use devconnect_models::NewUser;

    async fn store_with_alice() -> (MemoryStore, User) {
        let store = MemoryStore::new();
        let user = store
            .insert_user(NewUser {
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                avatar: "avatar".to_string(),
                password_hash: hash_password("secret1").unwrap(),
            })
            .await
            .unwrap();
        (store, user)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let (store, _) = store_with_alice().await;
        let response = AuthService::login(&store, &JwtConfig::default(), login("A@x.com", "secret1"))
            .await
            .unwrap();
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (store, _) = store_with_alice().await;
        let config = JwtConfig::default();

        let wrong_password = AuthService::login(&store, &config, login("a@x.com", "nope123"))
            .await
            .unwrap_err();
        let unknown_email = AuthService::login(&store, &config, login("b@x.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
        assert_eq!(wrong_password.status, unknown_email.status);
        assert_eq!(wrong_password.field_errors, unknown_email.field_errors);
    }

    #[tokio::test]
    async fn test_current_user_gone() {
        let (store, user) = store_with_alice().await;
        store.delete_user(user.id).await.unwrap();

        let err = AuthService::current_user(&store, user.id).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
