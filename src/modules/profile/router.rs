use axum::{
    Router,
    routing::{get, patch},
};

use super::controller::{
    add_education, delete_account, get_github_repos, get_my_profile, get_profile_by_user,
    list_profiles, remove_education, upsert_profile,
};
use crate::state::AppState;

/// Public and protected routes share this router; protected handlers take
/// an `AuthUser`.
pub fn init_profile_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_profiles)
                .post(upsert_profile)
                .delete(delete_account),
        )
        .route("/me", get(get_my_profile))
        .route("/user/{user_id}", get(get_profile_by_user))
        .route("/education", patch(add_education))
        .route("/education/{edu_id}", patch(remove_education))
        .route("/github/{username}", get(get_github_repos))
}
