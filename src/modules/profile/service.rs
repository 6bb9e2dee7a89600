use anyhow::anyhow;
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use devconnect_core::{AppError, FieldError, parse_id};
use devconnect_db::{ProfileStore, Store, StoreError, UserStore};
use devconnect_models::{
    AddEducationDto, MessageResponse, NewEducation, Profile, ProfileFields, UpsertProfileDto,
};
use devconnect_observability::{track_github_request, track_profile_saved, track_user_deleted};

use super::github::GithubClient;

pub const NO_PROFILE_MESSAGE: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Profile not found";
pub const EDUCATION_NOT_FOUND_MESSAGE: &str = "Education not found";
pub const NO_GITHUB_PROFILE_MESSAGE: &str = "No Github profile found";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

fn not_found(message: &str) -> AppError {
    AppError::not_found(anyhow!(message.to_string()))
}

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(store))]
    pub async fn own_profile(store: &dyn Store, user_id: Uuid) -> Result<Profile, AppError> {
        store
            .find_profile(user_id)
            .await?
            .ok_or_else(|| not_found(NO_PROFILE_MESSAGE))
    }

    #[instrument(skip(store))]
    pub async fn upsert(
        store: &dyn Store,
        user_id: Uuid,
        dto: UpsertProfileDto,
    ) -> Result<Profile, AppError> {
        let existed = store.find_profile(user_id).await?.is_some();

        let profile = match store.upsert_profile(user_id, ProfileFields::from(dto)).await {
            Ok(profile) => profile,
            Err(StoreError::MissingReference) => return Err(not_found(USER_NOT_FOUND_MESSAGE)),
            Err(e) => return Err(e.into()),
        };

        track_profile_saved(!existed);
        Ok(profile)
    }

    #[instrument(skip(store))]
    pub async fn list(store: &dyn Store) -> Result<Vec<Profile>, AppError> {
        Ok(store.list_profiles().await?)
    }

    #[instrument(skip(store))]
    pub async fn by_user(store: &dyn Store, user_id: &str) -> Result<Profile, AppError> {
        let user_id = parse_id(user_id, PROFILE_NOT_FOUND_MESSAGE)?;

        store
            .find_profile(user_id)
            .await?
            .ok_or_else(|| not_found(PROFILE_NOT_FOUND_MESSAGE))
    }

    /// Removes the caller's profile and account. Their posts stay.
    #[instrument(skip(store))]
    pub async fn delete_account(
        store: &dyn Store,
        user_id: Uuid,
    ) -> Result<MessageResponse, AppError> {
        if store.delete_user(user_id).await? {
            tracing::info!(user_id = %user_id, "User deleted");
            track_user_deleted();
        }

        Ok(MessageResponse::new("User deleted"))
    }

    #[instrument(skip(store))]
    pub async fn add_education(
        store: &dyn Store,
        user_id: Uuid,
        dto: AddEducationDto,
    ) -> Result<Profile, AppError> {
        let profile = Self::own_profile(store, user_id).await?;

        let entry = NewEducation::from_dto(dto)
            .ok_or_else(|| AppError::validation(vec![FieldError::new("from", "From date is required")]))?;

        match store.add_education(profile.id, entry).await {
            Ok(_) => {}
            Err(StoreError::MissingReference) => return Err(not_found(NO_PROFILE_MESSAGE)),
            Err(e) => return Err(e.into()),
        }

        Self::own_profile(store, user_id).await
    }

    #[instrument(skip(store))]
    pub async fn remove_education(
        store: &dyn Store,
        user_id: Uuid,
        education_id: &str,
    ) -> Result<Profile, AppError> {
        let profile = Self::own_profile(store, user_id).await?;
        let education_id = parse_id(education_id, EDUCATION_NOT_FOUND_MESSAGE)?;

        if !store.remove_education(profile.id, education_id).await? {
            return Err(not_found(EDUCATION_NOT_FOUND_MESSAGE));
        }

        Self::own_profile(store, user_id).await
    }

    #[instrument(skip(github))]
    pub async fn github_repos(github: &GithubClient, username: &str) -> Result<Value, AppError> {
        let repos = github.latest_repos(username).await?;
        track_github_request(repos.is_some());

        repos.ok_or_else(|| not_found(NO_GITHUB_PROFILE_MESSAGE))
    }
}
