use std::sync::Arc;

use anyhow::Context;
use devconnect_config::{CorsConfig, DatabaseConfig, GithubConfig, JwtConfig};
use devconnect_db::{Store, init_store};

use crate::modules::profile::github::GithubClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub github: GithubClient,
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let store = init_store(&db_config)
        .await
        .context("Failed to initialize store")?;

    Ok(AppState {
        store,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        github: GithubClient::new(GithubConfig::from_env())?,
    })
}
