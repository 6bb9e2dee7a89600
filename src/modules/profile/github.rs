//! Outbound client for a user's public GitHub repositories.

use std::time::Duration;

use anyhow::anyhow;
use reqwest::{Url, header::AUTHORIZATION};
use serde_json::Value;
use tracing::instrument;

use devconnect_config::GithubConfig;
use devconnect_core::AppError;

const REPO_LIMIT: &str = "5";
const REPO_SORT: &str = "created:asc";

#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, config })
    }

    /// `{api_url}/users/{username}/repos?per_page=5&sort=created:asc`
    pub fn repos_url(&self, username: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.config.api_url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("GitHub API URL cannot be a base: {}", self.config.api_url))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", REPO_LIMIT)
            .append_pair("sort", REPO_SORT);

        Ok(url)
    }

    /// Fetches the user's repositories and passes GitHub's JSON through.
    ///
    /// Returns `None` when GitHub answers with a non-success status.
    #[instrument(skip(self))]
    pub async fn latest_repos(&self, username: &str) -> Result<Option<Value>, AppError> {
        let mut request = self.http.get(self.repos_url(username)?);
        if let Some(token) = &self.config.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "GitHub returned non-success status");
            return Ok(None);
        }

        Ok(Some(response.json::<Value>().await?))
    }
}
