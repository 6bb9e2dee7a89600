use crate::env_or;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone, Debug)]
pub struct GithubConfig {
    pub api_url: String,
    /// Personal access token; anonymous requests are rate limited harder.
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: "devconnect".to_string(),
        }
    }
}

impl GithubConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("GITHUB_API_URL", DEFAULT_API_URL),
            token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            user_agent: env_or("GITHUB_USER_AGENT", "devconnect"),
        }
    }
}
