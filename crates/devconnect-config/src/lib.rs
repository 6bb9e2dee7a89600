//! # DevConnect Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed browser origins
//! - [`database`]: store backend URL and pool size
//! - [`github`]: GitHub API access for the repository proxy
//! - [`server`]: listen address
//!
//! Every struct has a `from_env()` constructor and a `Default` matching
//! the values used when a variable is unset.
//!
//! # Example
//!
//! ```ignore
//! use devconnect_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server = ServerConfig::from_env();
//! println!("listening on {}", server.addr());
//! ```

pub mod cors;
pub mod database;
pub mod github;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use github::GithubConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
