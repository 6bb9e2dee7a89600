use crate::{env_or, env_parse};

pub const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// 100 hours.
pub const DEFAULT_EXPIRY_SECS: i64 = 360_000;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiry: DEFAULT_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env_or("JWT_SECRET", DEFAULT_SECRET),
            expiry: env_parse("JWT_EXPIRY", DEFAULT_EXPIRY_SECS),
        }
    }
}
