//! # DevConnect Auth
//!
//! Bearer token issuing and verification.
//!
//! - [`claims`]: the token payload, `{ user: { id }, iat, exp }`
//! - [`jwt`]: HS256 signing and verification
//!
//! # Example
//!
//! ```ignore
//! use devconnect_auth::{issue_token, verify_token};
//! use devconnect_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(user_id, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user.id, user_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, ClaimsUser};
pub use jwt::{INVALID_TOKEN_MESSAGE, issue_token, verify_token};
