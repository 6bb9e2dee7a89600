//! # DevConnect Core
//!
//! Core types, errors, and utilities for the DevConnect API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`avatar`]: Gravatar URL derivation for new accounts
//! - [`ids`]: Path identifier parsing
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use devconnect_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret1")?;
//! assert!(verify_password("secret1", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Post not found"));
//! ```

pub mod avatar;
pub mod errors;
pub mod ids;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use avatar::gravatar_url;
pub use errors::{AppError, FieldError};
pub use ids::parse_id;
pub use password::{hash_password, verify_password};
