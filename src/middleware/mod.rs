//! Request guards.
//!
//! - [`auth`]: `x-auth-token` verification, as an extractor and as a
//!   router-wide middleware
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, require_auth};
//!
//! // Per handler
//! async fn me(auth_user: AuthUser) -> impl IntoResponse {
//!     let user_id = auth_user.user_id();
//!     // ...
//! }
//!
//! // Whole router
//! let posts = init_posts_router()
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod auth;
