//! # DevConnect DB
//!
//! Persistence for users, profiles and posts.
//!
//! The API talks to a [`Store`] trait object. Two backends implement it:
//!
//! - [`PgStore`]: PostgreSQL through SQLx, with embedded migrations
//! - [`MemoryStore`]: in-process tables, used by tests and demos
//!
//! # Example
//!
//! ```ignore
//! use devconnect_config::DatabaseConfig;
//! use devconnect_db::init_store;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//!     let store = init_store(&config).await.expect("Failed to initialize store");
//!     let posts = store.list_posts().await;
//! }
//! ```

use std::sync::Arc;

use devconnect_config::DatabaseConfig;

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{PostStore, ProfileStore, Store, UserStore};

/// Builds the backend named by `config.url`.
///
/// PostgreSQL stores are migrated before being returned.
pub async fn init_store(config: &DatabaseConfig) -> StoreResult<Arc<dyn Store>> {
    if config.is_memory() {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = PgStore::connect(config).await?;
    store.migrate().await?;
    tracing::info!("Connected to PostgreSQL and applied migrations");
    Ok(Arc::new(store))
}
