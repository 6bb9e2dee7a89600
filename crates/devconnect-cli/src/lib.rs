//! # DevConnect CLI
//!
//! Database seeding utilities for DevConnect testing and development.
//!
//! Seeding goes through the same [`devconnect_db::Store`] the API uses, so
//! it works against PostgreSQL and the in-memory backend alike.
//!
//! ## Usage
//!
//! ```ignore
//! use devconnect_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20).with_posts_per_user(3);
//! let summary = seed_all(store.as_ref(), config, "password123").await?;
//! ```

pub mod seeder;
