//! Fake data generation for development databases.
//!
//! Data is generated in parallel with rayon, then written through the
//! [`Store`] one document at a time.

mod models;
mod posts;
mod profiles;
mod users;

use std::time::Instant;

use devconnect_db::Store;

pub use models::{SeedConfig, SeedSummary};
pub use posts::{generate_posts, seed_posts};
pub use profiles::{generate_profiles, seed_profiles};
pub use users::{generate_users, seed_users};

/// Seeds users, profiles for a share of them, and posts with likes and
/// comments from all seeded users.
pub async fn seed_all(
    store: &dyn Store,
    config: SeedConfig,
    password_hash: &str,
) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!("🌱 Starting database seed...\n");

    let (users, skipped_users) =
        seed_users(store, generate_users(config.users, password_hash)).await?;

    let with_profiles = config.profiles().min(users.len());
    let profiles = seed_profiles(store, &users[..with_profiles]).await?;

    let (posts, likes, comments) = seed_posts(
        store,
        &users,
        config.posts_per_user,
        config.max_likes_per_post,
        config.comments_per_post,
    )
    .await?;

    println!(
        "\n✅ Seeding complete in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(SeedSummary {
        users: users.len(),
        skipped_users,
        profiles,
        posts,
        likes,
        comments,
    })
}
