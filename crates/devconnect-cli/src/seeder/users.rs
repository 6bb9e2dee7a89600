//! User seeding.

use std::time::Instant;

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;

use devconnect_core::gravatar_url;
use devconnect_db::{Store, StoreError, UserStore};
use devconnect_models::{NewUser, User, normalize_email};

/// Builds `count` users sharing one password hash.
///
/// Emails carry the index (`first.last+7@example.com`) so a single batch
/// never collides with itself.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<NewUser> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_user(idx, password_hash))
        .collect()
}

fn generate_user(idx: usize, password_hash: &str) -> NewUser {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email = normalize_email(&format!("{first_name}.{last_name}+{idx}@example.com"));

    NewUser {
        name: format!("{first_name} {last_name}"),
        avatar: gravatar_url(&email),
        email,
        password_hash: password_hash.to_string(),
    }
}

/// Inserts the users, skipping emails that are already registered.
///
/// Returns the inserted users and the number skipped.
pub async fn seed_users(
    store: &dyn Store,
    users: Vec<NewUser>,
) -> Result<(Vec<User>, usize), StoreError> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", users.len());

    let mut inserted = Vec::with_capacity(users.len());
    let mut skipped = 0;

    for user in users {
        match store.insert_user(user).await {
            Ok(user) => inserted.push(user),
            Err(StoreError::Duplicate) => skipped += 1,
            Err(e) => return Err(e),
        }
    }

    println!(
        "   ✓ {} users in {:.2}s ({} already existed)",
        inserted.len(),
        start_time.elapsed().as_secs_f64(),
        skipped
    );

    Ok((inserted, skipped))
}
