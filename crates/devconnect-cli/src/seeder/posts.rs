//! Post, like and comment seeding.

use std::time::Instant;

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rayon::prelude::*;

use devconnect_db::{PostStore, Store, StoreError};
use devconnect_models::{NewComment, NewPost, User};

pub fn generate_posts(authors: &[User], posts_per_user: usize) -> Vec<NewPost> {
    authors
        .par_iter()
        .flat_map(|author| {
            (0..posts_per_user)
                .map(|_| NewPost {
                    user: author.id,
                    text: Sentence(8..24).fake(),
                    name: author.name.clone(),
                    avatar: author.avatar.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn random_user(users: &[User]) -> &User {
    &users[(0..users.len()).fake::<usize>()]
}

/// Inserts posts, then has random users like and comment on them.
///
/// Returns `(posts, likes, comments)` written.
pub async fn seed_posts(
    store: &dyn Store,
    users: &[User],
    posts_per_user: usize,
    max_likes_per_post: usize,
    comments_per_post: usize,
) -> Result<(usize, usize, usize), StoreError> {
    if users.is_empty() {
        return Ok((0, 0, 0));
    }

    let start_time = Instant::now();
    let posts = generate_posts(users, posts_per_user);
    println!("📝 Seeding {} posts...", posts.len());

    let (mut post_count, mut like_count, mut comment_count) = (0, 0, 0);

    for post in posts {
        let post = store.insert_post(post).await?;
        post_count += 1;

        // a repeated pick is rejected by the store and simply not counted
        let likes = (0..=max_likes_per_post).fake::<usize>();
        for _ in 0..likes {
            if store.add_like(post.id, random_user(users).id).await? {
                like_count += 1;
            }
        }

        for _ in 0..comments_per_post {
            let commenter = random_user(users);
            let comment = NewComment {
                user: commenter.id,
                text: Sentence(3..12).fake(),
                name: commenter.name.clone(),
                avatar: commenter.avatar.clone(),
            };
            store.add_comment(post.id, comment).await?;
            comment_count += 1;
        }
    }

    println!(
        "   ✓ {} posts, {} likes, {} comments in {:.2}s",
        post_count,
        like_count,
        comment_count,
        start_time.elapsed().as_secs_f64()
    );

    Ok((post_count, like_count, comment_count))
}
