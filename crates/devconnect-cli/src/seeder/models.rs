//! Seeding configuration and results.

/// How much fake data to generate.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub users: usize,
    /// Fraction of users that get a profile, from 0.0 to 1.0.
    pub profile_ratio: f64,
    pub posts_per_user: usize,
    pub max_likes_per_post: usize,
    pub comments_per_post: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 10,
            profile_ratio: 0.8,
            posts_per_user: 2,
            max_likes_per_post: 5,
            comments_per_post: 2,
        }
    }
}

impl SeedConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    pub fn with_posts_per_user(mut self, posts: usize) -> Self {
        self.posts_per_user = posts;
        self
    }

    pub fn with_interactions(mut self, max_likes: usize, comments: usize) -> Self {
        self.max_likes_per_post = max_likes;
        self.comments_per_post = comments;
        self
    }

    pub fn with_profile_ratio(mut self, ratio: f64) -> Self {
        self.profile_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn profiles(&self) -> usize {
        (self.users as f64 * self.profile_ratio).round() as usize
    }
}

/// Counts of what a seeding run actually wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    /// Generated emails that were already registered.
    pub skipped_users: usize,
    pub profiles: usize,
    pub posts: usize,
    pub likes: usize,
    pub comments: usize,
}
