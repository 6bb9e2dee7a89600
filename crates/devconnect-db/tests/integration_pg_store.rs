use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use devconnect_db::{PgStore, PostStore, ProfileStore, StoreError, UserStore};
use devconnect_models::{
    NewComment, NewEducation, NewPost, NewUser, ProfileFields, SocialLinks, User,
};

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Alice".to_string(),
        email: email.to_string(),
        avatar: "//gravatar".to_string(),
        password_hash: "hash".to_string(),
    }
}

fn new_post(user: Uuid, text: &str) -> NewPost {
    NewPost {
        user,
        text: text.to_string(),
        name: "Alice".to_string(),
        avatar: "//gravatar".to_string(),
    }
}

fn new_comment(user: Uuid, text: &str) -> NewComment {
    NewComment {
        user,
        text: text.to_string(),
        name: "Bob".to_string(),
        avatar: "//gravatar".to_string(),
    }
}

fn profile_fields(status: &str) -> ProfileFields {
    ProfileFields {
        status: status.to_string(),
        skills: vec!["rust".to_string()],
        ..Default::default()
    }
}

async fn insert_user(store: &PgStore, email: &str) -> User {
    store.insert_user(new_user(email)).await.unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    let store = PgStore::new(pool);
    insert_user(&store, "a@x.com").await;

    let err = store.insert_user(new_user("a@x.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate));
    assert!(store.email_taken("a@x.com").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_credentials_lookup(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = insert_user(&store, "a@x.com").await;

    let credentials = store.find_credentials("a@x.com").await.unwrap().unwrap();
    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password, "hash");
    assert!(store.find_credentials("b@x.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_merges_existing_profile(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = insert_user(&store, "a@x.com").await;

    let created = store
        .upsert_profile(
            user.id,
            ProfileFields {
                company: Some("Acme".to_string()),
                social: SocialLinks {
                    twitter: Some("https://twitter.com/alice".to_string()),
                    ..Default::default()
                },
                ..profile_fields("Developer")
            },
        )
        .await
        .unwrap();
    assert_eq!(created.user.id, user.id);
    assert_eq!(created.user.name, "Alice");

    let updated = store
        .upsert_profile(
            user.id,
            ProfileFields {
                bio: Some("Hello".to_string()),
                skills: vec!["go".to_string(), "sql".to_string()],
                ..profile_fields("Manager")
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, "Manager");
    assert_eq!(updated.skills, vec!["go", "sql"]);
    assert_eq!(updated.company.as_deref(), Some("Acme"));
    assert_eq!(updated.bio.as_deref(), Some("Hello"));
    assert_eq!(
        updated.social.twitter.as_deref(),
        Some("https://twitter.com/alice")
    );
    assert_eq!(store.list_profiles().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_for_unknown_user(pool: PgPool) {
    let store = PgStore::new(pool);

    let err = store
        .upsert_profile(Uuid::new_v4(), profile_fields("Developer"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingReference));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_education_newest_first_and_removal(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = insert_user(&store, "a@x.com").await;
    let profile = store
        .upsert_profile(user.id, profile_fields("Developer"))
        .await
        .unwrap();

    let entry = |school: &str| NewEducation {
        school: school.to_string(),
        degree: "BSc".to_string(),
        field_of_study: "CS".to_string(),
        from: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
        to: None,
        current: true,
        description: None,
    };

    let first = store.add_education(profile.id, entry("First")).await.unwrap();
    store.add_education(profile.id, entry("Second")).await.unwrap();

    let stored = store.find_profile(user.id).await.unwrap().unwrap();
    assert_eq!(stored.education[0].school, "Second");
    assert_eq!(stored.education[1].school, "First");

    assert!(store.remove_education(profile.id, first.id).await.unwrap());
    assert!(!store.remove_education(profile.id, first.id).await.unwrap());

    let stored = store.find_profile(user.id).await.unwrap().unwrap();
    assert_eq!(stored.education.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_user_removes_profile_keeps_posts(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = insert_user(&store, "a@x.com").await;
    store
        .upsert_profile(user.id, profile_fields("Developer"))
        .await
        .unwrap();
    let post = store.insert_post(new_post(user.id, "hello")).await.unwrap();

    assert!(store.delete_user(user.id).await.unwrap());

    assert!(store.find_user(user.id).await.unwrap().is_none());
    assert!(store.find_profile(user.id).await.unwrap().is_none());
    assert!(store.find_post(post.id).await.unwrap().is_some());
    assert!(!store.delete_user(user.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_posts_newest_first(pool: PgPool) {
    let store = PgStore::new(pool);
    let user = Uuid::new_v4();
    store.insert_post(new_post(user, "first")).await.unwrap();
    store.insert_post(new_post(user, "second")).await.unwrap();

    let posts = store.list_posts().await.unwrap();
    assert_eq!(posts[0].text, "second");
    assert_eq!(posts[1].text, "first");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_like_once_per_user(pool: PgPool) {
    let store = PgStore::new(pool);
    let post = store
        .insert_post(new_post(Uuid::new_v4(), "hello"))
        .await
        .unwrap();
    let liker = Uuid::new_v4();

    assert!(store.add_like(post.id, liker).await.unwrap());
    assert!(!store.add_like(post.id, liker).await.unwrap());
    assert_eq!(store.likes(post.id).await.unwrap().len(), 1);

    assert!(store.remove_like(post.id, liker).await.unwrap());
    assert!(!store.remove_like(post.id, liker).await.unwrap());
    assert!(store.likes(post.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_like_and_comment_on_missing_post(pool: PgPool) {
    let store = PgStore::new(pool);
    let missing = Uuid::new_v4();

    let err = store.add_like(missing, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingReference));

    let err = store
        .add_comment(missing, new_comment(Uuid::new_v4(), "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingReference));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_removal_by_id(pool: PgPool) {
    let store = PgStore::new(pool);
    let post = store
        .insert_post(new_post(Uuid::new_v4(), "hello"))
        .await
        .unwrap();
    let commenter = Uuid::new_v4();

    let first = store
        .add_comment(post.id, new_comment(commenter, "first"))
        .await
        .unwrap();
    store
        .add_comment(post.id, new_comment(commenter, "second"))
        .await
        .unwrap();

    let comments = store.comments(post.id).await.unwrap();
    assert_eq!(comments[0].text, "second");

    assert!(store.remove_comment(post.id, first.id).await.unwrap());
    assert!(!store.remove_comment(post.id, first.id).await.unwrap());

    let fetched = store.find_post(post.id).await.unwrap().unwrap();
    assert_eq!(fetched.comments.len(), 1);
    assert_eq!(fetched.comments[0].text, "second");
}
