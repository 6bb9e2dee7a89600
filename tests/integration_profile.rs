mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_own_profile_missing() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app.get("/api/profile/me", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "There is no profile for this user" }));
}

#[tokio::test]
async fn test_upsert_requires_token() {
    let app = TestApp::new();
    let (status, _) = app
        .post("/api/profile", None, json!({ "status": "Developer", "skills": "rust" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upsert_validation() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app.post("/api/profile", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["Skills is required", "Status is required"]);
}

#[tokio::test]
async fn test_upsert_rejects_blank_skill_list() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app
        .post(
            "/api/profile",
            Some(&token),
            json!({ "status": "Developer", "skills": " , ," }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    assert_eq!(body["errors"][0]["message"], "Skills is required");

    let (status, _) = app.get("/api/profile/me", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_update_profile() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, created) = app
        .post(
            "/api/profile",
            Some(&token),
            json!({
                "status": "Developer",
                "skills": " rust, sql ,, docker ",
                "company": "Acme",
                "twitter": "@alice"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["skills"], json!(["rust", "sql", "docker"]));
    assert_eq!(created["user"]["name"], "Alice");

    let (status, updated) = app
        .post(
            "/api/profile",
            Some(&token),
            json!({ "status": "Senior Developer", "skills": "rust", "bio": "hi" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["status"], "Senior Developer");
    assert_eq!(updated["skills"], json!(["rust"]));
    assert_eq!(updated["company"], "Acme");
    assert_eq!(updated["bio"], "hi");
    assert_eq!(updated["social"]["twitter"], "@alice");

    let (status, me) = app.get("/api/profile/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me, updated);
}

#[tokio::test]
async fn test_public_listing_and_lookup() {
    let app = TestApp::new();
    let alice = app.register("Alice", "a@x.com").await;
    let bob = app.register("Bob", "b@x.com").await;
    let alice_profile = app.create_profile(&alice).await;
    app.create_profile(&bob).await;

    let (status, profiles) = app.get("/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    let profiles = profiles.as_array().unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0]["user"]["name"], "Alice");
    assert_eq!(profiles[1]["user"]["name"], "Bob");

    let alice_id = alice_profile["user"]["id"].as_str().unwrap();
    let (status, profile) = app
        .get(&format!("/api/profile/user/{alice_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["id"], alice_profile["id"]);
}

#[tokio::test]
async fn test_lookup_unknown_or_malformed_user() {
    let app = TestApp::new();

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (status, body) = app.get(&format!("/api/profile/user/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Profile not found" }));
    }
}

#[tokio::test]
async fn test_education_add_and_remove() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;
    app.create_profile(&token).await;

    let entry = |school: &str| {
        json!({
            "school": school,
            "degree": "BSc",
            "field_of_study": "Computer Science",
            "from": "2015-09-01",
            "to": "2019-06-30"
        })
    };

    let (status, _) = app
        .send(Method::PATCH, "/api/profile/education", Some(&token), Some(entry("MIT")))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, profile) = app
        .send(Method::PATCH, "/api/profile/education", Some(&token), Some(entry("ETH")))
        .await;
    assert_eq!(status, StatusCode::OK);
    let education = profile["education"].as_array().unwrap();
    assert_eq!(education.len(), 2);
    assert_eq!(education[0]["school"], "ETH");
    assert_eq!(education[1]["school"], "MIT");

    let mit_id = education[1]["id"].as_str().unwrap().to_string();
    let (status, profile) = app
        .send(
            Method::PATCH,
            &format!("/api/profile/education/{mit_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["education"].as_array().unwrap().len(), 1);
    assert_eq!(profile["education"][0]["school"], "ETH");

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/profile/education/{mit_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Education not found" }));
}

#[tokio::test]
async fn test_education_validation() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;
    app.create_profile(&token).await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/profile/education",
            Some(&token),
            Some(json!({ "school": "MIT" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec!["Degree is required", "Field of study is required", "From date is required"]
    );
}

#[tokio::test]
async fn test_delete_account_keeps_posts() {
    let app = TestApp::new();
    let alice = app.register("Alice", "a@x.com").await;
    let bob = app.register("Bob", "b@x.com").await;
    app.create_profile(&alice).await;
    app.create_post(&alice, "still here").await;

    let (status, _) = app.send(Method::DELETE, "/api/profile", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, profiles) = app.get("/api/profile", None).await;
    assert!(profiles.as_array().unwrap().is_empty());

    let (status, posts) = app.get("/api/posts", Some(&bob)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts[0]["text"], "still here");
}
