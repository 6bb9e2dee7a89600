mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_posts_require_token() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/posts", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "No token, authorization denied" }));

    let (status, body) = app.get("/api/posts", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Token is not valid" }));
}

#[tokio::test]
async fn test_create_and_list_newest_first() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let first = app.create_post(&token, "first").await;
    let second = app.create_post(&token, "second").await;

    let (status, posts) = app.get("/api/posts", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts[0]["id"], second.as_str());
    assert_eq!(posts[1]["id"], first.as_str());
    assert_eq!(posts[0]["name"], "Alice");
    assert_eq!(posts[0]["likes"], json!([]));
    assert_eq!(posts[0]["comments"], json!([]));

    let (status, post) = app.get(&format!("/api/posts/{first}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["text"], "first");
}

#[tokio::test]
async fn test_create_requires_text() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app
        .post("/api/posts", Some(&token), json!({ "text": "   " }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["message"], "Text field is required");
}

#[tokio::test]
async fn test_missing_post() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    for id in [Uuid::new_v4().to_string(), "1234".to_string()] {
        let (status, body) = app.get(&format!("/api/posts/{id}"), Some(&token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Post not found" }));
    }
}

#[tokio::test]
async fn test_only_author_deletes_post() {
    let app = TestApp::new();
    let alice = app.register("Alice", "a@x.com").await;
    let bob = app.register("Bob", "b@x.com").await;
    let post = app.create_post(&alice, "mine").await;
    let uri = format!("/api/posts/{post}");

    let (status, body) = app.send(Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "User not authorized" }));

    let (status, _) = app.get(&uri, Some(&bob)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.send(Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Post removed" }));

    let (status, _) = app.get(&uri, Some(&alice)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_twice_and_unlike() {
    let app = TestApp::new();
    let alice = app.register("Alice", "a@x.com").await;
    let bob = app.register("Bob", "b@x.com").await;
    let post = app.create_post(&alice, "like me").await;
    let like_uri = format!("/api/posts/like/{post}");
    let unlike_uri = format!("/api/posts/unlike/{post}");

    let (status, likes) = app.send(Method::PATCH, &like_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes.as_array().unwrap().len(), 1);

    let (status, body) = app.send(Method::PATCH, &like_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Post already liked" }));

    let (_, likes) = app.send(Method::PATCH, &like_uri, Some(&alice), None).await;
    assert_eq!(likes.as_array().unwrap().len(), 2);

    let (_, fetched) = app.get(&format!("/api/posts/{post}"), Some(&bob)).await;
    assert_eq!(fetched["likes"].as_array().unwrap().len(), 2);

    let (status, likes) = app.send(Method::PATCH, &unlike_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes.as_array().unwrap().len(), 1);

    let (status, body) = app.send(Method::PATCH, &unlike_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Post has not yet been liked" }));
}

#[tokio::test]
async fn test_like_missing_post() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/posts/like/{}", Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Post not found" }));
}

#[tokio::test]
async fn test_comment_and_remove_comment() {
    let app = TestApp::new();
    let alice = app.register("Alice", "a@x.com").await;
    let bob = app.register("Bob", "b@x.com").await;
    let post = app.create_post(&alice, "discuss").await;
    let comment_uri = format!("/api/posts/comment/{post}");

    let (status, _) = app
        .post(&comment_uri, Some(&bob), json!({ "text": "first" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, comments) = app
        .post(&comment_uri, Some(&bob), json!({ "text": "second" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments[0]["text"], "second");
    assert_eq!(comments[0]["name"], "Bob");
    assert_eq!(comments[1]["text"], "first");

    let first_id = comments[1]["id"].as_str().unwrap().to_string();
    let delete_uri = format!("/api/posts/comment/{post}/{first_id}");

    let (status, body) = app.send(Method::DELETE, &delete_uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "User is not authorized" }));

    let (status, comments) = app.send(Method::DELETE, &delete_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "second");

    let (status, body) = app.send(Method::DELETE, &delete_uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No comment found" }));
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = TestApp::new();
    let token = app.register("Alice", "a@x.com").await;

    let (status, body) = app
        .post(
            &format!("/api/posts/comment/{}", Uuid::new_v4()),
            Some(&token),
            json!({ "text": "hello?" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Post not found" }));
}
