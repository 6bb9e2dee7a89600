use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use devconnect::modules::profile::github::GithubClient;
use devconnect::router::init_router;
use devconnect::state::AppState;
use devconnect_config::{CorsConfig, GithubConfig, JwtConfig};
use devconnect_db::MemoryStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub const PASSWORD: &str = "secret1";

/// Router over a fresh in-memory store.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_github(GithubConfig::default())
    }

    pub fn with_github(github: GithubConfig) -> Self {
        let state = AppState {
            store: Arc::new(MemoryStore::new()),
            jwt_config: JwtConfig::default(),
            cors_config: CorsConfig::default(),
            github: GithubClient::new(github).unwrap(),
        };

        Self {
            router: init_router(state),
        }
    }

    /// Sends a request and returns the status with the body as JSON
    /// (a plain-text body comes back as a JSON string).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("x-auth-token", token);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, body)
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    #[allow(dead_code)]
    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    /// Registers an account and returns its token.
    #[allow(dead_code)]
    pub async fn register(&self, name: &str, email: &str) -> String {
        let (status, body) = self
            .post(
                "/api/users",
                None,
                json!({ "name": name, "email": email, "password": PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates the caller's profile.
    #[allow(dead_code)]
    pub async fn create_profile(&self, token: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/profile",
                Some(token),
                json!({ "status": "Developer", "skills": "rust, sql" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "profile upsert failed: {body}");
        body
    }

    /// Creates a post and returns its id.
    #[allow(dead_code)]
    pub async fn create_post(&self, token: &str, text: &str) -> String {
        let (status, body) = self
            .post("/api/posts", Some(token), json!({ "text": text }))
            .await;
        assert_eq!(status, StatusCode::OK, "create post failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
