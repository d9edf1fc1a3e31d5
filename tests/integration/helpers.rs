//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use usergate_api::{AppState, build_router};
use usergate_auth::password::PasswordHasher;
use usergate_core::config::{AppConfig, AuthConfig, LoggingConfig, ServerConfig};
use usergate_database::repositories::MemoryUserRepository;

/// Signing secret shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding records the API cannot create
    pub repo: Arc<MemoryUserRepository>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig::with_secret(TEST_SECRET),
            logging: LoggingConfig::default(),
        };

        let repo = Arc::new(MemoryUserRepository::new());
        let hasher = Arc::new(PasswordHasher::with_cost(8, 1).expect("valid argon2 params"));
        let state = AppState::new(config.clone(), repo.clone(), hasher);

        Self {
            router: build_router(state),
            repo,
            config,
        }
    }

    /// Register a user through the API and return its id
    pub async fn register(&self, email: &str, password: &str, is_admin: bool) -> String {
        let response = self
            .request(
                "POST",
                "/users",
                Some(serde_json::json!({
                    "email": email,
                    "name": email.split('@').next().unwrap_or(email),
                    "is_admin": is_admin,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        response.body["id"]
            .as_str()
            .expect("No id in register response")
            .to_string()
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Register then login, returning `(id, token)`
    pub async fn signed_in(&self, email: &str, is_admin: bool) -> (String, String) {
        let id = self.register(email, "password123", is_admin).await;
        let token = self.login(email, "password123").await;
        (id, token)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        self.send(req, body).await
    }

    /// Make a request with a raw Authorization header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        authorization: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", authorization);
        self.send(req, None).await
    }

    /// Make a request with a raw JSON-typed body, well-formed or not
    pub async fn request_with_body(
        &self,
        method: &str,
        path: &str,
        raw_body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        let req = req
            .body(Body::from(raw_body.to_string()))
            .expect("Failed to build request");
        self.dispatch(req).await
    }

    async fn send(&self, req: http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(b) => req
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&b).expect("Failed to serialize body"),
                )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.dispatch(req).await
    }

    async fn dispatch(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
