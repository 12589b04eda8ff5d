//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener, through the same middleware
//! stack production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use truckstop_airtable::{AirtableClient, AirtableConfig};
use truckstop_api::auth::{AuthConfig, Claims};
use truckstop_api::config::ServerConfig;
use truckstop_api::router::build_app_router;
use truckstop_api::state::AppState;

pub const TEST_SECRET: &str = "test-secret";
pub const SUPER_ADMIN: &str = "admin@example.com";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            super_admin_email: SUPER_ADMIN.to_string(),
        },
    }
}

/// Build the full application router against the given pool.
///
/// The Airtable client points at a closed local port; tests that do
/// not exercise the sync surface never touch it.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let airtable = Arc::new(AirtableClient::new(AirtableConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        base_id: "appTEST".to_string(),
    }));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        airtable,
    };

    build_app_router(state, &config)
}

/// Mint a provider-style token for `email`, signed with the test secret.
pub fn token_for(email: &str) -> String {
    let claims = Claims {
        sub: "user-test".to_string(),
        email: email.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, None, Some(token)).await
}

pub async fn post_json(
    app: Router,
    path: &str,
    json: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send(app, Method::POST, path, Some(json), token).await
}

pub async fn put_json(
    app: Router,
    path: &str,
    json: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send(app, Method::PUT, path, Some(json), token).await
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, path, None, Some(token)).await
}

/// Collect a response body as parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a status and return the parsed body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
