#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use enrollment_api::{
    app, apply_migrations, connect, ensure_database_exists, AppState, ServerConfig, TodoStore,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot`

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Router mounted at root over a fresh in-memory database unique to this test.
pub async fn setup_test_app() -> TestApp {
    setup_with_prefix("/").await
}

pub async fn setup_with_prefix(prefix: &str) -> TestApp {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("enrollment_api=debug"))
        .with_test_writer()
        .try_init();

    let config = ServerConfig {
        database_url: format!(
            "sqlite:file:memdb_{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4()
        ),
        api_prefix: prefix.to_string(),
        max_connections: 1,
        ..Default::default()
    };
    ensure_database_exists(&config.database_url)
        .await
        .expect("Failed to prepare test database");
    let pool = connect(&config).await.expect("Failed to create test database");
    apply_migrations(&pool).await.expect("Failed to apply migrations");

    let state = AppState::new(pool.clone(), TodoStore::seeded());
    TestApp {
        router: app(state, &config),
        pool,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub raw: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.raw).expect("response body is not json")
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// `(error_code, error_message)` of a structured error body.
    pub fn error(&self) -> (String, String) {
        let body = self.json();
        (
            body["error_code"].as_str().unwrap_or_default().to_string(),
            body["error_message"].as_str().unwrap_or_default().to_string(),
        )
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse { status, raw }
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Body sent without a `Content-Length` header, as a streamed upload would be.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: String,
    ) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    pub async fn send_form(&self, method: Method, uri: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.request(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send_empty(Method::GET, uri).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send_empty(Method::DELETE, uri).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send_json(Method::POST, uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send_json(Method::PUT, uri, body).await
    }

    async fn send_empty(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn enrollment_rows(&self, student_id: i64, course_id: i64) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enrollment WHERE student_id = ? AND course_id = ?",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await
        .unwrap()
    }
}
