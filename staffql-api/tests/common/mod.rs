/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A private in-memory database per test
/// - The fully wired router
/// - Helpers for posting GraphQL documents and reading JSON responses

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use staffql_api::app::{build_router, AppState};
use staffql_api::config::{ApiConfig, Config, DatabaseConfig};
use staffql_shared::db::{pool, Database};
use tower::ServiceExt;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: Database,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["http://localhost:3000".to_string()],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let db = Database::connect(pool::DatabaseConfig::in_memory()).await?;
        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Sends a request through the router and decodes the JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

        (status, json)
    }

    /// Posts a GraphQL document with variables
    pub async fn graphql(&self, query: &str, variables: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "query": query, "variables": variables }).to_string(),
            ))
            .unwrap();

        self.send(request).await
    }

    pub async fn create_user(&self, first_name: &str, salary: i64) -> Value {
        let (_, body) = self
            .graphql(
                CREATE_USER,
                json!({ "input": { "firstName": first_name, "salary": salary } }),
            )
            .await;
        body
    }

    pub async fn get_users(&self) -> Value {
        let (_, body) = self.graphql(GET_USERS, json!({})).await;
        body["data"]["getUsers"].clone()
    }
}

pub const GET_USERS: &str = "query { getUsers { id firstName salary } }";

pub const GET_USER: &str = "query($id: Int!) { getUser(id: $id) { id firstName salary } }";

pub const CREATE_USER: &str =
    "mutation($input: UserInput!) { createUser(userInput: $input) { id firstName salary } }";

pub const UPDATE_USER: &str = "mutation($id: Int!, $input: UserInput!) { \
     updateUser(id: $id, userInput: $input) { id firstName salary } }";

pub const DELETE_USER: &str =
    "mutation($id: Int!) { deleteUser(id: $id) { id firstName salary } }";

/// Extension code of the first error in a response
pub fn error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
}
