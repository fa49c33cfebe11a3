/// Integration tests for the GraphQL API
///
/// These tests drive the full router (axum + juniper + SQLite) and verify:
/// - CRUD round trips through every query and mutation
/// - Validation failures leave storage untouched
/// - Not-found handling on get, update and delete
/// - The error envelope and HTTP status codes

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{error_code, TestContext, CREATE_USER, DELETE_USER, GET_USER, UPDATE_USER};
use serde_json::json;
use staffql_shared::models::user::User;

#[tokio::test]
async fn test_get_users_empty() {
    let ctx = TestContext::new().await.unwrap();

    assert_eq!(ctx.get_users().await, json!([]));
}

#[tokio::test]
async fn test_create_user_returns_record_with_fresh_id() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .graphql(
            CREATE_USER,
            json!({ "input": { "firstName": "Ana", "salary": 50000 } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(
        body["data"]["createUser"],
        json!({ "id": 1, "firstName": "Ana", "salary": 50000 })
    );

    let second = ctx.create_user("Bob", 40000).await;
    assert_eq!(second["data"]["createUser"]["id"], 2);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let ctx = TestContext::new().await.unwrap();

    let created = ctx.create_user("Ana", 50000).await;
    assert_eq!(
        created["data"]["createUser"],
        json!({ "id": 1, "firstName": "Ana", "salary": 50000 })
    );

    let (_, fetched) = ctx.graphql(GET_USER, json!({ "id": 1 })).await;
    assert_eq!(fetched["data"]["getUser"], created["data"]["createUser"]);

    let (_, updated) = ctx
        .graphql(
            UPDATE_USER,
            json!({ "id": 1, "input": { "firstName": "Ana", "salary": 60000 } }),
        )
        .await;
    assert_eq!(
        updated["data"]["updateUser"],
        json!({ "id": 1, "firstName": "Ana", "salary": 60000 })
    );

    let (_, deleted) = ctx.graphql(DELETE_USER, json!({ "id": 1 })).await;
    assert_eq!(
        deleted["data"]["deleteUser"],
        json!({ "id": 1, "firstName": "Ana", "salary": 60000 })
    );

    let (status, missing) = ctx.graphql(GET_USER, json!({ "id": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing["data"], json!(null));
    assert_eq!(error_code(&missing), "NOT_FOUND");
}

#[tokio::test]
async fn test_negative_salary_rejected_on_create() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;
    let before = ctx.get_users().await;

    let body = ctx.create_user("Bob", -5).await;

    assert_eq!(body["data"], json!(null));
    assert_eq!(error_code(&body), "BAD_USER_INPUT");
    assert_eq!(body["errors"][0]["extensions"]["status"], 422);
    assert_eq!(
        body["errors"][0]["extensions"]["details"],
        json!([{ "field": "salary", "message": "Salary must be greater than or equal to 0" }])
    );

    let after = ctx.get_users().await;
    assert_eq!(before, after);
    assert_eq!(User::count(ctx.db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_negative_salary_rejected_on_update() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;
    let before = ctx.get_users().await;

    let (_, body) = ctx
        .graphql(
            UPDATE_USER,
            json!({ "id": 1, "input": { "firstName": "Ana", "salary": -1 } }),
        )
        .await;

    assert_eq!(error_code(&body), "BAD_USER_INPUT");
    assert_eq!(ctx.get_users().await, before);
}

#[tokio::test]
async fn test_update_validates_before_existence_check() {
    let ctx = TestContext::new().await.unwrap();

    let (_, body) = ctx
        .graphql(
            UPDATE_USER,
            json!({ "id": 99, "input": { "firstName": "Ghost", "salary": -1 } }),
        )
        .await;

    assert_eq!(error_code(&body), "BAD_USER_INPUT");
}

#[tokio::test]
async fn test_update_missing_user() {
    let ctx = TestContext::new().await.unwrap();

    let (_, body) = ctx
        .graphql(
            UPDATE_USER,
            json!({ "id": 99, "input": { "firstName": "Ghost", "salary": 1 } }),
        )
        .await;

    assert_eq!(body["data"], json!(null));
    assert_eq!(error_code(&body), "NOT_FOUND");
    assert_eq!(body["errors"][0]["extensions"]["status"], 404);
    assert_eq!(ctx.get_users().await, json!([]));
}

#[tokio::test]
async fn test_update_replaces_both_fields() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;

    let (_, body) = ctx
        .graphql(
            UPDATE_USER,
            json!({ "id": 1, "input": { "firstName": "Anna", "salary": 0 } }),
        )
        .await;

    assert_eq!(
        body["data"]["updateUser"],
        json!({ "id": 1, "firstName": "Anna", "salary": 0 })
    );
}

#[tokio::test]
async fn test_delete_missing_user_reports_id() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;
    let before = ctx.get_users().await;

    let (status, body) = ctx.graphql(DELETE_USER, json!({ "id": 7 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(error_code(&body), "NOT_FOUND");
    assert_eq!(body["errors"][0]["message"], "User with id of 7 not found");
    assert_eq!(body["errors"][0]["path"], json!(["deleteUser"]));
    assert_eq!(ctx.get_users().await, before);
}

#[tokio::test]
async fn test_delete_twice() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;

    let (_, first) = ctx.graphql(DELETE_USER, json!({ "id": 1 })).await;
    assert_eq!(first["data"]["deleteUser"]["id"], 1);

    let (_, second) = ctx.graphql(DELETE_USER, json!({ "id": 1 })).await;
    assert_eq!(error_code(&second), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_users_is_idempotent() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("Ana", 50000).await;
    ctx.create_user("Bob", 40000).await;

    let first = ctx.get_users().await;
    let second = ctx.get_users().await;

    assert_eq!(first, second);
    assert_eq!(
        first,
        json!([
            { "id": 1, "firstName": "Ana", "salary": 50000 },
            { "id": 2, "firstName": "Bob", "salary": 40000 }
        ])
    );
}

#[tokio::test]
async fn test_storage_failure_is_opaque() {
    let ctx = TestContext::new().await.unwrap();
    ctx.db.close().await;

    let (status, body) = ctx.graphql("query { getUsers { id } }", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(error_code(&body), "INTERNAL_SERVER_ERROR");
    assert_eq!(body["errors"][0]["message"], "An internal error occurred");
}

#[tokio::test]
async fn test_malformed_document_is_bad_request() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.graphql("query { getUsers { id ", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_unknown_field_is_bad_request() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.graphql("query { getUsers { lastName } }", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("lastName"));
}

#[tokio::test]
async fn test_graphiql_served_on_get() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8_lossy(&body).to_lowercase();
    assert!(html.contains("graphiql"));
    assert!(html.contains("/graphql"));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/graphql")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/graphql")
        .header("origin", "http://evil.test")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_cors_mirrors_requested_headers() {
    let ctx = TestContext::new().await.unwrap();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/graphql")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-request-id")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(ctx.app.clone(), request)
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-headers").unwrap(),
        "content-type,x-request-id"
    );
}
