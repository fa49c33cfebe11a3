/// GraphQL over HTTP
///
/// # Endpoints
///
/// ```text
/// POST /graphql    # execute a query or mutation
/// GET  /graphql    # GraphiQL IDE
/// ```
///
/// # Request
///
/// ```json
/// {
///   "query": "mutation($input: UserInput!) { createUser(userInput: $input) { id firstName salary } }",
///   "variables": { "input": { "firstName": "Ana", "salary": 50000 } }
/// }
/// ```
///
/// Resolver errors come back with `200 OK` in the `errors` array. A document
/// that fails to parse or validate against the schema yields `400 Bad Request`.

use crate::app::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};

/// Executes a GraphQL request against the schema
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<GraphQLRequest>,
) -> impl IntoResponse {
    let context = state.graphql_context();
    let response = request.execute(&*state.schema, &context).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        tracing::debug!("GraphQL request rejected before execution");
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}

/// Serves the GraphiQL IDE
pub async fn graphiql() -> Html<String> {
    Html(graphiql_source("/graphql", None))
}
