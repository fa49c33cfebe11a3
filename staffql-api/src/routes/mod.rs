/// API route handlers
///
/// - `health`: Health check endpoint
/// - `graphql`: GraphQL endpoint and GraphiQL IDE

pub mod graphql;
pub mod health;
