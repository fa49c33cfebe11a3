use juniper::{EmptySubscription, RootNode};
use staffql_shared::db::Database;

use crate::graphql::{mutation::MutationRoot, query::QueryRoot};

/// Schema type with Query and Mutation roots; there are no subscriptions
pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<Context>>;

/// Builds the GraphQL schema
///
/// The schema holds no state; build it once and share it across requests.
pub fn create_schema() -> Schema {
    Schema::new(
        QueryRoot,
        MutationRoot,
        EmptySubscription::<Context>::new(),
    )
}

/// Per-request resolver context
///
/// Carries a handle to the storage layer. Created for each request from the
/// shared application state.
#[derive(Clone)]
pub struct Context {
    pub db: Database,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
