/// GraphQL schema for the users API
///
/// - `schema`: request context, root node and schema constructor
/// - `types`: public `User` object and `UserInput` input object
/// - `query`: `getUsers`, `getUser`
/// - `mutation`: `createUser`, `updateUser`, `deleteUser`

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{create_schema, Context, Schema};
