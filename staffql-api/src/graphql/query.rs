use juniper::{graphql_object, DefaultScalarValue};
use staffql_shared::models::user::User;

use crate::error::{ApiError, ApiResult};
use crate::graphql::{types::UserObject, Context};

/// Root type for all GraphQL queries
pub struct QueryRoot;

#[graphql_object(context = Context, scalar = DefaultScalarValue)]
impl QueryRoot {
    /// All users, ordered by id
    async fn get_users(&self, context: &Context) -> ApiResult<Vec<UserObject>> {
        let users = User::list(context.db.pool()).await?;

        users.into_iter().map(UserObject::try_from).collect()
    }

    /// A single user; fails with NOT_FOUND for unknown ids
    async fn get_user(&self, context: &Context, id: i32) -> ApiResult<UserObject> {
        let user = User::find_by_id(context.db.pool(), i64::from(id))
            .await?
            .ok_or_else(|| ApiError::user_not_found(id))?;

        UserObject::try_from(user)
    }
}
