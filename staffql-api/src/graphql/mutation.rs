use juniper::{graphql_object, DefaultScalarValue};
use staffql_shared::models::user::User;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::graphql::{
    types::{UserInput, UserObject},
    Context,
};

/// Root type for all GraphQL mutations
pub struct MutationRoot;

#[graphql_object(context = Context, scalar = DefaultScalarValue)]
impl MutationRoot {
    /// Creates a user; the id is assigned by the server
    async fn create_user(&self, context: &Context, user_input: UserInput) -> ApiResult<UserObject> {
        let valid = user_input.validate()?;

        let user = User::create(context.db.pool(), valid.into_new_user()).await?;
        info!(user_id = user.id, "Created user");

        UserObject::try_from(user)
    }

    /// Replaces both fields of an existing user
    ///
    /// Input is validated before the id is looked up.
    async fn update_user(
        &self,
        context: &Context,
        id: i32,
        user_input: UserInput,
    ) -> ApiResult<UserObject> {
        let valid = user_input.validate()?;

        let user = User::update(context.db.pool(), i64::from(id), valid.into_new_user())
            .await?
            .ok_or_else(|| ApiError::user_not_found(id))?;
        info!(user_id = user.id, "Updated user");

        UserObject::try_from(user)
    }

    /// Deletes a user and returns the record as it was before deletion
    async fn delete_user(&self, context: &Context, id: i32) -> ApiResult<UserObject> {
        let user = User::delete(context.db.pool(), i64::from(id))
            .await?
            .ok_or_else(|| ApiError::user_not_found(id))?;
        info!(user_id = user.id, "Deleted user");

        UserObject::try_from(user)
    }
}
