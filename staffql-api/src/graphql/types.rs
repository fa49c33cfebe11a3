/// Public GraphQL types
///
/// These are request-scoped copies of stored records. Conversions to and
/// from the storage and validation types are spelled out field by field.

use juniper::{GraphQLInputObject, GraphQLObject};
use staffql_shared::models::user::User;
use staffql_shared::validation::{self, ValidUser};

use crate::error::{ApiError, ApiResult};

/// Public representation of a user
#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject)]
#[graphql(name = "User", description = "An employee with a first name and a salary")]
pub struct UserObject {
    pub id: i32,
    pub first_name: String,
    pub salary: i32,
}

impl TryFrom<User> for UserObject {
    type Error = ApiError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        let id = i32::try_from(user.id)
            .map_err(|_| ApiError::Internal(format!("User id {} exceeds Int range", user.id)))?;
        let salary = i32::try_from(user.salary).map_err(|_| {
            ApiError::Internal(format!("Salary of user {} exceeds Int range", user.id))
        })?;

        Ok(Self {
            id,
            first_name: user.first_name,
            salary,
        })
    }
}

/// Fields accepted by `createUser` and `updateUser`
#[derive(Debug, Clone, GraphQLInputObject)]
#[graphql(description = "First name and salary; salary must be >= 0")]
pub struct UserInput {
    pub first_name: String,
    pub salary: i32,
}

impl UserInput {
    /// Runs the validation layer over this input
    pub fn validate(self) -> ApiResult<ValidUser> {
        Ok(validation::validate(self.first_name, i64::from(self.salary))?)
    }
}
