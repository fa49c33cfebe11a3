/// Database models for StaffQL
///
/// This module contains the database models and their CRUD operations.
///
/// # Models
///
/// - `user`: Employee records (first name and salary)
///
/// # Example
///
/// ```no_run
/// use staffql_shared::db::{pool::DatabaseConfig, Database};
/// use staffql_shared::models::user::{NewUser, User};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = Database::connect(DatabaseConfig::default()).await?;
///
/// let new_user = NewUser {
///     first_name: "Ana".to_string(),
///     salary: 50_000,
/// };
///
/// let user = User::create(db.pool(), new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod user;
