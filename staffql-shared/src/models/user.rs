/// User model and database operations
///
/// This module provides the User model and CRUD operations over the `users`
/// table. Every operation is a single SQL statement, so the existence check
/// and the write it guards happen atomically.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     first_name TEXT NOT NULL,
///     salary INTEGER NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use staffql_shared::models::user::{NewUser, User};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     NewUser {
///         first_name: "Ana".to_string(),
///         salary: 50_000,
///     },
/// )
/// .await?;
/// println!("Created user: {}", user.id);
///
/// let found = User::find_by_id(&pool, user.id).await?;
/// assert_eq!(found, Some(user));
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Row id, assigned by the database and never reused
    pub id: i64,

    /// First name
    pub first_name: String,

    /// Salary
    ///
    /// Non-negative for every record written through the API. The table
    /// itself does not enforce this.
    pub salary: i64,
}

/// Field values for inserting or overwriting a user
///
/// Both fields are always written; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub salary: i64,
}

impl User {
    /// Lists all users, ordered by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, salary
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, salary
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user
    ///
    /// # Returns
    ///
    /// The stored record, including its freshly assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(pool: &SqlitePool, data: NewUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, salary)
            VALUES (?1, ?2)
            RETURNING id, first_name, salary
            "#,
        )
        .bind(data.first_name)
        .bind(data.salary)
        .fetch_one(pool)
        .await?;

        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Overwrites both fields of an existing user
    ///
    /// # Returns
    ///
    /// The updated user if found, None if no user has this id
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: NewUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = ?2, salary = ?3
            WHERE id = ?1
            RETURNING id, first_name, salary
            "#,
        )
        .bind(id)
        .bind(data.first_name)
        .bind(data.salary)
        .fetch_optional(pool)
        .await?;

        if user.is_some() {
            tracing::debug!(user_id = id, "User updated");
        }
        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// This is a hard delete.
    ///
    /// # Returns
    ///
    /// The record as it was right before deletion, None if no user has this id
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = ?1
            RETURNING id, first_name, salary
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        if user.is_some() {
            tracing::debug!(user_id = id, "User deleted");
        }
        Ok(user)
    }

    /// Counts total number of users
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
