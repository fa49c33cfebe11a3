/// Schema bootstrap for the storage layer
///
/// The `users` table is created on startup when it is absent. There is no
/// versioned migration history: the table definition below is the whole
/// schema.
///
/// # Example
///
/// ```no_run
/// use staffql_shared::db::pool::{create_pool, DatabaseConfig};
/// use staffql_shared::db::schema::{ensure_schema, table_exists};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ensure_schema(&pool).await?;
/// assert!(table_exists(&pool, "users").await?);
/// # Ok(())
/// # }
/// ```

use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};

/// Definition of the `users` table
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
pub const USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    salary INTEGER NOT NULL
)
"#;

/// Creates every table the storage layer needs, if missing
///
/// Safe to call on every startup.
///
/// # Errors
///
/// Returns an error if the DDL statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if table_exists(pool, "users").await? {
        debug!("users table already exists");
        return Ok(());
    }

    info!("Creating users table");
    sqlx::query(USERS_TABLE).execute(pool).await?;
    info!("users table created");

    Ok(())
}

/// Checks whether a table with the given name exists
///
/// # Errors
///
/// Returns an error if `sqlite_master` cannot be queried
pub async fn table_exists(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
