/// Database layer for StaffQL
///
/// This module provides the SQLite connection pool, schema bootstrap and the
/// `Database` handle that owns both.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Creates the `users` table on first startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use staffql_shared::db::{pool::DatabaseConfig, Database};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let db = Database::connect(DatabaseConfig::default()).await?;
///
///     // ... serve requests with db.pool() ...
///
///     db.close().await;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;

use self::pool::{close_pool, create_pool, get_pool_stats, health_check, DatabaseConfig, PoolStats};
use sqlx::sqlite::SqlitePool;

/// Handle to the storage layer
///
/// Constructed once at startup and injected wherever storage is needed.
/// Cloning is cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and makes sure the schema exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, fails its health
    /// check, or the schema cannot be created
    pub async fn connect(config: DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = create_pool(&config).await?;
        schema::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs `SELECT 1` against the database
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        health_check(&self.pool).await
    }

    /// Connection counts, reported by the health endpoint
    pub fn stats(&self) -> PoolStats {
        get_pool_stats(&self.pool)
    }

    /// Closes every connection; later queries fail with `PoolClosed`
    pub async fn close(&self) {
        close_pool(&self.pool).await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
