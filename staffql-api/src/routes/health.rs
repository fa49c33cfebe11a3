/// Health check endpoint
///
/// Provides a simple health check endpoint that verifies:
/// - The server is running
/// - Database connectivity
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "users": 3,
///   "pool": {
///     "active_connections": 0,
///     "idle_connections": 1,
///     "total_connections": 1
///   }
/// }
/// ```

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use staffql_shared::{db::pool::PoolStats, models::user::User};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,

    /// Number of stored users, absent when it could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<i64>,

    /// Connection pool statistics
    pub pool: PoolStats,
}

/// Health check handler
///
/// Always answers `200 OK`; a failing database shows up as `degraded`.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (database, users) = match state.db.ping().await {
        Ok(()) => match User::count(state.db.pool()).await {
            Ok(count) => ("connected", Some(count)),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to count users for health check");
                ("connected", None)
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            ("disconnected", None)
        }
    };

    let status = if users.is_some() { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        users,
        pool: state.db.stats(),
    })
}
