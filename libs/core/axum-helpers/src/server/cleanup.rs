use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// Pools also close on drop; closing explicitly lets shutdown wait for it.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!(pool = name, "PostgreSQL connection pool closed"),
        Err(e) => error!(pool = name, error = %e, "Error closing PostgreSQL connection pool"),
    }
}
