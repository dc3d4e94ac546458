#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database; every test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_sqlite_memory().await
}
