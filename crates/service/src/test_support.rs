#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

/// Migrated in-memory database with the demo seed; each call is isolated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
