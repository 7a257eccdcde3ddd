//! Migrator registering table migrations in foreign-key order.
//! Indexes follow the tables; the demo seed always runs last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_hosts;
mod m20240601_000003_create_guests;
mod m20240601_000004_create_accommodations;
mod m20240601_000005_create_bookings;
mod m20240601_000006_create_discounts;
mod m20240601_000007_add_indexes;
mod m20240601_000008_seed_demo_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_hosts::Migration),
            Box::new(m20240601_000003_create_guests::Migration),
            Box::new(m20240601_000004_create_accommodations::Migration),
            Box::new(m20240601_000005_create_bookings::Migration),
            Box::new(m20240601_000006_create_discounts::Migration),
            Box::new(m20240601_000007_add_indexes::Migration),
            Box::new(m20240601_000008_seed_demo_data::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

    async fn memory_db() -> Result<DatabaseConnection, DbErr> {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opts).await
    }

    async fn count(db: &DatabaseConnection, table: &str) -> Result<i64, DbErr> {
        let row = db
            .query_one(Statement::from_string(db.get_database_backend(), format!("SELECT COUNT(*) AS n FROM {table}")))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(table.to_string()))?;
        row.try_get("", "n")
    }

    #[tokio::test]
    async fn up_is_idempotent_and_seeds_once() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;
        Migrator::up(&db, None).await?;

        assert_eq!(count(&db, "users").await?, 8);
        assert_eq!(count(&db, "accommodations").await?, 8);
        assert_eq!(count(&db, "bookings").await?, 10);
        assert_eq!(count(&db, "discounts").await?, 7);
        Ok(())
    }

    #[tokio::test]
    async fn down_removes_every_table() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["users", "hosts", "guests", "accommodations", "bookings", "discounts"] {
            assert!(!manager.has_table(table).await?, "{table} still present");
        }
        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_booking_status() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;

        let res = db
            .execute_unprepared(
                "INSERT INTO bookings (guest_id, accommodation_id, status, checkin_date, checkout_date) \
                 VALUES (1, 1, 'Lost', '2024-01-01', '2024-01-02')",
            )
            .await;
        assert!(res.is_err());
        Ok(())
    }
}
