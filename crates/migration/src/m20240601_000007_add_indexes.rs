use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Accommodations: owner lookup and price ranking
        manager
            .create_index(
                Index::create()
                    .name("idx_accommodations_host")
                    .table(Accommodations::Table)
                    .col(Accommodations::HostId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_accommodations_price")
                    .table(Accommodations::Table)
                    .col(Accommodations::PricePerNight)
                    .to_owned(),
            )
            .await?;

        // Bookings: status filter plus both join keys
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_guest")
                    .table(Bookings::Table)
                    .col(Bookings::GuestId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_accommodation")
                    .table(Bookings::Table)
                    .col(Bookings::AccommodationId)
                    .to_owned(),
            )
            .await?;

        // Discounts: percentage ranking
        manager
            .create_index(
                Index::create()
                    .name("idx_discounts_percentage")
                    .table(Discounts::Table)
                    .col(Discounts::DiscountPercentage)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_discounts_accommodation")
                    .table(Discounts::Table)
                    .col(Discounts::AccommodationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_discounts_accommodation", "idx_discounts_percentage"] {
            manager.drop_index(Index::drop().name(name).table(Discounts::Table).to_owned()).await?;
        }
        for name in ["idx_bookings_accommodation", "idx_bookings_guest", "idx_bookings_status"] {
            manager.drop_index(Index::drop().name(name).table(Bookings::Table).to_owned()).await?;
        }
        for name in ["idx_accommodations_price", "idx_accommodations_host"] {
            manager.drop_index(Index::drop().name(name).table(Accommodations::Table).to_owned()).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accommodations { Table, HostId, PricePerNight }

#[derive(DeriveIden)]
enum Bookings { Table, GuestId, AccommodationId, Status }

#[derive(DeriveIden)]
enum Discounts { Table, AccommodationId, DiscountPercentage }
