//! Create `discounts` table: a time-bounded percentage off an accommodation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Discounts::Id))
                    .col(integer(Discounts::AccommodationId).not_null())
                    .col(integer(Discounts::DiscountPercentage).not_null())
                    .col(date(Discounts::StartDate).not_null())
                    .col(date(Discounts::EndDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discounts_accommodation")
                            .from(Discounts::Table, Discounts::AccommodationId)
                            .to(Accommodations::Table, Accommodations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Discounts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Discounts { Table, Id, AccommodationId, DiscountPercentage, StartDate, EndDate }

#[derive(DeriveIden)]
enum Accommodations { Table, Id }
