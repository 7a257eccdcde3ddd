//! Create `accommodations` table with FK to `hosts`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodations::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodations::Id))
                    .col(integer(Accommodations::HostId).not_null())
                    .col(string_len(Accommodations::Title, 255).not_null())
                    .col(ColumnDef::new(Accommodations::Description).text().null())
                    .col(double(Accommodations::PricePerNight).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodations_host")
                            .from(Accommodations::Table, Accommodations::HostId)
                            .to(Hosts::Table, Hosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accommodations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accommodations { Table, Id, HostId, Title, Description, PricePerNight }

#[derive(DeriveIden)]
enum Hosts { Table, Id }
