//! Create `guests` table: a user acting as a booker.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(pk_auto(Guests::Id))
                    .col(integer(Guests::UserId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guests_user")
                            .from(Guests::Table, Guests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Guests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Guests { Table, Id, UserId }

#[derive(DeriveIden)]
enum Users { Table, Id }
