//! Create `hosts` table: a user acting as a listing owner.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hosts::Table)
                    .if_not_exists()
                    .col(pk_auto(Hosts::Id))
                    .col(integer(Hosts::UserId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hosts_user")
                            .from(Hosts::Table, Hosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Hosts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Hosts { Table, Id, UserId }

#[derive(DeriveIden)]
enum Users { Table, Id }
