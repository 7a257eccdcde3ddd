//! Create `bookings` table linking a guest to an accommodation.
//!
//! Status is restricted to `Confirmed`, `Pending` and `Cancelled`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::GuestId).not_null())
                    .col(integer(Bookings::AccommodationId).not_null())
                    .col(
                        string_len(Bookings::Status, 16)
                            .not_null()
                            .check(Expr::col(Bookings::Status).is_in(["Confirmed", "Pending", "Cancelled"])),
                    )
                    .col(date(Bookings::CheckinDate).not_null())
                    .col(date(Bookings::CheckoutDate).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_guest")
                            .from(Bookings::Table, Bookings::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_accommodation")
                            .from(Bookings::Table, Bookings::AccommodationId)
                            .to(Accommodations::Table, Accommodations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings { Table, Id, GuestId, AccommodationId, Status, CheckinDate, CheckoutDate }

#[derive(DeriveIden)]
enum Guests { Table, Id }

#[derive(DeriveIden)]
enum Accommodations { Table, Id }
