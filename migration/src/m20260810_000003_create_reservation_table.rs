use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_user_table::User;
use crate::m20260810_000002_create_flight_table::Flight;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::ReservationId))
                    .col(string(Reservation::UserId))
                    .col(string(Reservation::UserName))
                    .col(string(Reservation::FlightId))
                    .col(string(Reservation::FlightName))
                    .col(string(Reservation::Seat))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_flight")
                            .from(Reservation::Table, Reservation::FlightId)
                            .to(Flight::Table, Flight::FlightId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Reservation {
    #[sea_orm(iden = "reservations")]
    Table,
    ReservationId,
    UserId,
    UserName,
    FlightId,
    FlightName,
    Seat,
}
