use sea_orm_migration::{prelude::*, schema::*};

use super::m20190401_000002_create_trips_table::Trips;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripDestCities::Table)
                    .if_not_exists()
                    .col(pk_auto(TripDestCities::Id))
                    .col(integer(TripDestCities::TripId))
                    .col(string(TripDestCities::CityName))
                    .col(string(TripDestCities::CityPlaceId))
                    .col(integer(TripDestCities::UtcOffsetMinutes))
                    .col(double_null(TripDestCities::NeLat))
                    .col(double_null(TripDestCities::NeLng))
                    .col(double_null(TripDestCities::SwLat))
                    .col(double_null(TripDestCities::SwLng))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_dest_cities_trip_id")
                            .from(TripDestCities::Table, TripDestCities::TripId)
                            .to(Trips::Table, Trips::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripDestCities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripDestCities {
    Table,
    Id,
    TripId,
    CityName,
    CityPlaceId,
    UtcOffsetMinutes,
    NeLat,
    NeLng,
    SwLat,
    SwLng,
}
