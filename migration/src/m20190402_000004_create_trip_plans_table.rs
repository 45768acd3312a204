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
                    .table(TripPlans::Table)
                    .if_not_exists()
                    .col(pk_auto(TripPlans::Id))
                    .col(integer(TripPlans::TripId))
                    .col(string(TripPlans::PlanType))
                    .col(string(TripPlans::PlanName))
                    .col(string_null(TripPlans::PlanPlaceId))
                    .col(timestamp_with_time_zone(TripPlans::StartDate))
                    .col(timestamp_with_time_zone_null(TripPlans::EndDate))
                    .col(text_null(TripPlans::Description))
                    .col(string(TripPlans::CityName))
                    .col(integer(TripPlans::UtcOffsetMinutes))
                    .col(
                        timestamp_with_time_zone(TripPlans::DateCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(TripPlans::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_plans_trip_id")
                            .from(TripPlans::Table, TripPlans::TripId)
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
            .drop_table(Table::drop().table(TripPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripPlans {
    Table,
    Id,
    TripId,
    PlanType,
    PlanName,
    PlanPlaceId,
    StartDate,
    EndDate,
    Description,
    CityName,
    UtcOffsetMinutes,
    DateCreated,
    DateModified,
}
