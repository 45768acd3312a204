use sea_orm_migration::{prelude::*, schema::*};

use super::m20190402_000004_create_trip_plans_table::TripPlans;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanDetails::Id))
                    .col(integer(PlanDetails::PlanId))
                    .col(string(PlanDetails::PlanSubtype))
                    .col(string_null(PlanDetails::FromName))
                    .col(string_null(PlanDetails::FromPlaceId))
                    .col(integer_null(PlanDetails::FromUtcOffsetMinutes))
                    .col(string_null(PlanDetails::ToName))
                    .col(string_null(PlanDetails::ToPlaceId))
                    .col(integer_null(PlanDetails::ToUtcOffsetMinutes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plan_details_plan_id")
                            .from(PlanDetails::Table, PlanDetails::PlanId)
                            .to(TripPlans::Table, TripPlans::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanDetails {
    Table,
    Id,
    PlanId,
    PlanSubtype,
    FromName,
    FromPlaceId,
    FromUtcOffsetMinutes,
    ToName,
    ToPlaceId,
    ToUtcOffsetMinutes,
}
