use sea_orm_migration::{prelude::*, schema::*};

use super::m20190401_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trips::Table)
                    .if_not_exists()
                    .col(pk_auto(Trips::Id))
                    .col(integer(Trips::UserId))
                    .col(string(Trips::TripName))
                    .col(date(Trips::StartDate))
                    .col(date(Trips::EndDate))
                    .col(text_null(Trips::Description))
                    .col(
                        timestamp_with_time_zone(Trips::DateCreated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Trips::DateModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trips_user_id")
                            .from(Trips::Table, Trips::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trips::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trips {
    Table,
    Id,
    UserId,
    TripName,
    StartDate,
    EndDate,
    Description,
    DateCreated,
    DateModified,
}
