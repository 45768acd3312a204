use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trip_id: i32,
    pub plan_type: String,
    pub plan_name: String,
    pub plan_place_id: Option<String>,
    pub start_date: DateTimeUtc,
    pub end_date: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub city_name: String,
    pub utc_offset_minutes: i32,
    pub date_created: DateTimeUtc,
    pub date_modified: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Trip,
    #[sea_orm(has_many = "super::plan_detail::Entity")]
    PlanDetail,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::plan_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
